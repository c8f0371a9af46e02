//! Bulk import of delivery addresses from comma-separated text.
//!
//! One row per location: address first, optional display name second. A
//! header row is detected by the word "address" in the first line.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    pub address: String,
    pub name: Option<String>,
}

/// Parses tabular text into import rows. Never fails; lines without an
/// address are dropped.
pub fn parse_rows(text: &str) -> Vec<ImportRow> {
    let mut lines = text.trim().split('\n').map(|line| line.trim_end_matches('\r'));

    let mut rows = Vec::new();
    let Some(first) = lines.next() else {
        return rows;
    };
    let header = first.to_lowercase().contains("address");

    let body = std::iter::once(first).filter(|_| !header).chain(lines);
    for line in body {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = split_fields(line).into_iter();
        let address = fields.next().unwrap_or_default();
        if address.is_empty() {
            continue;
        }
        let name = fields.next().filter(|name| !name.is_empty());

        rows.push(ImportRow { address, name });
    }

    rows
}

/// Splits one line on commas, honouring double-quoted fields. Quotes are
/// removed, `""` inside quotes is a literal quote, and every field is trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());

    fields
}
