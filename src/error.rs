//! Errors raised by the collaborators around the optimizer core.
//!
//! The core itself (distance, construction, 2-opt, summary) is total and
//! has no error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geocoder returned an invalid {field}: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },
}

impl GeocodeError {
    pub fn invalid_coordinate(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            field,
            value: value.into(),
        }
    }
}
