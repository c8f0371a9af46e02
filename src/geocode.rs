//! Nominatim HTTP adapter for address lookup, and the batch pipeline that
//! turns imported rows into routable points.

use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::GeocodeError;
use crate::import::ImportRow;
use crate::point::{Delivery, Point};
use crate::traits::AddressResolver;

/// Pause between consecutive lookups in a batch.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "SantaRouteOptimizer/1.0".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

impl AddressResolver for NominatimClient {
    fn resolve(&self, address: &str) -> Result<Option<(f64, f64)>, GeocodeError> {
        let places = self
            .client
            .get(self.search_url())
            .query(&[("format", "json"), ("q", address), ("limit", "1")])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>())?;

        first_coordinates(&places)
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn first_coordinates(places: &[NominatimPlace]) -> Result<Option<(f64, f64)>, GeocodeError> {
    let Some(place) = places.first() else {
        return Ok(None);
    };

    let lat = place
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::invalid_coordinate("lat", place.lat.as_str()))?;
    let lng = place
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::invalid_coordinate("lon", place.lon.as_str()))?;

    Ok(Some((lat, lng)))
}

/// Resolves imported rows in order and builds delivery points from the ones
/// that could be located.
///
/// Rows that are not found or whose lookup fails are skipped with a warning.
/// Every resolved point gets a fresh random (v4 UUID) id, so batches can be
/// appended to an existing route without id clashes.
/// `interval` is slept between consecutive lookups.
pub fn resolve_batch<R: AddressResolver + ?Sized>(
    resolver: &R,
    rows: &[ImportRow],
    interval: Duration,
) -> Vec<Point<Delivery>> {
    let mut points = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        if index > 0 && !interval.is_zero() {
            thread::sleep(interval);
        }

        match resolver.resolve(&row.address) {
            Ok(Some((lat, lng))) => {
                let mut delivery = Delivery::new(Uuid::new_v4().to_string(), row.address.clone());
                delivery.name = row.name.clone();
                points.push(Point::new(lat, lng, delivery));
            }
            Ok(None) => warn!(address = %row.address, "address not found, skipping"),
            Err(err) => warn!(address = %row.address, error = %err, "geocoding failed, skipping"),
        }
    }

    debug!(requested = rows.len(), resolved = points.len(), "resolved import batch");
    points
}
