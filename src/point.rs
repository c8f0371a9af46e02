//! Geographic points and the delivery payload they usually carry.

use serde::{Deserialize, Serialize};

use crate::traits::DeliveryStatus;

/// A location on the globe with an opaque payload.
///
/// The optimizer reads `lat`/`lng` and moves whole points around; the
/// payload is never inspected or modified. On the wire the payload's
/// fields sit next to `lat`/`lng` in one flat record, so it must serialize
/// as a map (a struct) or as unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point<P = Delivery> {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lng: f64,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Point<P> {
    pub fn new(lat: f64, lng: f64, payload: P) -> Self {
        Self { lat, lng, payload }
    }

    /// Location coordinates (lat, lng).
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// How nice the recipient has been this year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[default]
    Nice,
    Naughty,
    ExtraNice,
}

/// A single delivery stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub delivered: bool,
}

impl Delivery {
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            name: None,
            priority: Priority::Nice,
            delivered: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_delivered(mut self, delivered: bool) -> Self {
        self.delivered = delivered;
        self
    }
}

impl DeliveryStatus for Delivery {
    fn delivered(&self) -> bool {
        self.delivered
    }
}
