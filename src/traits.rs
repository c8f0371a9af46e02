//! Core domain traits for the route optimizer.
//!
//! These are intentionally minimal. The solver never looks inside a point's
//! payload; only the summarizer asks whether a stop has been delivered, and
//! only the import pipeline talks to an address resolver.

use crate::error::GeocodeError;

/// Delivery state carried by a point payload.
pub trait DeliveryStatus {
    /// Whether the stop has already been delivered.
    fn delivered(&self) -> bool;
}

impl DeliveryStatus for () {
    fn delivered(&self) -> bool {
        false
    }
}

impl DeliveryStatus for bool {
    fn delivered(&self) -> bool {
        *self
    }
}

impl<T: DeliveryStatus> DeliveryStatus for &T {
    fn delivered(&self) -> bool {
        (**self).delivered()
    }
}

/// Maps a free-text address to coordinates (lat, lng).
///
/// `Ok(None)` means the address could not be found. Errors are reserved for
/// transport or decoding failures.
pub trait AddressResolver {
    fn resolve(&self, address: &str) -> Result<Option<(f64, f64)>, GeocodeError>;
}
