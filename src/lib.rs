//! route-optimizer core
//!
//! Orders delivery points on the globe into a short one-way tour
//! (nearest-neighbour construction followed by 2-opt) and summarizes it.

pub mod traits;
pub mod error;
pub mod point;
pub mod haversine;
pub mod solver;
pub mod summary;
pub mod polyline;
pub mod import;
pub mod geocode;
