//! Polyline view of a finished tour.
//!
//! Plain decoded coordinates in tour order. Any compact encoding for a map
//! widget belongs to whoever renders it.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A route geometry as (latitude, longitude) pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// One pair per tour element, same order.
    pub fn from_tour<P>(tour: &[Point<P>]) -> Self {
        Self {
            points: tour.iter().map(Point::coords).collect(),
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
