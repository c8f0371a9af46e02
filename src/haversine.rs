//! Great-circle distances between points.
//!
//! Straight-line distance over a spherical Earth. Ignores roads entirely,
//! which is what the optimizer wants.

use rayon::prelude::*;

use crate::point::Point;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two (lat, lng) pairs in kilometers.
///
/// Coordinates are not validated; out-of-range input produces a defined
/// but meaningless number.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two points in kilometers.
pub fn distance<P, Q>(a: &Point<P>, b: &Point<Q>) -> f64 {
    haversine_km(a.coords(), b.coords())
}

/// Length of the open path through `points` in order (no closing leg).
pub fn path_length<P>(points: &[Point<P>]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}

/// Pairwise haversine distances for a fixed set of locations.
///
/// Stored flat, row-major: the entry for `(from, to)` lives at
/// `from * len + to`. The matrix is exactly symmetric with a zero diagonal.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    distances: Vec<f64>,
    len: usize,
}

impl DistanceMatrix {
    pub fn new(locations: &[(f64, f64)]) -> Self {
        let len = locations.len();
        let mut distances = vec![0.0; len * len];

        if len > 0 {
            distances
                .par_chunks_mut(len)
                .enumerate()
                .for_each(|(i, row)| {
                    for (j, cell) in row.iter_mut().enumerate() {
                        // Always evaluate with the lower index first so (i, j) and (j, i) agree bit for bit.
                        *cell = match i.cmp(&j) {
                            std::cmp::Ordering::Less => haversine_km(locations[i], locations[j]),
                            std::cmp::Ordering::Greater => haversine_km(locations[j], locations[i]),
                            std::cmp::Ordering::Equal => 0.0,
                        };
                    }
                });
        }

        Self { distances, len }
    }

    pub fn from_points<P>(points: &[Point<P>]) -> Self {
        let locations: Vec<(f64, f64)> = points.iter().map(Point::coords).collect();
        Self::new(&locations)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.len + to]
    }

    /// Length of the open path visiting `order` (indices into the matrix).
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|pair| self.get(pair[0], pair[1])).sum()
    }
}
