//! Real city coordinates for realistic test fixtures.
//!
//! Coordinates are city-centre values rounded to four decimals.

use route_optimizer::point::{Delivery, Point};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl City {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn point(&self, id: usize) -> Point<Delivery> {
        Point::new(
            self.lat,
            self.lng,
            Delivery::new(id.to_string(), self.name),
        )
    }
}

/// Departure point for every fixture route.
pub const NORTH_POLE: City = City::new("North Pole", 90.0, 0.0);

// ============================================================================
// Europe
// ============================================================================

pub const EUROPE: &[City] = &[
    City::new("London", 51.5074, -0.1278),
    City::new("Paris", 48.8566, 2.3522),
    City::new("Berlin", 52.5200, 13.4050),
    City::new("Madrid", 40.4168, -3.7038),
    City::new("Rome", 41.9028, 12.4964),
    City::new("Vienna", 48.2082, 16.3738),
    City::new("Amsterdam", 52.3676, 4.9041),
    City::new("Stockholm", 59.3293, 18.0686),
    City::new("Warsaw", 52.2297, 21.0122),
    City::new("Lisbon", 38.7223, -9.1393),
    City::new("Oslo", 59.9139, 10.7522),
    City::new("Athens", 37.9838, 23.7275),
];

// ============================================================================
// North America
// ============================================================================

pub const NORTH_AMERICA: &[City] = &[
    City::new("New York", 40.7128, -74.0060),
    City::new("Los Angeles", 34.0522, -118.2437),
    City::new("Chicago", 41.8781, -87.6298),
    City::new("Houston", 29.7604, -95.3698),
    City::new("Phoenix", 33.4484, -112.0740),
    City::new("Philadelphia", 39.9526, -75.1652),
    City::new("Toronto", 43.6532, -79.3832),
    City::new("Mexico City", 19.4326, -99.1332),
    City::new("Las Vegas", 36.1699, -115.1398),
    City::new("Seattle", 47.6062, -122.3321),
];

/// Builds a delivery route that starts at the North Pole and visits `cities`
/// in the listed order. Ids are positions in the returned vector.
pub fn route_from_pole(cities: &[City]) -> Vec<Point<Delivery>> {
    std::iter::once(&NORTH_POLE)
        .chain(cities.iter())
        .enumerate()
        .map(|(id, city)| city.point(id))
        .collect()
}

/// Sorted ids of a tour, for permutation checks.
pub fn sorted_ids(points: &[Point<Delivery>]) -> Vec<String> {
    let mut ids: Vec<String> = points.iter().map(|p| p.payload.id.clone()).collect();
    ids.sort();
    ids
}
