//! Route statistics for a finished tour.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::haversine::path_length;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::traits::DeliveryStatus;

/// Assumed sleigh speed for time estimation.
const DEFAULT_SPEED_KMH: f64 = 10_000.0;

/// Flat dwell time spent at each stop, in minutes.
const DEFAULT_DWELL_MINUTES: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Assumed travel speed in km/h.
    pub speed_kmh: f64,
    /// Minutes spent at every stop.
    pub dwell_minutes: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            dwell_minutes: DEFAULT_DWELL_MINUTES,
        }
    }
}

impl SummaryConfig {
    pub fn new(speed_kmh: f64, dwell_minutes: f64) -> Self {
        Self {
            speed_kmh,
            dwell_minutes,
        }
    }

    /// Unrounded travel plus dwell time in minutes.
    pub fn estimated_minutes(&self, total_distance_km: f64, stops: usize) -> f64 {
        (total_distance_km / self.speed_kmh) * 60.0 + stops as f64 * self.dwell_minutes
    }
}

/// Summary of a tour, rounded for presentation.
///
/// `total_distance` is kilometers to one decimal, `estimated_time` whole
/// minutes (half rounds away from zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStats {
    pub total_distance: f64,
    pub estimated_time: f64,
    pub total_stops: usize,
    pub delivered_count: usize,
}

impl RouteStats {
    /// Share of delivered stops in percent, 0 when there are no stops.
    pub fn progress_percent(&self) -> f64 {
        if self.total_stops == 0 {
            return 0.0;
        }
        self.delivered_count as f64 / self.total_stops as f64 * 100.0
    }
}

impl fmt::Display for RouteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}/{} delivered",
            format_distance(self.total_distance),
            format_duration(self.estimated_time),
            self.delivered_count,
            self.total_stops
        )
    }
}

pub fn summarize<P: DeliveryStatus>(tour: &[Point<P>]) -> (RouteStats, Polyline) {
    summarize_with(tour, &SummaryConfig::default())
}

pub fn summarize_with<P: DeliveryStatus>(
    tour: &[Point<P>],
    config: &SummaryConfig,
) -> (RouteStats, Polyline) {
    let total_stops = tour.len();
    let total_distance = path_length(tour);
    let estimated = config.estimated_minutes(total_distance, total_stops);
    let delivered_count = tour.iter().filter(|point| point.payload.delivered()).count();

    debug!(
        total_stops,
        delivered_count,
        total_distance_km = total_distance,
        estimated_minutes = estimated,
        "summarized route"
    );

    let stats = RouteStats {
        total_distance: round_to_tenth(total_distance),
        estimated_time: estimated.round(),
        total_stops,
        delivered_count,
    };

    (stats, Polyline::from_tour(tour))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Dashboard distance label: "123.4 km", or "12.3k km" from 1000 km up.
pub fn format_distance(km: f64) -> String {
    // `{:.1}` breaks exact ties to even; dashboard labels round halves up.
    if km >= 1000.0 {
        format!("{:.1}k km", round_to_tenth(km / 1000.0))
    } else {
        format!("{:.1} km", round_to_tenth(km))
    }
}

/// Dashboard time label: "42 min", or "2h 5m" from an hour up.
pub fn format_duration(minutes: f64) -> String {
    if minutes >= 60.0 {
        let hours = (minutes / 60.0).floor();
        let mins = (minutes % 60.0).round();
        format!("{}h {}m", hours, mins)
    } else {
        format!("{} min", minutes.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine::haversine_km;

    #[test]
    fn test_estimated_time_rounds_half_up() {
        let config = SummaryConfig::default();
        let minutes = config.estimated_minutes(10_000.0, 5);
        assert_eq!(minutes, 62.5);
    }

    #[test]
    fn test_stats_round_half_minute_up() {
        // 125 coincident stops: no travel, 125 * 0.5 = 62.5 minutes of dwell.
        let tour: Vec<Point<()>> = (0..125).map(|_| Point::new(10.0, 10.0, ())).collect();
        let (stats, _) = summarize(&tour);
        assert_eq!(stats.total_distance, 0.0);
        assert_eq!(stats.estimated_time, 63.0);

        // One leg at one leg per hour is 60 minutes; 5 stops add 2.5.
        let leg = haversine_km((0.0, 0.0), (0.0, 1.0));
        let config = SummaryConfig::new(leg, 0.5);
        let line: Vec<Point<()>> = [0.0, 1.0, 1.0, 1.0, 1.0]
            .iter()
            .map(|&lng| Point::new(0.0, lng, ()))
            .collect();
        let (stats, _) = summarize_with(&line, &config);
        assert_eq!(stats.estimated_time, 63.0);
    }

    #[test]
    fn test_empty_tour_is_all_zero() {
        let (stats, polyline) = summarize::<bool>(&[]);
        assert_eq!(stats, RouteStats::default());
        assert!(polyline.is_empty());
    }

    #[test]
    fn test_summary_of_two_legs() {
        let tour = vec![
            Point::new(0.0, 0.0, false),
            Point::new(0.0, 1.0, true),
            Point::new(1.0, 0.0, false),
        ];
        let raw = haversine_km((0.0, 0.0), (0.0, 1.0)) + haversine_km((0.0, 1.0), (1.0, 0.0));

        let (stats, polyline) = summarize(&tour);

        assert_eq!(stats.total_distance, (raw * 10.0).round() / 10.0);
        assert_eq!(stats.total_stops, 3);
        assert_eq!(stats.delivered_count, 1);
        // ~268 km at 10000 km/h is ~1.6 minutes, plus 1.5 minutes of dwell.
        assert_eq!(stats.estimated_time, 3.0);
        assert_eq!(polyline.points(), &[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
    }

    #[test]
    fn test_time_uses_unrounded_distance() {
        // 1 km at 1 km/h is 60 minutes; dwell disabled.
        let config = SummaryConfig::new(1.0, 0.0);
        let tour = vec![Point::new(0.0, 0.0, ()), Point::new(0.0, 0.004, ())];
        let raw = haversine_km((0.0, 0.0), (0.0, 0.004));

        let (stats, _) = summarize_with(&tour, &config);

        assert_eq!(stats.total_distance, 0.4);
        assert_eq!(stats.estimated_time, (raw * 60.0).round());
    }

    #[test]
    fn test_progress_percent() {
        let stats = RouteStats {
            total_distance: 0.0,
            estimated_time: 0.0,
            total_stops: 5,
            delivered_count: 2,
        };
        assert_eq!(stats.progress_percent(), 40.0);
        assert_eq!(RouteStats::default().progress_percent(), 0.0);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0.0 km");
        assert_eq!(format_distance(0.25), "0.3 km");
        assert_eq!(format_distance(987.6), "987.6 km");
        assert_eq!(format_distance(1250.0), "1.3k km");
        assert_eq!(format_distance(12_345.0), "12.3k km");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42.0), "42 min");
        assert_eq!(format_duration(60.0), "1h 0m");
        assert_eq!(format_duration(125.0), "2h 5m");
    }

    #[test]
    fn test_display() {
        let stats = RouteStats {
            total_distance: 1520.4,
            estimated_time: 63.0,
            total_stops: 5,
            delivered_count: 2,
        };
        assert_eq!(stats.to_string(), "1.5k km, 1h 3m, 2/5 delivered");
    }

    #[test]
    fn test_stats_wire_shape() {
        let stats = RouteStats {
            total_distance: 12.5,
            estimated_time: 3.0,
            total_stops: 2,
            delivered_count: 1,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalDistance"], 12.5);
        assert_eq!(json["estimatedTime"], 3.0);
        assert_eq!(json["totalStops"], 2);
        assert_eq!(json["deliveredCount"], 1);
    }
}
