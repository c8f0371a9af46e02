//! Route optimizer solver: nearest-neighbour construction plus 2-opt.
//!
//! Both phases work on indices into a precomputed [`DistanceMatrix`]; the
//! owned points are only moved once the final order is known, so every
//! result is a permutation of the input.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::haversine::DistanceMatrix;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::summary::{RouteStats, SummaryConfig, summarize_with};
use crate::traits::DeliveryStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute<P> {
    pub points: Vec<Point<P>>,
    pub stats: RouteStats,
    pub polyline: Polyline,
}

impl<P> OptimizedRoute<P> {
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            stats: RouteStats::default(),
            polyline: Polyline::default(),
        }
    }
}

/// Orders `points` into a short one-way tour and summarizes it.
///
/// The first point is the fixed start. Equivalent to
/// `summarize(improve(construct(points)))` but builds the distance matrix
/// only once.
pub fn optimize_route<P: DeliveryStatus>(points: Vec<Point<P>>) -> OptimizedRoute<P> {
    optimize_route_with(points, &SummaryConfig::default())
}

#[instrument(level = "debug", skip_all, fields(stops = points.len()))]
pub fn optimize_route_with<P: DeliveryStatus>(
    points: Vec<Point<P>>,
    config: &SummaryConfig,
) -> OptimizedRoute<P> {
    if points.is_empty() {
        return OptimizedRoute::empty();
    }

    let matrix = DistanceMatrix::from_points(&points);
    let mut order = nearest_neighbor_order(&matrix);
    two_opt(&matrix, &mut order);

    let points = apply_order(points, &order);
    let (stats, polyline) = summarize_with(&points, config);

    OptimizedRoute {
        points,
        stats,
        polyline,
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Builds a tour greedily: from the first point, always move to the closest
/// unvisited one. Ties go to the point that came first in the input.
pub fn construct<P>(points: Vec<Point<P>>) -> Vec<Point<P>> {
    if points.len() <= 1 {
        return points;
    }

    let matrix = DistanceMatrix::from_points(&points);
    let order = nearest_neighbor_order(&matrix);
    apply_order(points, &order)
}

fn nearest_neighbor_order(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;
    order.push(current);

    while order.len() < n {
        let mut nearest: Option<usize> = None;
        let mut nearest_distance = f64::INFINITY;

        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = matrix.get(current, candidate);
            // Strict comparison keeps the lowest index on ties.
            if nearest.is_none() || d < nearest_distance {
                nearest = Some(candidate);
                nearest_distance = d;
            }
        }

        let Some(next) = nearest else {
            break;
        };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    debug!(stops = n, length_km = matrix.path_length(&order), "nearest-neighbour tour built");
    order
}

// ============================================================================
// Local Search Operators
// ============================================================================

/// Refines a tour with 2-opt segment reversals until none shortens it.
///
/// The first and last points stay where they are.
pub fn improve<P>(tour: Vec<Point<P>>) -> Vec<Point<P>> {
    if tour.len() < 4 {
        return tour;
    }

    let matrix = DistanceMatrix::from_points(&tour);
    let mut order: Vec<usize> = (0..tour.len()).collect();
    if two_opt(&matrix, &mut order) == 0 {
        return tour;
    }
    apply_order(tour, &order)
}

/// Runs 2-opt sweeps over `order` in place. Returns the number of accepted
/// exchanges.
fn two_opt(matrix: &DistanceMatrix, order: &mut [usize]) -> usize {
    let n = order.len();
    if n < 4 {
        return 0;
    }

    let mut exchanges = 0;
    let mut sweeps = 0;
    loop {
        sweeps += 1;
        let mut improved = false;

        for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                let (before, first) = (order[i - 1], order[i]);
                let (last, after) = (order[j], order[j + 1]);

                let current = matrix.get(before, first) + matrix.get(last, after);
                let reversed = matrix.get(before, last) + matrix.get(first, after);

                if reversed < current {
                    order[i..=j].reverse();
                    exchanges += 1;
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    debug!(sweeps, exchanges, length_km = matrix.path_length(order), "2-opt converged");
    exchanges
}

/// Moves the owned points into `order`. `order` must be a permutation of
/// `0..points.len()`.
fn apply_order<P>(points: Vec<Point<P>>, order: &[usize]) -> Vec<Point<P>> {
    debug_assert_eq!(points.len(), order.len());
    let mut slots: Vec<Option<Point<P>>> = points.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&index| slots[index].take())
        .collect()
}
