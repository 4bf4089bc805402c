//! Edge cost model: physical distance plus a priority-ordering penalty.
//!
//! Every solver minimizes the same penalized cost, but reported route
//! distances always come from the raw distance table.

use crate::haversine;
use crate::location::Location;

/// Default weight per priority level skipped out of order.
///
/// Sized so that a single one-level violation outweighs any realistic
/// intercity distance in kilometers.
pub const DEFAULT_PENALTY_WEIGHT: f64 = 1000.0;

/// Penalty for traveling from a stop of priority `from` to one of priority `to`.
///
/// An edge that moves from a less urgent stop back to a more urgent one
/// means the urgent stop was put off too long, and is charged one `weight`
/// per priority level crossed. Edges toward equal or less urgent stops are
/// free, so routes that serve urgent stops first pay no penalty at all.
pub fn priority_penalty(from: u8, to: u8, weight: f64) -> f64 {
    if from <= to {
        return 0.0;
    }
    f64::from(from - to) * weight
}

/// Per-request table of pairwise distances and penalized edge costs.
///
/// Built once per solver invocation and owned exclusively by that call.
/// Flat row-major storage.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    n: usize,
    distance: Vec<f64>,
    cost: Vec<f64>,
}

impl CostMatrix {
    pub fn build(locations: &[Location], penalty_weight: f64) -> Self {
        let n = locations.len();
        let mut distance = vec![0.0; n * n];
        let mut cost = vec![0.0; n * n];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }
                let km = haversine::distance_km(from, to);
                distance[i * n + j] = km;
                cost[i * n + j] = km + priority_penalty(from.priority, to.priority, penalty_weight);
            }
        }

        Self { n, distance, cost }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Physical distance in kilometers between two stops.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distance[from * self.n + to]
    }

    /// Penalized edge cost the solvers minimize.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.cost[from * self.n + to]
    }

    /// Penalized cost summed over consecutive pairs of an index order.
    pub fn route_cost(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|pair| self.cost(pair[0], pair[1]))
            .sum()
    }

    /// Physical distance summed over consecutive pairs of an index order.
    pub fn route_distance(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: u64, lat: f64, lon: f64, priority: u8) -> Location {
        Location::new(id, format!("loc-{id}"), lat, lon, priority)
    }

    #[test]
    fn test_penalty_free_toward_less_urgent() {
        assert_eq!(priority_penalty(1, 5, 1000.0), 0.0);
        assert_eq!(priority_penalty(3, 3, 1000.0), 0.0);
    }

    #[test]
    fn test_penalty_charged_toward_more_urgent() {
        assert_eq!(priority_penalty(5, 1, 1000.0), 4000.0);
        assert_eq!(priority_penalty(2, 1, 1000.0), 1000.0);
    }

    #[test]
    fn test_penalty_scales_with_weight() {
        assert_eq!(priority_penalty(3, 1, 10.0), 20.0);
        assert_eq!(priority_penalty(3, 1, 0.0), 0.0);
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let locations = vec![
            loc(1, 36.1, -115.1, 1),
            loc(2, 36.2, -115.2, 3),
            loc(3, 36.3, -115.3, 5),
        ];
        let matrix = CostMatrix::build(&locations, DEFAULT_PENALTY_WEIGHT);
        for i in 0..locations.len() {
            assert_eq!(matrix.distance(i, i), 0.0);
            assert_eq!(matrix.cost(i, i), 0.0);
        }
    }

    #[test]
    fn test_matrix_distance_symmetric_cost_not() {
        let locations = vec![loc(1, 36.1, -115.1, 5), loc(2, 36.2, -115.2, 1)];
        let matrix = CostMatrix::build(&locations, DEFAULT_PENALTY_WEIGHT);

        assert_eq!(matrix.distance(0, 1), matrix.distance(1, 0));
        // 5 -> 1 crosses four levels toward more urgent; 1 -> 5 is free.
        assert_eq!(matrix.cost(0, 1), matrix.distance(0, 1) + 4000.0);
        assert_eq!(matrix.cost(1, 0), matrix.distance(1, 0));
    }

    #[test]
    fn test_route_cost_and_distance() {
        let locations = vec![
            loc(1, 36.0, -115.0, 1),
            loc(2, 36.5, -115.5, 3),
            loc(3, 37.0, -116.0, 2),
        ];
        let matrix = CostMatrix::build(&locations, DEFAULT_PENALTY_WEIGHT);
        let order = [0, 1, 2];

        let expected_distance = matrix.distance(0, 1) + matrix.distance(1, 2);
        assert!((matrix.route_distance(&order) - expected_distance).abs() < 1e-9);

        // 1 -> 3 is free, 3 -> 2 crosses one level.
        let expected_cost = expected_distance + 1000.0;
        assert!((matrix.route_cost(&order) - expected_cost).abs() < 1e-9);
    }
}
