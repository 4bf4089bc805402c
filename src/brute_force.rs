//! Exact permutation search.
//!
//! Enumerates every ordering of the free stops behind the fixed start and
//! keeps the cheapest. Only viable for small inputs (n <= 10 or so); the
//! caller is responsible for picking a solver that fits its input size.

use crate::cost::CostMatrix;

/// Finds the minimum-cost visiting order by exhaustive search.
///
/// Index 0 is the fixed start. Permutations are generated recursively in
/// ascending-index order and only a strictly lower cost replaces the
/// incumbent, so ties resolve to the first ordering generated. O(n!) time,
/// O(n) auxiliary space.
pub(crate) fn plan(costs: &CostMatrix) -> (Vec<usize>, f64) {
    let n = costs.len();
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut used = vec![false; n];
    used[0] = true;

    let mut best_order = Vec::new();
    let mut best_cost = f64::INFINITY;

    permute(
        costs,
        0,
        0.0,
        &mut order,
        &mut used,
        &mut best_order,
        &mut best_cost,
    );

    (best_order, best_cost)
}

fn permute(
    costs: &CostMatrix,
    last: usize,
    cost_so_far: f64,
    order: &mut Vec<usize>,
    used: &mut [bool],
    best_order: &mut Vec<usize>,
    best_cost: &mut f64,
) {
    let n = costs.len();
    if order.len() == n {
        if cost_so_far < *best_cost {
            *best_cost = cost_so_far;
            best_order.clear();
            best_order.extend_from_slice(order);
        }
        return;
    }

    for next in 1..n {
        if used[next] {
            continue;
        }
        used[next] = true;
        order.push(next);
        permute(
            costs,
            next,
            cost_so_far + costs.cost(last, next),
            order,
            used,
            best_order,
            best_cost,
        );
        order.pop();
        used[next] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::DEFAULT_PENALTY_WEIGHT;
    use crate::location::Location;

    fn loc(id: u64, lat: f64, lon: f64, priority: u8) -> Location {
        Location::new(id, format!("loc-{id}"), lat, lon, priority)
    }

    #[test]
    fn test_two_locations() {
        let stops = vec![loc(1, 36.0, -115.0, 1), loc(2, 36.5, -115.5, 1)];
        let costs = CostMatrix::build(&stops, DEFAULT_PENALTY_WEIGHT);
        let (order, cost) = plan(&costs);
        assert_eq!(order, vec![0, 1]);
        assert!((cost - costs.cost(0, 1)).abs() < 1e-9);
    }

    #[test]
    fn test_picks_cheaper_of_two_free_permutations() {
        // Start in Las Vegas; Boulder City is close, Reno far. With equal
        // priorities the cheaper order visits Boulder City first.
        let stops = vec![
            loc(1, 36.17, -115.14, 1),
            loc(2, 39.53, -119.81, 3), // Reno
            loc(3, 35.98, -114.83, 3), // Boulder City
        ];
        let costs = CostMatrix::build(&stops, DEFAULT_PENALTY_WEIGHT);
        let (order, cost) = plan(&costs);
        assert_eq!(order, vec![0, 2, 1]);

        let alternative = costs.route_cost(&[0, 1, 2]);
        assert!(cost < alternative);
        assert!((cost - costs.route_cost(&[0, 2, 1])).abs() < 1e-9);
    }

    #[test]
    fn test_tie_resolves_to_first_generated() {
        // Two free stops mirrored across the start: both orders cost the
        // same, so the lexicographically first permutation wins.
        let stops = vec![
            loc(1, 0.0, 0.0, 3),
            loc(2, 1.0, 0.0, 3),
            loc(3, -1.0, 0.0, 3),
        ];
        let costs = CostMatrix::build(&stops, DEFAULT_PENALTY_WEIGHT);
        let (order, _) = plan(&costs);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_priority_violation_outweighs_distance() {
        // Visiting the nearby priority-5 stop before the distant priority-1
        // stop would cost a 4000 km-equivalent penalty on the way back.
        let stops = vec![
            loc(1, 36.0, -115.0, 1),
            loc(2, 36.1, -115.1, 5),
            loc(3, 39.5, -119.8, 1),
        ];
        let costs = CostMatrix::build(&stops, DEFAULT_PENALTY_WEIGHT);
        let (order, _) = plan(&costs);
        assert_eq!(order, vec![0, 2, 1]);
    }
}
