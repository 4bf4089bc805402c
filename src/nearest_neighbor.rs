//! Priority-weighted nearest neighbor heuristic.
//!
//! Greedy construction with no backtracking: each step appends the
//! unvisited stop with the cheapest penalized edge from the current one.
//! Approximate, but O(n^2) and viable at any input size.

use crate::cost::CostMatrix;
use crate::location::Location;

/// Builds a route greedily from the fixed start at index 0.
///
/// Ties on edge cost prefer the more urgent candidate (lower priority
/// number), then the earlier input index — candidates are scanned in input
/// order and only a strictly better key replaces the incumbent.
pub(crate) fn plan(costs: &CostMatrix, stops: &[Location]) -> (Vec<usize>, f64) {
    let n = costs.len();
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    order.push(0);
    visited[0] = true;

    let mut current = 0;
    let mut total_cost = 0.0;

    while order.len() < n {
        let mut best: Option<(f64, u8, usize)> = None;

        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let cost = costs.cost(current, candidate);
            let priority = stops[candidate].priority;
            let replace = match best {
                None => true,
                Some((best_cost, best_priority, _)) => {
                    cost < best_cost || (cost == best_cost && priority < best_priority)
                }
            };
            if replace {
                best = Some((cost, priority, candidate));
            }
        }

        match best {
            Some((cost, _, next)) => {
                visited[next] = true;
                order.push(next);
                total_cost += cost;
                current = next;
            }
            None => break,
        }
    }

    (order, total_cost)
}
