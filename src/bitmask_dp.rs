//! Bitmask dynamic programming solver.
//!
//! Held-Karp over states `(visited_mask, last_index)`: the minimum cost of
//! reaching `last_index` having visited exactly the stops in `visited_mask`.
//! Exact like the permutation search, but O(n^2 * 2^n) instead of O(n!).

use crate::cost::CostMatrix;
use crate::error::SolveError;

/// Default ceiling on the number of locations.
///
/// The state table holds `2^n << index_bits(n)` entries; past ~20 locations
/// it no longer fits commodity memory.
pub(crate) const DEFAULT_LOCATION_LIMIT: usize = 20;

/// Finds the minimum-cost visiting order with bitmask DP.
///
/// Index 0 is the fixed start. Cost and predecessor tables are flat arrays
/// indexed by `(mask << index_bits) | last`; both are checked against
/// `limit` and allocated up front, scoped to this call. Returns
/// `DpCapacityExceeded` before allocating anything when the input is over
/// the ceiling.
pub(crate) fn plan(costs: &CostMatrix, limit: usize) -> Result<(Vec<usize>, f64), SolveError> {
    let n = costs.len();
    if n > limit {
        return Err(SolveError::DpCapacityExceeded {
            locations: n,
            limit,
        });
    }

    let bits = index_bits(n);
    let full: usize = (1 << n) - 1;

    let mut table = vec![f64::INFINITY; (full + 1) << bits];
    let mut parent = vec![u32::MAX; (full + 1) << bits];

    // Only the start visited, at the start, for free.
    table[1 << bits] = 0.0;

    // Masks grow monotonically across transitions, so a single ascending
    // sweep sees every state after all its predecessors.
    for mask in 1..=full {
        if mask & 1 == 0 {
            // The start is visited first in every reachable state.
            continue;
        }
        for last in 0..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let here = table[(mask << bits) | last];
            if !here.is_finite() {
                continue;
            }
            for next in 0..n {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let state = ((mask | (1 << next)) << bits) | next;
                let candidate = here + costs.cost(last, next);
                if candidate < table[state] {
                    table[state] = candidate;
                    parent[state] = last as u32;
                }
            }
        }
    }

    let mut best_last = 0;
    let mut best_cost = f64::INFINITY;
    for last in 0..n {
        let cost = table[(full << bits) | last];
        if cost < best_cost {
            best_cost = cost;
            best_last = last;
        }
    }

    Ok((reconstruct(&parent, bits, n, best_last), best_cost))
}

/// Walks predecessor pointers backward from the optimal final state.
fn reconstruct(parent: &[u32], bits: usize, n: usize, best_last: usize) -> Vec<usize> {
    let full: usize = (1 << n) - 1;
    let mut order = vec![0usize; n];
    let mut mask = full;
    let mut last = best_last;

    for slot in (0..n).rev() {
        order[slot] = last;
        if slot == 0 {
            break;
        }
        let prev = parent[(mask << bits) | last] as usize;
        mask &= !(1 << last);
        last = prev;
    }

    order
}

/// Smallest bit width that addresses `n` stop indices.
fn index_bits(n: usize) -> usize {
    (usize::BITS - (n - 1).leading_zeros()) as usize
}
