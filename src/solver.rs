//! Solver contract and single-route entry point.
//!
//! All three solvers share one shape: given a cost matrix over a prepared
//! location list with the start fixed at index 0, produce a visiting order
//! and its penalized cost. This module owns the shared preparation (start
//! resolution, priority pre-sort) and dispatches on the caller's algorithm
//! selector.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::bitmask_dp;
use crate::brute_force;
use crate::cost::{CostMatrix, DEFAULT_PENALTY_WEIGHT};
use crate::error::SolveError;
use crate::location::{Location, LocationId};
use crate::nearest_neighbor;

/// Minimum number of locations any solver accepts.
pub const MIN_LOCATIONS: usize = 2;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Weight per priority level crossed by an out-of-order edge.
    pub priority_penalty_weight: f64,
    /// Location count ceiling for the dynamic-programming state table.
    pub dp_location_limit: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            priority_penalty_weight: DEFAULT_PENALTY_WEIGHT,
            dp_location_limit: bitmask_dp::DEFAULT_LOCATION_LIMIT,
        }
    }
}

/// Algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Exhaustive permutation search, O(n!).
    ExactSearch,
    /// Held-Karp style bitmask dynamic programming, O(n^2 * 2^n).
    BitmaskDp,
    /// Priority-weighted nearest neighbor heuristic, O(n^2).
    NearestNeighbor,
}

impl Algorithm {
    /// Every solver, in the order the comparison harness runs them.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::ExactSearch,
        Algorithm::BitmaskDp,
        Algorithm::NearestNeighbor,
    ];

    /// Selector token used at the API boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::ExactSearch => "exact-search",
            Algorithm::BitmaskDp => "bitmask-dp",
            Algorithm::NearestNeighbor => "nearest-neighbor",
        }
    }

    /// Asymptotic time complexity label for display.
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::ExactSearch => "O(n!)",
            Algorithm::BitmaskDp => "O(n^2 * 2^n)",
            Algorithm::NearestNeighbor => "O(n^2)",
        }
    }

    /// Whether the remaining locations are pre-sorted by ascending priority
    /// before this solver sees them. Keeps tie-breaking deterministic for
    /// the exact solvers; the greedy solver keeps the caller's order.
    fn presorts_input(&self) -> bool {
        matches!(self, Algorithm::ExactSearch | Algorithm::BitmaskDp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact-search" => Ok(Algorithm::ExactSearch),
            "bitmask-dp" => Ok(Algorithm::BitmaskDp),
            "nearest-neighbor" => Ok(Algorithm::NearestNeighbor),
            other => Err(SolveError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Outcome of one solver run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Every input location exactly once, in visiting order.
    pub route: Vec<Location>,
    /// Physical distance along the route in kilometers, penalty excluded.
    pub total_distance_km: f64,
    /// Wall-clock duration of the solve, measured by the caller of the solver.
    pub elapsed: Duration,
    /// The resolved starting location (always `route[0]`).
    pub start: Location,
}

/// Computes the optimal visiting order for `locations` with one solver.
///
/// When `start_id` is given it must match a supplied location; the match is
/// fixed as the first stop. Without it the most urgent location starts the
/// route (lowest priority number, ties broken by input order).
pub fn solve(
    locations: &[Location],
    algorithm: Algorithm,
    start_id: Option<LocationId>,
    options: &SolveOptions,
) -> Result<SolveResult, SolveError> {
    tracing::debug!(
        locations = locations.len(),
        algorithm = %algorithm,
        "solving single route"
    );
    run(algorithm, locations, start_id, options)
}

/// Runs one solver over its own private preparation, matrix and tables.
///
/// Shared by `solve` and the comparison harness; nothing allocated here
/// outlives the call, so concurrent runs cannot interfere.
pub(crate) fn run(
    algorithm: Algorithm,
    locations: &[Location],
    start_id: Option<LocationId>,
    options: &SolveOptions,
) -> Result<SolveResult, SolveError> {
    let started = Instant::now();

    let stops = prepare(locations, start_id, algorithm.presorts_input())?;
    let matrix = CostMatrix::build(&stops, options.priority_penalty_weight);

    let (order, cost) = match algorithm {
        Algorithm::ExactSearch => brute_force::plan(&matrix),
        Algorithm::BitmaskDp => bitmask_dp::plan(&matrix, options.dp_location_limit)?,
        Algorithm::NearestNeighbor => nearest_neighbor::plan(&matrix, &stops),
    };

    let elapsed = started.elapsed();
    let total_distance_km = matrix.route_distance(&order);
    let route: Vec<Location> = order.iter().map(|&i| stops[i].clone()).collect();
    let start = route[0].clone();

    tracing::debug!(
        algorithm = %algorithm,
        cost,
        total_distance_km,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "route solved"
    );

    Ok(SolveResult {
        route,
        total_distance_km,
        elapsed,
        start,
    })
}

/// Validates the request and fixes the start at index 0.
///
/// Returns an owned copy of the locations with the resolved start first.
/// With `presort`, the remaining locations are stably sorted by ascending
/// priority number.
fn prepare(
    locations: &[Location],
    start_id: Option<LocationId>,
    presort: bool,
) -> Result<Vec<Location>, SolveError> {
    if locations.len() < MIN_LOCATIONS {
        return Err(SolveError::TooFewLocations {
            found: locations.len(),
        });
    }

    let start_index = match start_id {
        Some(id) => locations
            .iter()
            .position(|location| location.id == id)
            .ok_or(SolveError::UnknownStartLocation(id))?,
        None => most_urgent_index(locations),
    };

    let mut stops = Vec::with_capacity(locations.len());
    stops.push(locations[start_index].clone());
    stops.extend(
        locations
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != start_index)
            .map(|(_, location)| location.clone()),
    );

    if presort {
        stops[1..].sort_by_key(|location| location.priority);
    }

    Ok(stops)
}

/// Index of the most urgent location; input order breaks ties.
fn most_urgent_index(locations: &[Location]) -> usize {
    let mut best = 0;
    for (i, location) in locations.iter().enumerate().skip(1) {
        if location.priority < locations[best].priority {
            best = i;
        }
    }
    best
}
