//! Service interface contract.
//!
//! Payload shapes for the surrounding service layer and thin handlers that
//! map them onto the engine. Transport concerns (endpoint routing, request
//! parsing, response encoding) live outside this crate.

use serde::{Deserialize, Serialize};

use crate::compare;
use crate::error::SolveError;
use crate::location::{Location, LocationId};
use crate::solver::{self, Algorithm, SolveOptions, SolveResult};

/// Single-route solve request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub locations: Vec<Location>,
    /// Selector token: `exact-search`, `bitmask-dp` or `nearest-neighbor`.
    pub algorithm: String,
    #[serde(default)]
    pub starting_location_id: Option<LocationId>,
}

/// Comparison solve request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub starting_location_id: Option<LocationId>,
}

/// Single-route solve response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub route: Vec<Location>,
    pub distance_km: f64,
    pub time_ms: f64,
    pub starting_location: Location,
}

impl From<SolveResult> for RouteResponse {
    fn from(result: SolveResult) -> Self {
        Self {
            distance_km: result.total_distance_km,
            time_ms: result.elapsed.as_secs_f64() * 1000.0,
            starting_location: result.start,
            route: result.route,
        }
    }
}

/// One solver's entry in a comparison response.
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub complexity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RouteResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Resolves the algorithm selector and solves a single route.
pub fn handle_route(
    request: &RouteRequest,
    options: &SolveOptions,
) -> Result<RouteResponse, SolveError> {
    let algorithm: Algorithm = request.algorithm.parse()?;
    let result = solver::solve(
        &request.locations,
        algorithm,
        request.starting_location_id,
        options,
    )?;
    Ok(result.into())
}

/// Runs the comparison harness and shapes its per-solver outcomes.
pub fn handle_compare(
    request: &CompareRequest,
    options: &SolveOptions,
) -> Result<Vec<AlgorithmReport>, SolveError> {
    let runs = compare::compare(&request.locations, request.starting_location_id, options)?;

    Ok(runs
        .into_iter()
        .map(|run| {
            let (result, error) = match run.outcome {
                Ok(solved) => (Some(solved.into()), None),
                Err(err) => (None, Some(err.to_string())),
            };
            AlgorithmReport {
                algorithm: run.algorithm,
                complexity: run.complexity.to_string(),
                result,
                error,
            }
        })
        .collect())
}
