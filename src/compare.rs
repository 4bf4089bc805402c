//! Comparison harness.
//!
//! Runs every solver over the same input and start constraint, timing each
//! run independently. Each run builds its own cost matrix and tables, so no
//! state (mutable or memoized) leaks between solvers to bias the timings.

use crate::error::SolveError;
use crate::location::{Location, LocationId};
use crate::solver::{self, Algorithm, SolveOptions, SolveResult, MIN_LOCATIONS};

/// One solver's outcome within a comparison, tagged with its algorithm.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    /// Asymptotic time complexity, for display next to the measured time.
    pub complexity: &'static str,
    /// The solver's result, or its individual failure.
    pub outcome: Result<SolveResult, SolveError>,
}

/// Runs all solvers over `locations` and reports one result per solver.
///
/// Request-level problems (too few locations, unresolvable start id) reject
/// the whole comparison. A failure inside one solver — the DP capacity
/// ceiling — is reported in that solver's entry while the others' results
/// stand.
pub fn compare(
    locations: &[Location],
    start_id: Option<LocationId>,
    options: &SolveOptions,
) -> Result<Vec<AlgorithmRun>, SolveError> {
    if locations.len() < MIN_LOCATIONS {
        return Err(SolveError::TooFewLocations {
            found: locations.len(),
        });
    }
    if let Some(id) = start_id {
        if !locations.iter().any(|location| location.id == id) {
            return Err(SolveError::UnknownStartLocation(id));
        }
    }

    tracing::debug!(locations = locations.len(), "comparing solvers");

    let runs = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let outcome = solver::run(algorithm, locations, start_id, options);
            if let Err(err) = &outcome {
                tracing::warn!(
                    algorithm = %algorithm,
                    error = %err,
                    "solver failed during comparison"
                );
            }
            AlgorithmRun {
                algorithm,
                complexity: algorithm.complexity(),
                outcome,
            }
        })
        .collect();

    Ok(runs)
}
