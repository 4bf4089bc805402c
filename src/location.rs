//! Location model for route optimization.

use serde::{Deserialize, Serialize};

/// Unique identifier for a location within one optimization request.
pub type LocationId = u64;

/// Most urgent priority level.
pub const PRIORITY_HIGHEST: u8 = 1;

/// Least urgent priority level.
pub const PRIORITY_LOWEST: u8 = 5;

/// A named geographic point with an urgency level.
///
/// `priority` runs from 1 (most urgent) to 5 (least urgent). Coordinates are
/// degrees, latitude in [-90, 90] and longitude in [-180, 180]. The engine
/// only reorders locations; it never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Display name, not used in cost computation.
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub priority: u8,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, lat: f64, lon: f64, priority: u8) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            lon,
            priority,
        }
    }
}
