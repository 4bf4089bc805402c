//! Test fixtures for route-optimizer.
//!
//! Real Nevada / Southwest city coordinates, plus small builders for
//! locations with chosen priorities.

use route_optimizer::location::Location;

pub fn location(id: u64, name: &str, lat: f64, lon: f64, priority: u8) -> Location {
    Location::new(id, name, lat, lon, priority)
}

/// Eight real Southwest cities with mixed priorities.
pub fn southwest_cities() -> Vec<Location> {
    vec![
        location(1, "Las Vegas", 36.1699, -115.1398, 2),
        location(2, "Reno", 39.5296, -119.8138, 4),
        location(3, "Boulder City", 35.9787, -114.8325, 1),
        location(4, "Carson City", 39.1638, -119.7674, 3),
        location(5, "Los Angeles", 34.0522, -118.2437, 5),
        location(6, "Phoenix", 33.4484, -112.0740, 2),
        location(7, "Salt Lake City", 40.7608, -111.8910, 3),
        location(8, "San Francisco", 37.7749, -122.4194, 4),
    ]
}

/// A triangle of cities with priorities 1, 3, 5 and well-separated legs.
pub fn priority_triangle() -> Vec<Location> {
    vec![
        location(10, "Las Vegas", 36.1699, -115.1398, 1),
        location(20, "Reno", 39.5296, -119.8138, 3),
        location(30, "Phoenix", 33.4484, -112.0740, 5),
    ]
}
