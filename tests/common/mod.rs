#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_station_at, assert_stations_ordered, assert_vec3_eq};

pub use fixtures::*;
