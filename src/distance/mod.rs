//! Geographic distance and cost matrices.
//!
//! Provides the haversine great-circle distance and a dense, validated
//! cost matrix built from coordinates or supplied directly.

mod geo;
mod matrix;

pub use geo::{haversine, haversine_km, DistanceUnit, EARTH_RADIUS_KM};
pub use matrix::{build_distance_matrix, DistanceMatrix, TravelSpeed};
