//! # u-tour
//!
//! Tour optimization for small sets of destinations: exhaustive search for
//! the optimal visiting order, a nearest-neighbor baseline, and haversine
//! cost matrices built from coordinates.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, RouteResult)
//! - [`distance`] — Haversine distance and validated cost matrices
//! - [`exact`] — Deterministic permutation enumeration and brute-force search
//! - [`constructive`] — Nearest-neighbor heuristic
//! - [`solver`] — Strategy selection with automatic fallback
//! - [`planner`] — Multi-stop planning over named locations
//! - [`benchmark`] — Timing of exhaustive search across sizes
//! - [`config`] — Solver configuration
//! - [`error`] — Error type

pub mod benchmark;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod exact;
pub mod models;
pub mod planner;
pub mod solver;

pub use benchmark::{benchmark, BenchmarkRecord};
pub use constructive::solve_nearest_neighbor;
pub use distance::{build_distance_matrix, DistanceMatrix};
pub use error::{Result, RouteError};
pub use exact::solve_exact;
pub use models::{Location, Route, RouteResult};
