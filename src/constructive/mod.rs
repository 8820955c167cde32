//! Constructive heuristics.
//!
//! - [`solve_nearest_neighbor`] — Greedy nearest-neighbor path, O(K²)

mod nearest_neighbor;

pub use nearest_neighbor::{solve_nearest_neighbor, NearestNeighborSolver};
