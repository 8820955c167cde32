//! Exact search over all visiting orders.
//!
//! - [`Permutations`] — Deterministic lexicographic enumeration, K! orderings
//! - [`ExactSolver`] — Brute-force search with a guard on input size, O(K!·K)

mod brute_force;
mod permutation;

pub use brute_force::{solve_exact, ExactSolver, DEFAULT_MAX_DESTINATIONS};
pub use permutation::{factorial, next_permutation, Permutations};
