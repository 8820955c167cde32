//! Strategy selection between exact search and the greedy heuristic.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::constructive::NearestNeighborSolver;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::exact::ExactSolver;
use crate::models::RouteResult;

/// How a route is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exhaustive search; fails above the configured size bound.
    Exact,
    /// Greedy nearest-neighbor construction.
    NearestNeighbor,
    /// Exhaustive search, falling back to nearest neighbor when the input
    /// is too large.
    #[default]
    Auto,
}

/// Solves with the given strategy and reports which solver produced the
/// route (`Auto` resolves to one of the other two).
///
/// # Examples
///
/// ```
/// use u_tour::config::SolverConfig;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::solver::{solve, Strategy};
///
/// let n = 6;
/// let rows = (0..n)
///     .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
///     .collect();
/// let dm = DistanceMatrix::from_rows(rows).unwrap();
/// let config = SolverConfig::default().with_max_exact_destinations(3);
///
/// let (result, used) = solve(Strategy::Auto, 0, &[1, 2, 3, 4, 5], &dm, false, &config).unwrap();
/// assert_eq!(used, Strategy::NearestNeighbor);
/// assert_eq!(result.cost(), 5.0);
/// ```
pub fn solve(
    strategy: Strategy,
    start: usize,
    destinations: &[usize],
    distances: &DistanceMatrix,
    round_trip: bool,
    config: &SolverConfig,
) -> Result<(RouteResult, Strategy)> {
    let exact = ExactSolver::from_config(config);
    let greedy = NearestNeighborSolver::new(round_trip);

    match strategy {
        Strategy::Exact => Ok((
            exact.solve(start, destinations, distances, round_trip)?,
            Strategy::Exact,
        )),
        Strategy::NearestNeighbor => Ok((
            greedy.solve(start, destinations, distances)?,
            Strategy::NearestNeighbor,
        )),
        Strategy::Auto => match exact.solve(start, destinations, distances, round_trip) {
            Ok(result) => Ok((result, Strategy::Exact)),
            Err(err) if err.is_intractable() => {
                warn!("{err}; falling back to nearest neighbor");
                Ok((
                    greedy.solve(start, destinations, distances)?,
                    Strategy::NearestNeighbor,
                ))
            }
            Err(err) => Err(err),
        },
    }
}
