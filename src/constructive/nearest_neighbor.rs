//! Nearest-neighbor constructive heuristic.
//!
//! Builds a route greedily: starting from the start location, always move
//! to the closest unvisited destination. Ties go to the smallest index.
//!
//! # Complexity
//!
//! O(K²) where K = number of destinations.
//!
//! # Reference
//!
//! The simplest tour construction heuristic. It gives no optimality
//! guarantee but stays fast at sizes where exhaustive search is refused.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{validate_indices, Result};
use crate::models::{Route, RouteResult};

/// Greedy solver, optionally closing the tour back to the start.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::NearestNeighborSolver;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let tour = NearestNeighborSolver::new(true).solve(0, &[1, 2], &dm).unwrap();
/// assert_eq!(tour.route().indices(), &[0, 1, 2, 0]);
/// assert_eq!(tour.cost(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighborSolver {
    round_trip: bool,
}

impl NearestNeighborSolver {
    /// Creates a solver; `round_trip` appends the hop back to the start.
    pub fn new(round_trip: bool) -> Self {
        Self { round_trip }
    }

    /// Builds a route from `start` through every destination.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidIndex`](crate::error::RouteError::InvalidIndex)
    /// if an index is out of range, repeated, or a destination equals
    /// `start`.
    pub fn solve(
        &self,
        start: usize,
        destinations: &[usize],
        distances: &DistanceMatrix,
    ) -> Result<RouteResult> {
        validate_indices(start, destinations, distances.size())?;

        let mut unvisited = destinations.to_vec();
        let mut stops = Vec::with_capacity(unvisited.len());
        let mut current = start;
        let mut cost = 0.0;

        while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
            cost += distances.get(current, next);
            stops.push(next);
            unvisited.retain(|&c| c != next);
            current = next;
        }

        if self.round_trip {
            cost += distances.get(current, start);
        }

        debug!(
            "nearest neighbor: start={start}, destinations={}, cost={cost}",
            destinations.len()
        );

        Ok(RouteResult::new(Route::new(start, stops, self.round_trip), cost, 1))
    }
}

/// Builds an open path with the nearest-neighbor heuristic.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::solve_nearest_neighbor;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 10.0, 15.0],
///     vec![5.0, 0.0, 8.0, 7.0],
///     vec![10.0, 8.0, 0.0, 6.0],
///     vec![15.0, 7.0, 6.0, 0.0],
/// ])
/// .unwrap();
///
/// let path = solve_nearest_neighbor(0, &[1, 2, 3], &dm).unwrap();
/// assert!(path.cost() >= 18.0);
/// ```
pub fn solve_nearest_neighbor(
    start: usize,
    destinations: &[usize],
    distances: &DistanceMatrix,
) -> Result<RouteResult> {
    NearestNeighborSolver::new(false).solve(start, destinations, distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::exact::solve_exact;

    fn sample_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 10.0, 15.0],
            vec![5.0, 0.0, 8.0, 7.0],
            vec![10.0, 8.0, 0.0, 6.0],
            vec![15.0, 7.0, 6.0, 0.0],
        ])
        .expect("valid")
    }

    /// Points on a line at 0, 1, 2, 3.
    fn line_matrix() -> DistanceMatrix {
        let xs = [0.0_f64, 1.0, 2.0, 3.0];
        let rows = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect();
        DistanceMatrix::from_rows(rows).expect("valid")
    }

    #[test]
    fn test_nn_regression() {
        let result = solve_nearest_neighbor(0, &[1, 2, 3], &sample_matrix()).expect("valid");
        // 0 -> 1 (5) -> 3 (7) -> 2 (6)
        assert_eq!(result.route().indices(), &[0, 1, 3, 2]);
        assert_eq!(result.cost(), 18.0);
        assert_eq!(result.evaluated(), 1);
    }

    #[test]
    fn test_nn_line() {
        let result = solve_nearest_neighbor(0, &[3, 1, 2], &line_matrix()).expect("valid");
        assert_eq!(result.route().stops(), &[1, 2, 3]);
        assert!((result.cost() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_round_trip() {
        let result = NearestNeighborSolver::new(true)
            .solve(0, &[1, 2, 3], &line_matrix())
            .expect("valid");
        assert_eq!(result.route().indices(), &[0, 1, 2, 3, 0]);
        // 1 + 1 + 1 + 3
        assert!((result.cost() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_can_be_worse_than_exact() {
        // Points at x = 0, 1, -2, 4: the greedy hop to x = 1 forces backtracking.
        let xs = [0.0_f64, 1.0, -2.0, 4.0];
        let rows = xs
            .iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect();
        let dm = DistanceMatrix::from_rows(rows).expect("valid");
        let nn = solve_nearest_neighbor(0, &[1, 2, 3], &dm).expect("valid");
        let exact = solve_exact(0, &[1, 2, 3], &dm, false).expect("valid");
        assert_eq!(nn.route().indices(), &[0, 1, 2, 3]);
        assert!((nn.cost() - 10.0).abs() < 1e-10);
        assert_eq!(exact.route().indices(), &[0, 2, 1, 3]);
        assert!((exact.cost() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_tie_smallest_index() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 2.0, 2.0],
            vec![2.0, 0.0, 2.0],
            vec![2.0, 2.0, 0.0],
        ])
        .expect("valid");
        let result = solve_nearest_neighbor(0, &[2, 1], &dm).expect("valid");
        assert_eq!(result.route().stops(), &[1, 2]);
    }

    #[test]
    fn test_nn_empty() {
        let open = solve_nearest_neighbor(1, &[], &sample_matrix()).expect("valid");
        assert_eq!(open.route().indices(), &[1]);
        assert_eq!(open.cost(), 0.0);

        let closed = NearestNeighborSolver::new(true)
            .solve(1, &[], &sample_matrix())
            .expect("valid");
        assert_eq!(closed.route().indices(), &[1, 1]);
        assert_eq!(closed.cost(), 0.0);
    }

    #[test]
    fn test_nn_invalid() {
        let err = solve_nearest_neighbor(0, &[0, 1], &sample_matrix()).expect_err("start repeated");
        assert!(matches!(err, RouteError::InvalidIndex { index: 0, .. }));
    }

    #[test]
    fn test_nn_never_intractable() {
        let n = 30;
        let mut data = vec![1.0; n * n];
        for i in 0..n {
            data[i * n + i] = 0.0;
        }
        let dm = DistanceMatrix::from_data(n, data).expect("valid");
        let dests: Vec<usize> = (1..n).collect();
        let result = solve_nearest_neighbor(0, &dests, &dm).expect("valid");
        assert_eq!(result.route().stops(), dests.as_slice());
        assert_eq!(result.cost(), 29.0);
    }
}
