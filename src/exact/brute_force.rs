//! Exhaustive route search.
//!
//! # Algorithm
//!
//! Every ordering of the destinations (see [`permutation`](super::permutation)
//! for the enumeration order) is turned into the candidate route
//! `[start] + ordering`, closed with `start` for a round trip, and costed by
//! summing its edges. The strictly cheapest candidate is kept, so the first
//! candidate in enumeration order wins ties.
//!
//! A candidate whose partial cost already reaches the best cost is abandoned
//! early: matrix entries are non-negative, so it can no longer win.
//!
//! # Complexity
//!
//! O(K!·K) time and O(K) working memory for K destinations, which is why
//! [`ExactSolver`] refuses inputs above a configurable bound.

use log::{debug, trace};

use super::permutation::{factorial, next_permutation};
use crate::config::SolverConfig;
use crate::distance::DistanceMatrix;
use crate::error::{validate_indices, Result, RouteError};
use crate::models::{Route, RouteResult};

/// Largest destination count searched exhaustively unless configured
/// otherwise. Ten destinations (3.6M orderings) run in well under a second.
pub const DEFAULT_MAX_DESTINATIONS: usize = 10;

/// Brute-force solver with a guard on input size.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::exact::ExactSolver;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 10.0, 15.0],
///     vec![5.0, 0.0, 8.0, 7.0],
///     vec![10.0, 8.0, 0.0, 6.0],
///     vec![15.0, 7.0, 6.0, 0.0],
/// ])
/// .unwrap();
///
/// let result = ExactSolver::new(10).solve(0, &[1, 2, 3], &dm, false).unwrap();
/// assert_eq!(result.route().indices(), &[0, 1, 3, 2]);
/// assert_eq!(result.cost(), 18.0);
///
/// assert!(ExactSolver::new(2).solve(0, &[1, 2, 3], &dm, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactSolver {
    max_destinations: usize,
    #[cfg(feature = "parallel")]
    parallel: bool,
}

impl Default for ExactSolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DESTINATIONS)
    }
}

impl ExactSolver {
    /// Creates a solver refusing more than `max_destinations` destinations.
    pub fn new(max_destinations: usize) -> Self {
        Self {
            max_destinations,
            #[cfg(feature = "parallel")]
            parallel: false,
        }
    }

    /// Creates a solver using the bound from `config`.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.max_exact_destinations())
    }

    /// Splits the search across the rayon thread pool.
    ///
    /// Results are identical to the sequential search, including tie-breaks.
    #[cfg(feature = "parallel")]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configured destination bound.
    pub fn max_destinations(&self) -> usize {
        self.max_destinations
    }

    /// Finds the minimum-cost route from `start` through every destination.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidIndex`] if an index is out of range, repeated,
    ///   or a destination equals `start`.
    /// - [`RouteError::IntractableSize`] if there are more destinations than
    ///   the configured bound.
    pub fn solve(
        &self,
        start: usize,
        destinations: &[usize],
        distances: &DistanceMatrix,
        round_trip: bool,
    ) -> Result<RouteResult> {
        validate_indices(start, destinations, distances.size())?;

        let k = destinations.len();
        if k > self.max_destinations {
            return Err(RouteError::IntractableSize {
                destinations: k,
                max: self.max_destinations,
            });
        }

        debug!("exact search: start={start}, destinations={k}, round_trip={round_trip}");

        if k == 0 {
            return Ok(RouteResult::new(Route::new(start, Vec::new(), round_trip), 0.0, 1));
        }

        let search = Search {
            start,
            items: destinations,
            distances,
            round_trip,
        };
        let best = self.run(&search);

        let stops = best.positions.iter().map(|&p| destinations[p]).collect();
        let route = Route::new(start, stops, round_trip);
        debug!(
            "exact search done: cost={}, evaluated={}, route=[{route}]",
            best.cost, best.evaluated
        );
        debug_assert_eq!(Some(best.evaluated), factorial(k));

        Ok(RouteResult::new(route, best.cost, best.evaluated))
    }

    #[cfg(feature = "parallel")]
    fn run(&self, search: &Search<'_>) -> Best {
        if self.parallel {
            search.run_parallel()
        } else {
            search.run_all()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run(&self, search: &Search<'_>) -> Best {
        search.run_all()
    }
}

/// Exhaustive search with the default bound of
/// [`DEFAULT_MAX_DESTINATIONS`].
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::exact::solve_exact;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 10.0, 15.0],
///     vec![5.0, 0.0, 8.0, 7.0],
///     vec![10.0, 8.0, 0.0, 6.0],
///     vec![15.0, 7.0, 6.0, 0.0],
/// ])
/// .unwrap();
///
/// let tour = solve_exact(0, &[1, 2, 3], &dm, true).unwrap();
/// assert_eq!(tour.route().indices(), &[0, 1, 3, 2, 0]);
/// assert_eq!(tour.cost(), 28.0);
/// ```
pub fn solve_exact(
    start: usize,
    destinations: &[usize],
    distances: &DistanceMatrix,
    round_trip: bool,
) -> Result<RouteResult> {
    ExactSolver::default().solve(start, destinations, distances, round_trip)
}

/// Best candidate of a (partial) search, as positions into the destinations.
#[derive(Debug)]
struct Best {
    positions: Vec<usize>,
    cost: f64,
    evaluated: u64,
}

struct Search<'a> {
    start: usize,
    items: &'a [usize],
    distances: &'a DistanceMatrix,
    round_trip: bool,
}

impl Search<'_> {
    fn run_all(&self) -> Best {
        let mut positions: Vec<usize> = (0..self.items.len()).collect();
        self.run_branch(&mut positions, 0)
    }

    /// One branch per leading destination; branches are reduced in
    /// enumeration order so ties resolve exactly as in [`Self::run_all`].
    #[cfg(feature = "parallel")]
    fn run_parallel(&self) -> Best {
        use rayon::prelude::*;

        let k = self.items.len();
        let branches: Vec<Best> = (0..k)
            .into_par_iter()
            .map(|first| {
                let mut positions = Vec::with_capacity(k);
                positions.push(first);
                positions.extend((0..k).filter(|&p| p != first));
                self.run_branch(&mut positions, 1)
            })
            .collect();

        branches
            .into_iter()
            .reduce(|mut best, branch| {
                best.evaluated += branch.evaluated;
                if branch.cost < best.cost {
                    best.positions = branch.positions;
                    best.cost = branch.cost;
                }
                best
            })
            .unwrap_or_else(|| self.run_all())
    }

    /// Enumerates every ordering of `positions[fixed..]`, keeping
    /// `positions[..fixed]` in place. The tail must start sorted.
    fn run_branch(&self, positions: &mut [usize], fixed: usize) -> Best {
        let mut best = Best {
            positions: positions.to_vec(),
            cost: f64::INFINITY,
            evaluated: 0,
        };

        loop {
            best.evaluated += 1;
            if let Some(cost) = self.candidate_cost(positions, best.cost) {
                trace!("improved: cost={cost}, positions={positions:?}");
                best.cost = cost;
                best.positions.copy_from_slice(positions);
            }
            if !next_permutation(&mut positions[fixed..]) {
                break;
            }
        }
        best
    }

    /// Cost of the candidate, or `None` once it reaches `bound`.
    fn candidate_cost(&self, positions: &[usize], bound: f64) -> Option<f64> {
        let mut cost = 0.0;
        let mut prev = self.start;
        for &p in positions {
            let next = self.items[p];
            cost += self.distances.get(prev, next);
            if cost >= bound {
                return None;
            }
            prev = next;
        }
        if self.round_trip {
            cost += self.distances.get(prev, self.start);
            if cost >= bound {
                return None;
            }
        }
        Some(cost)
    }
}
