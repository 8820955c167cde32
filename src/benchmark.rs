//! Empirical growth of exhaustive search.
//!
//! Times [`ExactSolver`] on synthetic instances of increasing size to show
//! the factorial blow-up and to check where the size guard should sit.

use std::time::Instant;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::exact::{factorial, ExactSolver};
use crate::models::Route;

/// Timing of one exact solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// Number of locations, including the start.
    pub n: usize,
    /// Orderings searched, `(n - 1)!`.
    pub permutations: u64,
    /// Wall-clock time of the solve.
    pub elapsed_seconds: f64,
    /// Optimal route found.
    pub route: Route,
    /// Cost of `route`.
    pub cost: f64,
}

impl BenchmarkRecord {
    /// Average time per candidate route in microseconds.
    pub fn micros_per_route(&self) -> f64 {
        if self.permutations == 0 {
            return 0.0;
        }
        self.elapsed_seconds / self.permutations as f64 * 1_000_000.0
    }

    /// Destination count of the instance.
    pub fn destinations(&self) -> usize {
        self.n - 1
    }
}

/// Benchmark settings.
///
/// # Examples
///
/// ```
/// use u_tour::benchmark::Benchmark;
///
/// let records = Benchmark::new(5).round_trip(true).seeded(7).run();
/// assert_eq!(records.len(), 3);
/// assert_eq!(records[2].permutations, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benchmark {
    max_n: usize,
    round_trip: bool,
    seed: Option<u64>,
}

impl Benchmark {
    /// Sizes `3..=max_n` on the `|i - j| + 1` matrix, open paths.
    pub fn new(max_n: usize) -> Self {
        Self {
            max_n,
            round_trip: false,
            seed: None,
        }
    }

    /// Solves closed tours instead of open paths.
    pub fn round_trip(mut self, round_trip: bool) -> Self {
        self.round_trip = round_trip;
        self
    }

    /// Uses random symmetric matrices drawn from the given seed.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs every size and returns one record per size.
    pub fn run(&self) -> Vec<BenchmarkRecord> {
        let mut records = Vec::new();
        for n in 3..=self.max_n {
            let distances = match self.seed {
                Some(seed) => random_matrix(n, seed.wrapping_add(n as u64)),
                None => linear_matrix(n),
            };
            let destinations: Vec<usize> = (1..n).collect();
            let solver = ExactSolver::new(n - 1);

            let started = Instant::now();
            let solved = solver.solve(0, &destinations, &distances, self.round_trip);
            let elapsed_seconds = started.elapsed().as_secs_f64();

            let result = match solved {
                Ok(result) => result,
                Err(err) => {
                    warn!("n={n} skipped: {err}");
                    continue;
                }
            };

            let record = BenchmarkRecord {
                n,
                permutations: factorial(n - 1).unwrap_or(u64::MAX),
                elapsed_seconds,
                cost: result.cost(),
                route: result.into_route(),
            };
            info!(
                "n={n} permutations={} elapsed={elapsed_seconds:.4}s per_route={:.3}us cost={}",
                record.permutations,
                record.micros_per_route(),
                record.cost
            );
            records.push(record);
        }
        records
    }
}

/// Times exact search for every size from 3 to `max_n`.
///
/// Returns an empty list when `max_n < 3`.
///
/// # Examples
///
/// ```
/// use u_tour::benchmark::benchmark;
///
/// let records = benchmark(6);
/// let counts: Vec<u64> = records.iter().map(|r| r.permutations).collect();
/// assert_eq!(counts, vec![2, 6, 24, 120]);
/// ```
pub fn benchmark(max_n: usize) -> Vec<BenchmarkRecord> {
    Benchmark::new(max_n).run()
}

/// Largest destination count whose solve finished within `budget_seconds`.
///
/// Only the leading run of sizes that stayed within budget counts, so a
/// noisy fast measurement after a slow one cannot raise the bound.
pub fn suggest_bound(records: &[BenchmarkRecord], budget_seconds: f64) -> Option<usize> {
    records
        .iter()
        .take_while(|r| r.elapsed_seconds <= budget_seconds)
        .last()
        .map(BenchmarkRecord::destinations)
}

/// The deterministic benchmark matrix: `m[i][j] = |i - j| + 1`, zero diagonal.
pub fn linear_matrix(n: usize) -> DistanceMatrix {
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                data[i * n + j] = (i.abs_diff(j) + 1) as f64;
            }
        }
    }
    matrix_from_valid(n, data)
}

/// A symmetric matrix with integer costs in `1..=100`, reproducible per seed.
pub fn random_matrix(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let cost = rng.random_range(1..=100) as f64;
            data[i * n + j] = cost;
            data[j * n + i] = cost;
        }
    }
    matrix_from_valid(n, data)
}

fn matrix_from_valid(n: usize, data: Vec<f64>) -> DistanceMatrix {
    match DistanceMatrix::from_data(n, data) {
        Ok(dm) => dm,
        Err(err) => unreachable!("synthetic matrix is valid: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_sizes() {
        let records = benchmark(7);
        let sizes: Vec<usize> = records.iter().map(|r| r.n).collect();
        assert_eq!(sizes, vec![3, 4, 5, 6, 7]);
        assert_eq!(records[4].permutations, 720);
        assert!(records.iter().all(|r| r.elapsed_seconds >= 0.0));
    }

    #[test]
    fn test_benchmark_records_route_and_cost() {
        for r in benchmark(6) {
            let dm = linear_matrix(r.n);
            assert_eq!(r.route.start(), 0);
            assert_eq!(r.route.stops().len(), r.n - 1);
            assert_eq!(r.cost, dm.route_cost(r.route.indices()));
            // visiting 1, 2, .., n-1 in order costs 2 per hop
            assert_eq!(r.cost, 2.0 * (r.n - 1) as f64);
        }
    }

    #[test]
    fn test_benchmark_round_trip_records() {
        let records = Benchmark::new(5).round_trip(true).seeded(3).run();
        assert_eq!(records.len(), 3);
        for r in &records {
            assert!(r.route.is_round_trip());
            let dm = random_matrix(r.n, 3u64.wrapping_add(r.n as u64));
            assert_eq!(r.cost, dm.route_cost(r.route.indices()));
        }
    }

    #[test]
    fn test_benchmark_too_small() {
        assert!(benchmark(2).is_empty());
        assert!(benchmark(0).is_empty());
    }

    #[test]
    fn test_linear_matrix() {
        let dm = linear_matrix(4);
        assert_eq!(dm.get(0, 0), 0.0);
        assert_eq!(dm.get(0, 1), 2.0);
        assert_eq!(dm.get(3, 0), 4.0);
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_random_matrix_reproducible() {
        let a = random_matrix(6, 42);
        let b = random_matrix(6, 42);
        assert_eq!(a, b);
        assert!(a.is_symmetric(0.0));
        for i in 0..6 {
            for j in 0..6 {
                let v = a.get(i, j);
                if i == j {
                    assert_eq!(v, 0.0);
                } else {
                    assert!((1.0..=100.0).contains(&v));
                }
            }
        }
    }

    #[test]
    fn test_micros_per_route() {
        let r = BenchmarkRecord {
            n: 4,
            permutations: 6,
            elapsed_seconds: 0.000_006,
            route: Route::new(0, vec![1, 2, 3], false),
            cost: 5.0,
        };
        assert!((r.micros_per_route() - 1.0).abs() < 1e-9);
        assert_eq!(r.destinations(), 3);
    }

    #[test]
    fn test_suggest_bound() {
        let records: Vec<BenchmarkRecord> = [(3, 0.001), (4, 0.01), (5, 0.5), (6, 2.0), (7, 0.1)]
            .iter()
            .map(|&(n, t)| BenchmarkRecord {
                n,
                permutations: factorial(n - 1).expect("small"),
                elapsed_seconds: t,
                route: Route::new(0, (1..n).collect(), false),
                cost: 0.0,
            })
            .collect();
        assert_eq!(suggest_bound(&records, 1.0), Some(4));
        assert_eq!(suggest_bound(&records, 0.0001), None);
        assert_eq!(suggest_bound(&records, 10.0), Some(6));
    }
}
