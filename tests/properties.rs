//! Property tests for the solvers over random symmetric matrices.

use proptest::prelude::*;
use std::collections::HashSet;
use u_tour::constructive::{solve_nearest_neighbor, NearestNeighborSolver};
use u_tour::distance::DistanceMatrix;
use u_tour::exact::{factorial, solve_exact, ExactSolver, Permutations};
use u_tour::RouteError;

/// Symmetric matrix of size 2..=7 with integer costs and a start index.
fn instance() -> impl Strategy<Value = (DistanceMatrix, usize)> {
    (2usize..=7)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(0u32..50, n * (n - 1) / 2),
                0..n,
            )
        })
        .prop_map(|(n, upper, start)| {
            let mut data = vec![0.0; n * n];
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    data[i * n + j] = f64::from(upper[k]);
                    data[j * n + i] = f64::from(upper[k]);
                    k += 1;
                }
            }
            (DistanceMatrix::from_data(n, data).expect("valid"), start)
        })
}

fn destinations(n: usize, start: usize) -> Vec<usize> {
    (0..n).filter(|&i| i != start).collect()
}

fn assert_valid_route(indices: &[usize], start: usize, dests: &[usize], round_trip: bool) {
    assert_eq!(indices[0], start);
    let body = if round_trip {
        assert_eq!(indices.last(), Some(&start));
        &indices[1..indices.len() - 1]
    } else {
        &indices[1..]
    };
    let visited: HashSet<usize> = body.iter().copied().collect();
    let expected: HashSet<usize> = dests.iter().copied().collect();
    assert_eq!(body.len(), dests.len());
    assert_eq!(visited, expected);
}

proptest! {
    #[test]
    fn exact_never_worse_than_nearest_neighbor((dm, start) in instance()) {
        let dests = destinations(dm.size(), start);

        let exact = solve_exact(start, &dests, &dm, false).expect("solvable");
        let greedy = solve_nearest_neighbor(start, &dests, &dm).expect("solvable");
        prop_assert!(exact.cost() <= greedy.cost());

        let exact = solve_exact(start, &dests, &dm, true).expect("solvable");
        let greedy = NearestNeighborSolver::new(true).solve(start, &dests, &dm).expect("solvable");
        prop_assert!(exact.cost() <= greedy.cost());
    }

    #[test]
    fn routes_are_well_formed((dm, start) in instance(), round_trip in any::<bool>()) {
        let dests = destinations(dm.size(), start);

        let exact = solve_exact(start, &dests, &dm, round_trip).expect("solvable");
        assert_valid_route(exact.route().indices(), start, &dests, round_trip);
        prop_assert_eq!(exact.cost(), dm.route_cost(exact.route().indices()));

        let greedy = NearestNeighborSolver::new(round_trip).solve(start, &dests, &dm).expect("solvable");
        assert_valid_route(greedy.route().indices(), start, &dests, round_trip);
        prop_assert_eq!(greedy.cost(), dm.route_cost(greedy.route().indices()));
    }

    #[test]
    fn round_trip_cost_adds_closing_edge((dm, start) in instance()) {
        let dests = destinations(dm.size(), start);
        let tour = solve_exact(start, &dests, &dm, true).expect("solvable");
        let indices = tour.route().indices();
        let open = &indices[..indices.len() - 1];
        let last = open[open.len() - 1];
        prop_assert_eq!(tour.cost(), dm.route_cost(open) + dm.get(last, start));
    }

    #[test]
    fn exact_is_deterministic((dm, start) in instance(), round_trip in any::<bool>()) {
        let dests = destinations(dm.size(), start);
        let a = solve_exact(start, &dests, &dm, round_trip).expect("solvable");
        let b = solve_exact(start, &dests, &dm, round_trip).expect("solvable");
        prop_assert_eq!(a.route(), b.route());
        prop_assert_eq!(a.cost().to_bits(), b.cost().to_bits());
        prop_assert_eq!(Some(a.evaluated()), factorial(dests.len()));
    }

    #[test]
    fn permutations_complete_and_unique(items in prop::collection::hash_set(0usize..100, 0..6)) {
        let items: Vec<usize> = items.into_iter().collect();
        let all: Vec<Vec<usize>> = Permutations::new(&items).collect();
        prop_assert_eq!(all.len() as u64, factorial(items.len()).expect("small"));
        let unique: HashSet<Vec<usize>> = all.iter().cloned().collect();
        prop_assert_eq!(unique.len(), all.len());
        prop_assert_eq!(&all[0], &items);
    }
}

#[test]
fn regression_reference_instance() {
    let dm = DistanceMatrix::from_rows(vec![
        vec![0.0, 5.0, 10.0, 15.0],
        vec![5.0, 0.0, 8.0, 7.0],
        vec![10.0, 8.0, 0.0, 6.0],
        vec![15.0, 7.0, 6.0, 0.0],
    ])
    .expect("valid");

    let exact = solve_exact(0, &[1, 2, 3], &dm, false).expect("solvable");
    assert_eq!(exact.route().indices(), &[0, 1, 3, 2]);
    assert_eq!(exact.cost(), 18.0);

    let greedy = solve_nearest_neighbor(0, &[1, 2, 3], &dm).expect("solvable");
    assert!(greedy.cost() >= 18.0);
}

#[test]
fn size_guard_boundary() {
    let n = 12;
    let mut data = vec![1.0; n * n];
    for i in 0..n {
        data[i * n + i] = 0.0;
    }
    let dm = DistanceMatrix::from_data(n, data).expect("valid");
    let solver = ExactSolver::new(10);

    let eleven: Vec<usize> = (1..12).collect();
    assert!(matches!(
        solver.solve(0, &eleven, &dm, false),
        Err(RouteError::IntractableSize { destinations: 11, max: 10 })
    ));

    let ten: Vec<usize> = (1..11).collect();
    let result = solver.solve(0, &ten, &dm, false).expect("within bound");
    assert_eq!(result.cost(), 10.0);
}
