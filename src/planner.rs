//! Multi-stop tour planning over named locations.

use std::fmt;

use crate::config::SolverConfig;
use crate::distance::{build_distance_matrix, DistanceMatrix};
use crate::error::Result;
use crate::models::{Leg, Location, Route, RouteResult};
use crate::solver::{solve, Strategy};

/// Collects a start and a list of stops, then plans a visiting order.
///
/// Stops are re-indexed in insertion order (start = 0). The cost matrix is
/// built lazily and cached until another stop is added.
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
/// use u_tour::planner::TourPlanner;
///
/// let home = Location::new(0, 25.033, 121.565).unwrap().with_name("Home");
/// let mut planner = TourPlanner::new(home);
/// planner.add_stop(Location::new(0, 25.038, 121.568).unwrap().with_name("Pizza"));
/// planner.add_stop(Location::new(0, 25.030, 121.560).unwrap().with_name("Burgers"));
///
/// let plan = planner.plan(false).unwrap();
/// assert_eq!(plan.names()[0], "Home");
/// assert_eq!(plan.result().route().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TourPlanner {
    locations: Vec<Location>,
    config: SolverConfig,
    matrix: Option<DistanceMatrix>,
}

impl TourPlanner {
    /// Creates a planner with default configuration.
    pub fn new(start: Location) -> Self {
        Self::with_config(start, SolverConfig::default())
    }

    /// Creates a planner using the given configuration.
    pub fn with_config(start: Location, config: SolverConfig) -> Self {
        Self {
            locations: vec![start.reindexed(0)],
            config,
            matrix: None,
        }
    }

    /// Appends a stop and returns its index.
    pub fn add_stop(&mut self, location: Location) -> usize {
        let index = self.locations.len();
        self.locations.push(location.reindexed(index));
        self.matrix = None;
        index
    }

    /// Start followed by stops, in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of stops, excluding the start.
    pub fn num_stops(&self) -> usize {
        self.locations.len() - 1
    }

    /// Cost matrix over all locations, built on first use.
    pub fn matrix(&mut self) -> &DistanceMatrix {
        cached_matrix(&mut self.matrix, &self.locations, &self.config)
    }

    /// Plans a route through every stop using the configured strategy.
    pub fn plan(&mut self, round_trip: bool) -> Result<TourPlan> {
        let locations = &self.locations;
        let config = &self.config;
        let distances = cached_matrix(&mut self.matrix, locations, config);

        let stops: Vec<usize> = (1..locations.len()).collect();
        let (result, used) = solve(config.strategy(), 0, &stops, distances, round_trip, config)?;

        let legs = result.route().legs(distances);
        let names = result
            .route()
            .indices()
            .iter()
            .map(|&i| display_name(&locations[i]))
            .collect();

        Ok(TourPlan {
            result,
            strategy: used,
            names,
            legs,
        })
    }
}

fn cached_matrix<'a>(
    matrix: &'a mut Option<DistanceMatrix>,
    locations: &[Location],
    config: &SolverConfig,
) -> &'a DistanceMatrix {
    matrix.get_or_insert_with(|| build_distance_matrix(locations, config.travel_speed()))
}

fn display_name(location: &Location) -> String {
    match location.name() {
        Some(name) => name.to_string(),
        None => format!("#{}", location.index()),
    }
}

/// A planned tour with display helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct TourPlan {
    result: RouteResult,
    strategy: Strategy,
    names: Vec<String>,
    legs: Vec<Leg>,
}

impl TourPlan {
    /// Route and cost.
    pub fn result(&self) -> &RouteResult {
        &self.result
    }

    /// Visiting order.
    pub fn route(&self) -> &Route {
        self.result.route()
    }

    /// Total cost.
    pub fn cost(&self) -> f64 {
        self.result.cost()
    }

    /// Solver that produced the route.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Location names in visiting order (`#index` when unnamed).
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Hops of the route with their costs.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }
}

impl fmt::Display for TourPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (leg, pair) in self.legs.iter().zip(self.names.windows(2)) {
            writeln!(f, "{} -> {}: {:.1}", pair[0], pair[1], leg.cost)?;
        }
        write!(f, "total: {:.1}", self.cost())
    }
}
