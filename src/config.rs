//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::distance::TravelSpeed;
use crate::exact::DEFAULT_MAX_DESTINATIONS;
use crate::solver::Strategy;

/// Settings shared by the solvers and the tour planner.
///
/// Every field has a default, so partial documents deserialize.
///
/// # Examples
///
/// ```
/// use u_tour::config::SolverConfig;
/// use u_tour::solver::Strategy;
///
/// let config = SolverConfig::default()
///     .with_max_exact_destinations(8)
///     .with_speed(5.0)
///     .with_strategy(Strategy::Exact);
/// assert_eq!(config.max_exact_destinations(), 8);
/// assert_eq!(config.travel_speed().map(|s| s.value()), Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    max_exact_destinations: usize,
    speed: Option<f64>,
    strategy: Strategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_exact_destinations: DEFAULT_MAX_DESTINATIONS,
            speed: None,
            strategy: Strategy::Auto,
        }
    }
}

impl SolverConfig {
    /// Sets the largest destination count searched exhaustively.
    pub fn with_max_exact_destinations(mut self, max: usize) -> Self {
        self.max_exact_destinations = max;
        self
    }

    /// Sets a travel speed (units per hour); matrices built from
    /// coordinates then hold minutes instead of kilometers.
    pub fn with_speed(mut self, units_per_hour: f64) -> Self {
        self.speed = Some(units_per_hour);
        self
    }

    /// Sets the solving strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Largest destination count searched exhaustively.
    pub fn max_exact_destinations(&self) -> usize {
        self.max_exact_destinations
    }

    /// Validated travel speed, if one is configured.
    ///
    /// A non-positive or non-finite speed is ignored.
    pub fn travel_speed(&self) -> Option<TravelSpeed> {
        self.speed.and_then(TravelSpeed::new)
    }

    /// Solving strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}
