//! Route and result types.

use std::fmt;

use serde::Serialize;

use crate::distance::DistanceMatrix;

/// One hop of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    /// Index the leg departs from.
    pub from: usize,
    /// Index the leg arrives at.
    pub to: usize,
    /// Matrix cost of the hop.
    pub cost: f64,
}

/// An ordered visiting sequence starting at the start location.
///
/// Every destination appears exactly once. A round trip additionally ends
/// with the start index.
///
/// # Examples
///
/// ```
/// use u_tour::models::Route;
///
/// let route = Route::new(0, vec![2, 1], true);
/// assert_eq!(route.indices(), &[0, 2, 1, 0]);
/// assert_eq!(route.stops(), &[2, 1]);
/// assert!(route.is_round_trip());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    indices: Vec<usize>,
    #[serde(skip)]
    round_trip: bool,
}

impl Route {
    /// Builds `[start] + stops`, appending `start` again for a round trip.
    pub fn new(start: usize, stops: Vec<usize>, round_trip: bool) -> Self {
        let mut indices = Vec::with_capacity(stops.len() + 2);
        indices.push(start);
        indices.extend(stops);
        if round_trip {
            indices.push(start);
        }
        Self {
            indices,
            round_trip,
        }
    }

    /// Full index sequence, including the start (and trailing start).
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The start location index.
    pub fn start(&self) -> usize {
        self.indices[0]
    }

    /// Destinations in visiting order, without the start.
    pub fn stops(&self) -> &[usize] {
        let end = if self.round_trip {
            self.indices.len() - 1
        } else {
            self.indices.len()
        };
        &self.indices[1..end]
    }

    /// Returns `true` if the route returns to its start.
    pub fn is_round_trip(&self) -> bool {
        self.round_trip
    }

    /// Number of indices in the sequence.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the route has no indices.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Consecutive hops with their matrix costs.
    pub fn legs(&self, distances: &DistanceMatrix) -> Vec<Leg> {
        self.indices
            .windows(2)
            .map(|w| Leg {
                from: w[0],
                to: w[1],
                cost: distances.get(w[0], w[1]),
            })
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{idx}")?;
        }
        Ok(())
    }
}

/// A route paired with its total cost.
///
/// `evaluated` counts the candidate routes a solver looked at: `K!` for
/// exhaustive search, `1` for a constructive heuristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    route: Route,
    cost: f64,
    evaluated: u64,
}

impl RouteResult {
    pub(crate) fn new(route: Route, cost: f64, evaluated: u64) -> Self {
        Self {
            route,
            cost,
            evaluated,
        }
    }

    /// The visiting order.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Sum of edge costs along the route.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of candidate routes evaluated.
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Consumes the result, returning the route.
    pub fn into_route(self) -> Route {
        self.route
    }
}
