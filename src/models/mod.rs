//! Domain model types for tour optimization.
//!
//! Locations carry coordinates, routes are ordered index sequences, and a
//! route result pairs a route with its total cost.

mod location;
mod route;

pub use location::Location;
pub use route::{Leg, Route, RouteResult};
