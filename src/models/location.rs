//! Geographic location type.

use serde::Serialize;

use crate::distance::{haversine, haversine_km, DistanceUnit};

/// A named point on the globe taking part in a tour.
///
/// The index is the row/column this location occupies in a
/// [`DistanceMatrix`](crate::distance::DistanceMatrix) and stays fixed for
/// the lifetime of a query.
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
///
/// let home = Location::new(0, 25.033, 121.565).unwrap().with_name("Home");
/// assert_eq!(home.index(), 0);
/// assert_eq!(home.name(), Some("Home"));
/// assert!(Location::new(1, 91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    index: usize,
    name: Option<String>,
    lat: f64,
    lon: f64,
}

impl Location {
    /// Creates a location from latitude and longitude in degrees.
    ///
    /// Returns `None` if a coordinate is non-finite or out of range
    /// (latitude in `[-90, 90]`, longitude in `[-180, 180]`).
    pub fn new(index: usize, lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self {
            index,
            name: None,
            lat,
            lon,
        })
    }

    /// Attaches a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Position of this location in the distance matrix.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another location in kilometers.
    pub fn distance_km(&self, other: &Location) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }

    /// Great-circle distance to another location in the given unit.
    pub fn distance_to(&self, other: &Location, unit: DistanceUnit) -> f64 {
        haversine(self, other, unit)
    }

    pub(crate) fn reindexed(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}
