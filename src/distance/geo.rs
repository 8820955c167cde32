//! Great-circle distance.
//!
//! # Algorithm
//!
//! Haversine formula on a sphere of radius R = 6371 km:
//!
//! ```text
//! a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! c = 2·asin(√a)
//! d = R·c
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Location;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const KM_PER_MILE: f64 = 1.609_344;

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Identical points give exactly `0.0`; antipodal points give `π·R`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{haversine_km, EARTH_RADIUS_KM};
///
/// assert_eq!(haversine_km(25.0, 121.5, 25.0, 121.5), 0.0);
/// let half = haversine_km(0.0, 0.0, 0.0, 180.0);
/// assert!((half - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // rounding can push `a` a hair above 1 near antipodes
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two locations in the given unit.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{haversine, DistanceUnit};
/// use u_tour::models::Location;
///
/// let a = Location::new(0, 0.0, 0.0).unwrap();
/// let b = Location::new(1, 0.0, 1.0).unwrap();
/// assert!((haversine(&a, &b, DistanceUnit::Miles) - 69.093).abs() < 1e-3);
/// ```
pub fn haversine(a: &Location, b: &Location, unit: DistanceUnit) -> f64 {
    unit.from_km(haversine_km(a.lat(), a.lon(), b.lat(), b.lon()))
}

/// Unit for reporting geographic distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers.
    #[default]
    Kilometers,
    /// Statute miles.
    Miles,
    /// Meters.
    Meters,
}

impl DistanceUnit {
    /// Converts a distance in kilometers into this unit.
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            Self::Kilometers => km,
            Self::Miles => km / KM_PER_MILE,
            Self::Meters => km * 1000.0,
        }
    }
}
