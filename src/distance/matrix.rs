//! Dense cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::models::Location;

/// Travel speed used to turn kilometers into minutes.
///
/// # Examples
///
/// ```
/// use u_tour::distance::TravelSpeed;
///
/// let speed = TravelSpeed::new(60.0).unwrap();
/// assert_eq!(speed.minutes_for(1.0), 1.0);
/// assert!(TravelSpeed::new(0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelSpeed(f64);

impl TravelSpeed {
    /// Creates a speed in distance units per hour.
    ///
    /// Returns `None` unless the value is finite and strictly positive.
    pub fn new(units_per_hour: f64) -> Option<Self> {
        if units_per_hour.is_finite() && units_per_hour > 0.0 {
            Some(Self(units_per_hour))
        } else {
            None
        }
    }

    /// Walking pace, 5 km/h.
    pub fn walking() -> Self {
        Self(5.0)
    }

    /// Units per hour.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Minutes needed to cover `distance` units.
    pub fn minutes_for(&self, distance: f64) -> f64 {
        distance / self.0 * 60.0
    }
}

/// A dense n×n cost matrix stored in row-major order.
///
/// Every instance satisfies: zero diagonal, all entries finite and
/// non-negative. Matrices are read-only once built.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 10.0],
///     vec![5.0, 0.0, 8.0],
///     vec![10.0, 8.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 2), 10.0);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.route_cost(&[0, 1, 2]), 13.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a haversine matrix (kilometers) from location coordinates.
    ///
    /// Row `i` corresponds to `locations[i]`.
    pub fn from_locations(locations: &[Location]) -> Self {
        build_distance_matrix(locations, None)
    }

    /// Validates and wraps a caller-supplied matrix given as rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RouteError::malformed(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Validates and wraps an explicit n×n grid in row-major order.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RouteError::malformed(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    fn validate(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let v = self.get(i, j);
                if !v.is_finite() || v < 0.0 {
                    return Err(RouteError::malformed(format!(
                        "entry ({i}, {j}) = {v} is not a finite non-negative cost"
                    )));
                }
            }
            if self.get(i, i) != 0.0 {
                return Err(RouteError::malformed(format!(
                    "diagonal entry ({i}, {i}) = {} is not zero",
                    self.get(i, i)
                )));
            }
        }
        Ok(())
    }

    /// Fails with [`RouteError::MalformedMatrix`] on the first pair that
    /// differs by more than `tol`.
    pub fn require_symmetric(&self, tol: f64) -> Result<()> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return Err(RouteError::malformed(format!(
                        "asymmetric pair ({i}, {j}): {} vs {}",
                        self.get(i, j),
                        self.get(j, i)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.require_symmetric(tol).is_ok()
    }

    /// Sum of `get(route[i], route[i + 1])` over consecutive pairs.
    pub fn route_cost(&self, route: &[usize]) -> f64 {
        route.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Returns the candidate closest to `from`, preferring the smallest
    /// index on ties.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            best = match best {
                Some((b, bd)) if bd < d || (bd == d && b < c) => Some((b, bd)),
                _ => Some((c, d)),
            };
        }
        best.map(|(c, _)| c)
    }

    /// Copies the matrix out as rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size.max(1)).map(<[f64]>::to_vec).collect()
    }
}

/// Builds a matrix from coordinates, in kilometers or in minutes when a
/// speed is supplied.
///
/// Row/column `i` corresponds to `locations[i]`. Haversine distance is
/// evaluated once per unordered pair and mirrored, so the result is
/// exactly symmetric.
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
/// use u_tour::distance::{build_distance_matrix, TravelSpeed};
///
/// let places = vec![
///     Location::new(0, 0.0, 0.0).unwrap(),
///     Location::new(1, 0.0, 1.0).unwrap(),
/// ];
/// let km = build_distance_matrix(&places, None);
/// let minutes = build_distance_matrix(&places, Some(TravelSpeed::walking()));
/// assert!((minutes.get(0, 1) - km.get(0, 1) / 5.0 * 60.0).abs() < 1e-9);
/// ```
pub fn build_distance_matrix(locations: &[Location], speed: Option<TravelSpeed>) -> DistanceMatrix {
    let n = locations.len();
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let km = locations[i].distance_km(&locations[j]);
            let cost = match speed {
                Some(s) => s.minutes_for(km),
                None => km,
            };
            data[i * n + j] = cost;
            data[j * n + i] = cost;
        }
    }
    DistanceMatrix { data, size: n }
}
