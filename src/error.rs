//! Error type shared by matrix construction and the solvers.

use thiserror::Error;

/// Errors raised while validating inputs or refusing a search.
///
/// All variants are local and recoverable: callers react by changing their
/// inputs (fixing indices, switching solver, dropping destinations).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A start or destination index does not address a row of the matrix,
    /// repeats, or coincides with the start.
    #[error("invalid index {index} for matrix of size {size}: {reason}")]
    InvalidIndex {
        /// Offending index.
        index: usize,
        /// Matrix dimension.
        size: usize,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// Matrix is not square, has a non-zero diagonal, a negative or
    /// non-finite entry, or an asymmetric pair where symmetry is required.
    #[error("malformed matrix: {0}")]
    MalformedMatrix(String),
    /// Too many destinations for exhaustive search.
    #[error("intractable size: {destinations} destinations exceed the exact search bound of {max}")]
    IntractableSize {
        /// Requested destination count.
        destinations: usize,
        /// Configured bound.
        max: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedMatrix(message.into())
    }

    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        Self::InvalidIndex {
            index,
            size,
            reason: "out of range",
        }
    }

    /// Returns `true` if this error asks the caller to fall back to a heuristic.
    pub fn is_intractable(&self) -> bool {
        matches!(self, Self::IntractableSize { .. })
    }
}

/// Checks `start` and `destinations` against a matrix of the given size.
///
/// Destinations must be in range, distinct, and must not include `start`.
pub(crate) fn validate_indices(start: usize, destinations: &[usize], size: usize) -> Result<()> {
    if start >= size {
        return Err(RouteError::out_of_range(start, size));
    }

    let mut seen = vec![false; size];
    seen[start] = true;
    for &d in destinations {
        if d >= size {
            return Err(RouteError::out_of_range(d, size));
        }
        if seen[d] {
            let reason = if d == start {
                "destination equals start"
            } else {
                "duplicate destination"
            };
            return Err(RouteError::InvalidIndex {
                index: d,
                size,
                reason,
            });
        }
        seen[d] = true;
    }
    Ok(())
}
