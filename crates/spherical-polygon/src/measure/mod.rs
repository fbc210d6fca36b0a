//! Measure engines over a closed vertex ring.
//!
//! Every function here is pure and takes the ring as-is; callers must pass a
//! closed ring (first vertex equal to the last). `SphericalPolygon` is the
//! convenience wrapper that closes the ring once and caches the excess.

use std::fmt;

mod centroid;
mod excess;
mod inertia;
mod lune;
mod perimeter;
mod quad;

pub use centroid::{polygon_centroid, Centroid};
pub use excess::{polygon_area, polygon_excess, ExcessBand};
pub use inertia::{polygon_inertia, Inertia};
pub use perimeter::polygon_perimeter;
pub use quad::QuadError;

/// Errors surfaced by the centroid and inertia engines.
#[derive(Clone, Copy, Debug)]
pub enum MeasureError {
    /// The adaptive quadrature could not meet its tolerance.
    Quadrature(QuadError),
    /// The signed excess landed on a branch boundary (0 or ±2π), where no
    /// normalization branch is defined. Carries the offending excess.
    DegenerateExcess(f64),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::Quadrature(e) => write!(f, "lune integral did not converge: {}", e),
            MeasureError::DegenerateExcess(excess) => write!(
                f,
                "signed excess {excess} sits on a branch boundary (0 or ±2π)"
            ),
        }
    }
}

impl std::error::Error for MeasureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeasureError::Quadrature(e) => Some(e),
            MeasureError::DegenerateExcess(_) => None,
        }
    }
}

impl From<QuadError> for MeasureError {
    fn from(e: QuadError) -> Self {
        MeasureError::Quadrature(e)
    }
}
