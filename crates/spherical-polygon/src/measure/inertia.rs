//! Inertia tensor of the enclosed patch.
//!
//! The six second moments accumulate over the per-edge lunes; the excess
//! band picks how they combine with the total excess. The diagonal entries
//! are the moments about the three axes (`M11 = ∫(y² + z²) dΩ` and so on),
//! the off-diagonal entries the mixed products, so the trace always equals
//! twice the unsigned area.

use std::f64::consts::PI;

use nalgebra::Matrix3;

use crate::geo::edge::normalized_edges;
use crate::geo::{MeasureCfg, Vertex};

use super::excess::{polygon_excess, ExcessBand};
use super::lune::edge_sums;
use super::MeasureError;

/// Symmetric inertia tensor over the unit sphere: six independent
/// components.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inertia {
    pub m11: f64,
    pub m22: f64,
    pub m33: f64,
    pub m12: f64,
    pub m13: f64,
    pub m23: f64,
}

impl Inertia {
    /// Sum of the diagonal moments; equals twice the unsigned area.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.m11 + self.m22 + self.m33
    }

    /// The full symmetric 3×3 matrix.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.m11, self.m12, self.m13, //
            self.m12, self.m22, self.m23, //
            self.m13, self.m23, self.m33,
        )
    }

    /// Tensor for a sphere of the given radius and area density (× R⁴ρ).
    pub fn scaled(self, radius: f64, density: f64) -> Self {
        let k = radius.powi(4) * density;
        Self {
            m11: self.m11 * k,
            m22: self.m22 * k,
            m33: self.m33 * k,
            m12: self.m12 * k,
            m13: self.m13 * k,
            m23: self.m23 * k,
        }
    }
}

/// Second moments of the unit-sphere surface measure.
fn f11(lat: f64, lon: f64) -> f64 {
    lat.cos().powi(3) * lon.cos().powi(2)
}
fn f22(lat: f64, lon: f64) -> f64 {
    lat.cos().powi(3) * lon.sin().powi(2)
}
fn f33(lat: f64, _lon: f64) -> f64 {
    lat.sin().powi(2) * lat.cos()
}
fn f12(lat: f64, lon: f64) -> f64 {
    lat.cos().powi(3) * lon.cos() * lon.sin()
}
fn f13(lat: f64, lon: f64) -> f64 {
    lat.cos().powi(2) * lat.sin() * lon.cos()
}
fn f23(lat: f64, lon: f64) -> f64 {
    lat.cos().powi(2) * lat.sin() * lon.sin()
}

/// Inertia tensor of a closed ring.
pub fn polygon_inertia(ring: &[Vertex], cfg: &MeasureCfg) -> Result<Inertia, MeasureError> {
    let edges = normalized_edges(ring, cfg.eps_edge);
    let [s11, s22, s33, s12, s13, s23] = edge_sums(&edges, [f11, f22, f33, f12, f13, f23], cfg)?;
    let excess = polygon_excess(ring, cfg);
    let tensor = match ExcessBand::classify(excess, cfg.eps_band) {
        ExcessBand::SmallPositive => Inertia {
            m11: excess - s11,
            m22: excess - s22,
            m33: excess - s33,
            m12: -s12,
            m13: -s13,
            m23: -s23,
        },
        ExcessBand::LargePositive => Inertia {
            m11: 8.0 / 3.0 * PI - (excess - s11),
            m22: 8.0 / 3.0 * PI - (excess - s22),
            m33: 8.0 / 3.0 * PI - (excess - s33),
            m12: s12,
            m13: s13,
            m23: s23,
        },
        ExcessBand::SmallNegative => Inertia {
            m11: -excess + s11,
            m22: -excess + s22,
            m33: -excess + s33,
            m12: s12,
            m13: s13,
            m23: s23,
        },
        ExcessBand::LargeNegative => Inertia {
            m11: 8.0 / 3.0 * PI - (-excess + s11),
            m22: 8.0 / 3.0 * PI - (-excess + s22),
            m33: 8.0 / 3.0 * PI - (-excess + s33),
            m12: -s12,
            m13: -s13,
            m23: -s23,
        },
        ExcessBand::Degenerate => return Err(MeasureError::DegenerateExcess(excess)),
    };
    Ok(tensor)
}
