//! Centroid of the enclosed patch.
//!
//! The three Cartesian first moments accumulate over the per-edge lunes;
//! the excess band picks the normalization (and sign, when the triangulation
//! enclosed the complement region). The centroid of a curved patch lies
//! strictly below the surface, which `depth` reports.

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::geo::edge::normalized_edges;
use crate::geo::{MeasureCfg, Vertex};

use super::excess::{polygon_excess, ExcessBand};
use super::lune::edge_sums;
use super::MeasureError;

/// Centroid location in degrees plus its depth below the spherical surface
/// (`1 − ‖c‖` on the unit sphere).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Centroid {
    pub lat: f64,
    pub lon: f64,
    /// Non-negative for a simple, well-conditioned ring. A negative value
    /// signals degenerate or self-intersecting input; it is reported as-is
    /// rather than corrected.
    pub depth: f64,
}

impl Centroid {
    /// Depth scaled to a sphere of the given radius; the location is
    /// unchanged.
    pub fn scaled(self, radius: f64) -> Self {
        Self {
            depth: self.depth * radius,
            ..self
        }
    }
}

/// First moments of the unit-sphere surface measure.
fn fx(lat: f64, lon: f64) -> f64 {
    lat.cos().powi(2) * lon.cos()
}
fn fy(lat: f64, lon: f64) -> f64 {
    lat.cos().powi(2) * lon.sin()
}
fn fz(lat: f64, _lon: f64) -> f64 {
    (2.0 * lat).sin() / 2.0
}

/// Centroid of a closed ring.
pub fn polygon_centroid(ring: &[Vertex], cfg: &MeasureCfg) -> Result<Centroid, MeasureError> {
    let edges = normalized_edges(ring, cfg.eps_edge);
    let [sx, sy, sz] = edge_sums(&edges, [fx, fy, fz], cfg)?;
    let sums = Vector3::new(sx, sy, sz);
    let excess = polygon_excess(ring, cfg);
    let c = match ExcessBand::classify(excess, cfg.eps_band) {
        ExcessBand::SmallPositive | ExcessBand::SmallNegative => sums / excess,
        ExcessBand::LargePositive => -sums / (4.0 * PI - excess),
        ExcessBand::LargeNegative => sums / (4.0 * PI + excess),
        ExcessBand::Degenerate => return Err(MeasureError::DegenerateExcess(excess)),
    };
    let location = Vertex::from_unit_vector(c);
    Ok(Centroid {
        lat: location.lat,
        lon: location.lon,
        depth: 1.0 - c.norm(),
    })
}
