//! Per-edge double integrals over the lune between an edge's great circle
//! and the north pole.
//!
//! Each retained edge bounds a two-dimensional region in (lat, lon): the
//! longitude runs from the edge's start to its wrapped end, the latitude from
//! the edge's great circle up to the pole. Integrating a moment integrand
//! over that region, edge by edge, accumulates the moment of the polygon's
//! interior; the bounds are signed, so edges traversed toward decreasing
//! longitude subtract.

use std::f64::consts::FRAC_PI_2;

use crate::geo::edge::ArcEdge;
use crate::geo::MeasureCfg;

use super::quad::{self, QuadError};

/// Moment integrand over (lat, lon), in radians.
pub(crate) type Integrand = fn(f64, f64) -> f64;

/// Coefficients of the lune's lower latitude bound for one edge:
/// `lat(λ) = −atan((c1·cos λ + c2·sin λ) / c3)`, the pole being the fixed
/// upper bound.
///
/// Each edge carries its own coefficients into the integrand evaluations;
/// nothing is shared across edges, so edges may be integrated concurrently.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LuneCoeffs {
    c1: f64,
    c2: f64,
    c3: f64,
}

impl LuneCoeffs {
    pub fn from_edge(e: &ArcEdge) -> Self {
        let (sin1, cos1) = e.lat1.sin_cos();
        let (sin2, cos2) = e.lat2.sin_cos();
        Self {
            c1: cos1 * e.lon1.sin() * sin2 - cos2 * e.lon2.sin() * sin1,
            c2: cos2 * e.lon2.cos() * sin1 - cos1 * e.lon1.cos() * sin2,
            c3: cos1 * cos2 * (e.lon2 - e.lon1).sin(),
        }
    }

    /// Latitude of the edge's great circle at longitude `lon`.
    #[inline]
    pub fn lat_lower(&self, lon: f64) -> f64 {
        -((self.c1 * lon.cos() + self.c2 * lon.sin()) / self.c3).atan()
    }
}

/// ∫∫ f(lat, lon) over one edge's lune, signed by the longitude direction.
pub(crate) fn lune_integral(e: &ArcEdge, f: Integrand, cfg: &MeasureCfg) -> Result<f64, QuadError> {
    let coeffs = LuneCoeffs::from_edge(e);
    quad::integrate(
        &|lon| {
            quad::integrate(
                &|lat| Ok(f(lat, lon)),
                coeffs.lat_lower(lon),
                FRAC_PI_2,
                cfg.quad_tol,
                cfg.quad_max_depth,
            )
        },
        e.lon1,
        e.lon2,
        cfg.quad_tol,
        cfg.quad_max_depth,
    )
}

/// Per-integrand sums across all retained edges.
pub(crate) fn edge_sums<const N: usize>(
    edges: &[ArcEdge],
    integrands: [Integrand; N],
    cfg: &MeasureCfg,
) -> Result<[f64; N], QuadError> {
    fn fold<const N: usize>(mut acc: [f64; N], vals: [f64; N]) -> [f64; N] {
        for (a, v) in acc.iter_mut().zip(vals) {
            *a += v;
        }
        acc
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        edges
            .par_iter()
            .map(|e| per_edge(e, integrands, cfg))
            .try_reduce(|| [0.0; N], |a, b| Ok(fold(a, b)))
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut acc = [0.0; N];
        for e in edges {
            acc = fold(acc, per_edge(e, integrands, cfg)?);
        }
        Ok(acc)
    }
}

fn per_edge<const N: usize>(
    e: &ArcEdge,
    integrands: [Integrand; N],
    cfg: &MeasureCfg,
) -> Result<[f64; N], QuadError> {
    let mut vals = [0.0; N];
    for (v, f) in vals.iter_mut().zip(integrands) {
        *v = lune_integral(e, f, cfg)?;
    }
    log::trace!(
        "lune sums for edge ({:.4},{:.4})->({:.4},{:.4}): {:?}",
        e.lat1,
        e.lon1,
        e.lat2,
        e.lon2,
        vals
    );
    Ok(vals)
}
