//! Signed spherical excess and unsigned area.
//!
//! Each retained edge forms a spherical triangle with the north pole; its
//! area comes from the haversine law (for the side opposite the pole) and
//! L'Huilier's theorem, signed by the direction of longitude traversal. The
//! accumulated signed excess encodes orientation together with whether the
//! reference pole lies inside the ring, so downstream engines branch on an
//! epsilon-aware classification of it rather than on raw inequalities.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geo::edge::{hav, normalized_edges, ArcEdge};
use crate::geo::{MeasureCfg, Orientation, Vertex};

/// Signed area of the spherical triangle formed by one edge and the north
/// pole.
pub(crate) fn edge_excess(e: &ArcEdge) -> f64 {
    let dlat = e.lat2 - e.lat1;
    // The wrapped edge keeps |Δlon| ≤ π, the shorter path for the triangle.
    let dlon = (e.lon2 - e.lon1).abs();
    let havb = hav(dlat) + e.lat1.cos() * e.lat2.cos() * hav(dlon);
    let b = 2.0 * havb.sqrt().asin();
    let a = FRAC_PI_2 - e.lat1;
    let c = FRAC_PI_2 - e.lat2;
    let s = 0.5 * (a + b + c);
    let t = (s / 2.0).tan() * ((s - a) / 2.0).tan() * ((s - b) / 2.0).tan() * ((s - c) / 2.0).tan();
    let excess = 4.0 * t.abs().sqrt().atan();
    if e.lon2 < e.lon1 {
        -excess
    } else {
        excess
    }
}

/// Signed excess of a closed ring in steradians, relative to the north pole.
pub fn polygon_excess(ring: &[Vertex], cfg: &MeasureCfg) -> f64 {
    normalized_edges(ring, cfg.eps_edge)
        .iter()
        .map(edge_excess)
        .sum()
}

/// Unsigned area of a closed ring in steradians, independent of traversal
/// direction. Always within [0, 2π]: above 2π the triangulation enclosed the
/// complement region and the area is 4π − |E|.
pub fn polygon_area(ring: &[Vertex], cfg: &MeasureCfg) -> f64 {
    let area = polygon_excess(ring, cfg).abs();
    if area > 2.0 * PI {
        4.0 * PI - area
    } else {
        area
    }
}

/// Epsilon-aware classification of the signed excess against the branch
/// boundaries {0, ±2π}.
///
/// The boundaries themselves are mathematically undefined (a zero-area ring
/// or one enclosing exactly a hemisphere) and classify as `Degenerate`
/// instead of falling into a neighboring branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExcessBand {
    /// 0 < E < 2π
    SmallPositive,
    /// E > 2π
    LargePositive,
    /// −2π < E < 0
    SmallNegative,
    /// E < −2π
    LargeNegative,
    /// E within `eps_band` of 0 or ±2π.
    Degenerate,
}

impl ExcessBand {
    pub fn classify(excess: f64, eps_band: f64) -> Self {
        let abs = excess.abs();
        if abs < eps_band || (abs - 2.0 * PI).abs() < eps_band {
            ExcessBand::Degenerate
        } else if excess > 2.0 * PI {
            ExcessBand::LargePositive
        } else if excess > 0.0 {
            ExcessBand::SmallPositive
        } else if excess < -2.0 * PI {
            ExcessBand::LargeNegative
        } else {
            ExcessBand::SmallNegative
        }
    }

    /// Traversal direction encoded by the excess, if any.
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            ExcessBand::SmallPositive | ExcessBand::LargeNegative => {
                Some(Orientation::Counterclockwise)
            }
            ExcessBand::SmallNegative | ExcessBand::LargePositive => Some(Orientation::Clockwise),
            ExcessBand::Degenerate => None,
        }
    }
}
