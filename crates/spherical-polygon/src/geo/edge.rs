//! Per-edge angular helpers consumed by every engine.

use std::f64::consts::PI;

use nalgebra::Vector3;

use super::Vertex;

/// Half-versed-sine: `(1 − cos x) / 2`.
#[inline]
pub fn hav(x: f64) -> f64 {
    (1.0 - x.cos()) / 2.0
}

/// Great-circle arc between two unit vectors, in radians.
///
/// The dot product is clamped to [−1, 1]: round-off can push it slightly
/// outside and `acos` would return NaN.
#[inline]
pub fn arc_between(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    u.dot(v).clamp(-1.0, 1.0).acos()
}

/// One polygon edge in radians, with the second longitude wrapped onto the
/// shorter path around the sphere (|lon2 − lon1| ≤ π).
#[derive(Clone, Copy, Debug)]
pub(crate) struct ArcEdge {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}

impl ArcEdge {
    /// Normalized edge between consecutive vertices, or `None` for a
    /// coincident pair (raw |Δlon| below `eps_edge`), which must contribute
    /// nothing to any accumulator.
    pub fn normalized(v1: Vertex, v2: Vertex, eps_edge: f64) -> Option<Self> {
        let (lat1, lon1) = v1.radians();
        let (lat2, mut lon2) = v2.radians();
        let dlon = lon2 - lon1;
        if dlon.abs() < eps_edge {
            return None;
        }
        if dlon < -PI {
            lon2 += 2.0 * PI;
        } else if dlon > PI {
            lon2 -= 2.0 * PI;
        }
        Some(Self {
            lat1,
            lon1,
            lat2,
            lon2,
        })
    }
}

/// Normalized edges of a closed ring, coincident pairs dropped.
pub(crate) fn normalized_edges(ring: &[Vertex], eps_edge: f64) -> Vec<ArcEdge> {
    ring.windows(2)
        .filter_map(|w| ArcEdge::normalized(w[0], w[1], eps_edge))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hav_known_values() {
        assert!(hav(0.0).abs() < 1e-15);
        assert!((hav(PI) - 1.0).abs() < 1e-15);
        assert!((hav(PI / 2.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn arc_clamps_out_of_range_dot_products() {
        let u = Vertex::new(10.0, 20.0).unit_vector();
        // Inflate the norm so the dot product strictly exceeds 1; without the
        // clamp this would be NaN.
        let v = u * (1.0 + 1e-7);
        assert_eq!(arc_between(&u, &v), 0.0);
        let anti = -v;
        assert!((arc_between(&u, &anti) - PI).abs() < 1e-12);
    }

    #[test]
    fn wrap_picks_shorter_path() {
        // 170° -> −170° crosses the date line: the wrapped target is 190°.
        let e = ArcEdge::normalized(Vertex::new(0.0, 170.0), Vertex::new(0.0, -170.0), 1e-6)
            .expect("edge retained");
        assert!((e.lon2 - 190f64.to_radians()).abs() < 1e-12);
        assert!((e.lon2 - e.lon1 - 20f64.to_radians()).abs() < 1e-12);

        // And the reverse crossing wraps the other way.
        let e = ArcEdge::normalized(Vertex::new(0.0, -170.0), Vertex::new(0.0, 170.0), 1e-6)
            .expect("edge retained");
        assert!((e.lon2 - (-190f64).to_radians()).abs() < 1e-12);
    }

    #[test]
    fn coincident_pair_is_skipped() {
        let v = Vertex::new(12.0, 34.0);
        assert!(ArcEdge::normalized(v, v, 1e-6).is_none());
        // A meridional edge (same longitude, different latitude) is also
        // skipped by the excess/integral engines per the shared rule.
        assert!(ArcEdge::normalized(Vertex::new(0.0, 34.0), Vertex::new(10.0, 34.0), 1e-6).is_none());
    }

    #[test]
    fn closed_square_keeps_two_edges() {
        let ring = [
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, 10.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(0.0, 0.0),
        ];
        // The two meridional edges have zero longitude delta and drop out.
        assert_eq!(normalized_edges(&ring, 1e-6).len(), 2);
    }
}
