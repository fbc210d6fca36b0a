//! Point containment via a winding sum around a rotated pole.
//!
//! The polygon is rotated so the query point becomes the north pole; a point
//! inside then sees the ring's transformed longitudes wind once around it,
//! so their wrapped deltas sum to ±2π depending on orientation. Points far
//! outside sum to ≈ 0.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Rotation3, Vector3};

use crate::geo::{MeasureCfg, Orientation, Vertex};

/// Rotation taking `query` to the north pole: spin the query meridian onto
/// the prime meridian, then tilt it up the rest of the way.
fn pole_rotation(query: Vertex) -> Rotation3<f64> {
    let (lat, lon) = query.radians();
    Rotation3::from_axis_angle(&Vector3::y_axis(), lat - FRAC_PI_2)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), -lon)
}

/// Wrapped winding of the ring's longitudes as seen from `query`.
fn winding_sum(query: Vertex, ring: &[Vertex]) -> f64 {
    let rot = pole_rotation(query);
    let lons: Vec<f64> = ring
        .iter()
        .map(|v| {
            let p = rot * v.unit_vector();
            p.y.atan2(p.x)
        })
        .collect();
    let mut sum = 0.0;
    for w in lons.windows(2) {
        let mut dlon = w[1] - w[0];
        if dlon > PI {
            dlon -= 2.0 * PI;
        } else if dlon < -PI {
            dlon += 2.0 * PI;
        }
        sum += dlon;
    }
    sum
}

/// Whether `query` lies inside the closed ring traversed with `orientation`.
///
/// The comparison against ±2π uses `cfg.winding_tol` of slack; ring vertices
/// themselves sit on that boundary and may resolve either way.
pub fn contains_point(
    query: Vertex,
    ring: &[Vertex],
    orientation: Orientation,
    cfg: &MeasureCfg,
) -> bool {
    let target = match orientation {
        Orientation::Counterclockwise => 2.0 * PI,
        Orientation::Clockwise => -2.0 * PI,
    };
    (winding_sum(query, ring) - target).abs() < cfg.winding_tol
}

/// Independent per-point containment, in input order.
pub fn contains_points(
    queries: &[Vertex],
    ring: &[Vertex],
    orientation: Orientation,
    cfg: &MeasureCfg,
) -> Vec<bool> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        queries
            .par_iter()
            .map(|&q| contains_point(q, ring, orientation, cfg))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|&q| contains_point(q, ring, orientation, cfg))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, 10.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(0.0, 0.0),
        ]
    }

    #[test]
    fn rotation_sends_query_to_the_pole() {
        for &(lat, lon) in &[(5.0, 5.0), (-40.0, 170.0), (72.0, -33.0)] {
            let q = Vertex::new(lat, lon);
            let p = pole_rotation(q) * q.unit_vector();
            assert!((p - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
        }
    }

    #[test]
    fn interior_and_exterior_points_resolve() {
        let cfg = MeasureCfg::default();
        let ring = square();
        let ccw = Orientation::Counterclockwise;
        assert!(contains_point(Vertex::new(5.0, 5.0), &ring, ccw, &cfg));
        assert!(!contains_point(Vertex::new(50.0, 50.0), &ring, ccw, &cfg));
        assert!(!contains_point(Vertex::new(-5.0, 5.0), &ring, ccw, &cfg));
    }

    #[test]
    fn clockwise_ring_uses_the_negative_target() {
        let cfg = MeasureCfg::default();
        let mut ring = square();
        ring.reverse();
        let cw = Orientation::Clockwise;
        assert!(contains_point(Vertex::new(5.0, 5.0), &ring, cw, &cfg));
        assert!(!contains_point(Vertex::new(50.0, 50.0), &ring, cw, &cfg));
    }

    #[test]
    fn ring_vertices_are_borderline() {
        // A ring vertex sits exactly on the winding boundary, so the result
        // may resolve either way; this only pins that the test is total.
        let cfg = MeasureCfg::default();
        let ring = square();
        for &v in &ring {
            let _ = contains_point(v, &ring, Orientation::Counterclockwise, &cfg);
        }
    }

    #[test]
    fn antipodal_point_is_outside() {
        let cfg = MeasureCfg::default();
        assert!(!contains_point(
            Vertex::new(-5.0, -175.0),
            &square(),
            Orientation::Counterclockwise,
            &cfg
        ));
    }

    #[test]
    fn multi_point_preserves_input_order() {
        let cfg = MeasureCfg::default();
        let queries = [
            Vertex::new(5.0, 5.0),
            Vertex::new(50.0, 50.0),
            Vertex::new(1.0, 9.0),
        ];
        let flags = contains_points(&queries, &square(), Orientation::Counterclockwise, &cfg);
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn both_longitude_conventions_accepted_for_queries() {
        let cfg = MeasureCfg::default();
        // A ring straddling the date line, queried with either convention.
        let ring = vec![
            Vertex::new(0.0, 170.0),
            Vertex::new(0.0, -170.0),
            Vertex::new(10.0, -170.0),
            Vertex::new(10.0, 170.0),
            Vertex::new(0.0, 170.0),
        ];
        let ccw = Orientation::Counterclockwise;
        assert!(contains_point(Vertex::new(5.0, 180.0), &ring, ccw, &cfg));
        assert!(contains_point(Vertex::new(5.0, -180.0), &ring, ccw, &cfg));
        assert!(!contains_point(Vertex::new(5.0, 0.0), &ring, ccw, &cfg));
    }
}
