//! Perimeter: sum of great-circle arcs between consecutive vertices.
//!
//! Orientation-independent, and zero-length edges contribute nothing on their
//! own (`acos(1) = 0`), so no coincidence skip is needed here.

use crate::geo::edge::arc_between;
use crate::geo::Vertex;

/// Perimeter of a closed ring in radians.
pub fn polygon_perimeter(ring: &[Vertex]) -> f64 {
    ring.windows(2)
        .map(|w| arc_between(&w[0].unit_vector(), &w[1].unit_vector()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn equatorial_ring_has_full_circumference() {
        let mut ring: Vec<Vertex> = (0..36).map(|k| Vertex::new(0.0, 10.0 * k as f64)).collect();
        ring.push(ring[0]);
        assert!((polygon_perimeter(&ring) - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn reversal_leaves_perimeter_unchanged() {
        let ring = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, 10.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(0.0, 0.0),
        ];
        let mut reversed = ring.clone();
        reversed.reverse();
        assert!((polygon_perimeter(&ring) - polygon_perimeter(&reversed)).abs() < 1e-12);
    }

    #[test]
    fn repeated_vertex_adds_nothing() {
        let ring = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, 10.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(0.0, 0.0),
        ];
        let mut padded = ring.clone();
        padded.insert(3, padded[2]);
        assert!((polygon_perimeter(&ring) - polygon_perimeter(&padded)).abs() < 1e-15);
    }

    #[test]
    fn meridian_legs_have_exact_length() {
        // Two 10° meridian hops out and back.
        let ring = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(0.0, 0.0),
        ];
        assert!((polygon_perimeter(&ring) - 2.0 * 10f64.to_radians()).abs() < 1e-12);
    }
}
