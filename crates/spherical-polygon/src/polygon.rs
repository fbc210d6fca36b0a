//! `SphericalPolygon`: a closed vertex ring plus cached derived state.
//!
//! Construction applies the closing rule once (append the first vertex when
//! the ring is open) and computes the signed excess and its band, so the
//! orientation is derived a single time and reused by every later query.
//! All measures are returned for the unit sphere; the `*_scaled` variants
//! apply the physical radius/density post-multiplications.

use std::f64::consts::PI;

use crate::contains;
use crate::geo::{MeasureCfg, Orientation, Vertex};
use crate::measure::{
    polygon_centroid, polygon_excess, polygon_inertia, polygon_perimeter, Centroid, ExcessBand,
    Inertia, MeasureError,
};

#[derive(Clone, Debug)]
pub struct SphericalPolygon {
    ring: Vec<Vertex>,
    cfg: MeasureCfg,
    excess: f64,
    band: ExcessBand,
}

impl SphericalPolygon {
    /// Build a polygon from a vertex list, closing the ring if needed.
    /// Closing is idempotent: an already-closed ring is left alone.
    pub fn new(points: Vec<Vertex>) -> Self {
        Self::with_cfg(points, MeasureCfg::default())
    }

    /// `new` with explicit tolerances.
    pub fn with_cfg(mut points: Vec<Vertex>, cfg: MeasureCfg) -> Self {
        debug_assert!(points.len() >= 3, "a polygon needs at least 3 vertices");
        if points.first() != points.last() {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        let excess = polygon_excess(&points, &cfg);
        let band = ExcessBand::classify(excess, cfg.eps_band);
        log::debug!(
            "closed ring with {} vertices, signed excess {:.6e} ({:?})",
            points.len(),
            excess,
            band
        );
        Self {
            ring: points,
            cfg,
            excess,
            band,
        }
    }

    /// Convenience constructor from (lat, lon) pairs in degrees.
    pub fn from_degrees(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(lat, lon)| Vertex::new(lat, lon)).collect())
    }

    /// The closed ring (first vertex equal to the last).
    pub fn vertices(&self) -> &[Vertex] {
        &self.ring
    }

    /// Latitudes of the closed ring, in degrees.
    pub fn lats(&self) -> Vec<f64> {
        self.ring.iter().map(|v| v.lat).collect()
    }

    /// Longitudes of the closed ring, in degrees.
    pub fn lons(&self) -> Vec<f64> {
        self.ring.iter().map(|v| v.lon).collect()
    }

    /// Signed excess in steradians, relative to the north pole.
    pub fn signed_excess(&self) -> f64 {
        self.excess
    }

    /// Band of the signed excess (cached at construction).
    pub fn band(&self) -> ExcessBand {
        self.band
    }

    /// Traversal direction, unless the excess sits on a branch boundary.
    pub fn orientation(&self) -> Option<Orientation> {
        self.band.orientation()
    }

    /// Unsigned area in steradians, within [0, 2π], from the cached excess.
    pub fn area(&self) -> f64 {
        let area = self.excess.abs();
        if area > 2.0 * PI {
            4.0 * PI - area
        } else {
            area
        }
    }

    /// Area on a sphere of radius `radius` with area density `density`
    /// (a mass when the density is physical): `A · R² · ρ`.
    pub fn area_scaled(&self, radius: f64, density: f64) -> f64 {
        self.area() * radius * radius * density
    }

    /// Perimeter in radians.
    pub fn perimeter(&self) -> f64 {
        polygon_perimeter(&self.ring)
    }

    /// Perimeter on a sphere of radius `radius`: `P · R`.
    pub fn perimeter_scaled(&self, radius: f64) -> f64 {
        self.perimeter() * radius
    }

    /// Centroid location and depth below the surface.
    pub fn centroid(&self) -> Result<Centroid, MeasureError> {
        polygon_centroid(&self.ring, &self.cfg)
    }

    /// Centroid with its depth scaled to a sphere of radius `radius`.
    pub fn centroid_scaled(&self, radius: f64) -> Result<Centroid, MeasureError> {
        self.centroid().map(|c| c.scaled(radius))
    }

    /// Inertia tensor of the enclosed patch over the unit sphere.
    pub fn inertia(&self) -> Result<Inertia, MeasureError> {
        polygon_inertia(&self.ring, &self.cfg)
    }

    /// Inertia tensor for radius `radius` and area density `density`:
    /// `M · R⁴ · ρ`.
    pub fn inertia_scaled(&self, radius: f64, density: f64) -> Result<Inertia, MeasureError> {
        self.inertia().map(|t| t.scaled(radius, density))
    }

    /// Whether a single point lies inside the polygon.
    ///
    /// Fails with `DegenerateExcess` when no orientation could be derived
    /// (excess on a branch boundary); the winding target is undefined there.
    pub fn contains_point(&self, query: Vertex) -> Result<bool, MeasureError> {
        let orientation = self.require_orientation()?;
        Ok(contains::contains_point(
            query,
            &self.ring,
            orientation,
            &self.cfg,
        ))
    }

    /// Independent containment flags for several points, in input order.
    pub fn contains_points(&self, queries: &[Vertex]) -> Result<Vec<bool>, MeasureError> {
        let orientation = self.require_orientation()?;
        Ok(contains::contains_points(
            queries,
            &self.ring,
            orientation,
            &self.cfg,
        ))
    }

    fn require_orientation(&self) -> Result<Orientation, MeasureError> {
        self.band
            .orientation()
            .ok_or(MeasureError::DegenerateExcess(self.excess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square_points() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, 10.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(10.0, 0.0),
        ]
    }

    #[test]
    fn open_ring_is_closed_once() {
        let open = SphericalPolygon::new(square_points());
        assert_eq!(open.vertices().len(), 5);
        assert_eq!(open.vertices()[0], open.vertices()[4]);

        let mut closed = square_points();
        closed.push(closed[0]);
        let closed = SphericalPolygon::new(closed);
        assert_eq!(closed.vertices().len(), 5);
        assert_eq!(closed.signed_excess(), open.signed_excess());
    }

    #[test]
    fn orientation_is_cached_and_correct() {
        let p = SphericalPolygon::new(square_points());
        assert_eq!(p.orientation(), Some(Orientation::Counterclockwise));
        let mut reversed = square_points();
        reversed.reverse();
        let q = SphericalPolygon::new(reversed);
        assert_eq!(q.orientation(), Some(Orientation::Clockwise));
        assert_eq!(q.orientation().map(Orientation::reversed), p.orientation());
    }

    #[test]
    fn containment_through_the_facade() {
        let p = SphericalPolygon::new(square_points());
        assert!(p.contains_point(Vertex::new(5.0, 5.0)).unwrap());
        assert!(!p.contains_point(Vertex::new(50.0, 50.0)).unwrap());
        let flags = p
            .contains_points(&[Vertex::new(5.0, 5.0), Vertex::new(50.0, 50.0)])
            .unwrap();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn degenerate_ring_has_no_orientation() {
        let p = SphericalPolygon::new(vec![
            Vertex::new(0.0, 30.0),
            Vertex::new(10.0, 30.0),
            Vertex::new(20.0, 30.0),
        ]);
        assert_eq!(p.orientation(), None);
        assert!(matches!(
            p.contains_point(Vertex::new(5.0, 30.0)),
            Err(MeasureError::DegenerateExcess(_))
        ));
    }

    #[test]
    fn physical_scaling_is_a_post_multiplication() {
        let earth = 6378.137;
        let p = SphericalPolygon::new(square_points());
        assert!((p.area_scaled(earth, 1.0) - p.area() * earth * earth).abs() < 1e-9);
        assert!((p.perimeter_scaled(earth) - p.perimeter() * earth).abs() < 1e-9);
        let unit = p.inertia().unwrap();
        let scaled = p.inertia_scaled(10.0, 2.0).unwrap();
        assert!((scaled.m11 - unit.m11 * 2e4).abs() < 1e-9);
        let c = p.centroid().unwrap();
        let cs = p.centroid_scaled(earth).unwrap();
        assert!((cs.depth - c.depth * earth).abs() < 1e-9);
        assert_eq!(cs.lat, c.lat);
    }

    #[test]
    fn duplicate_vertex_yields_identical_measures() {
        let p = SphericalPolygon::new(square_points());
        let mut padded = square_points();
        padded.insert(2, padded[1]);
        let q = SphericalPolygon::new(padded);
        assert_eq!(p.signed_excess(), q.signed_excess());
        assert!((p.perimeter() - q.perimeter()).abs() < 1e-15);
        let (cp, cq) = (p.centroid().unwrap(), q.centroid().unwrap());
        assert!((cp.lat - cq.lat).abs() < 1e-12);
        assert!((cp.depth - cq.depth).abs() < 1e-12);
        let (ip, iq) = (p.inertia().unwrap(), q.inertia().unwrap());
        assert!((ip.m11 - iq.m11).abs() < 1e-12);
    }

    #[test]
    fn hemisphere_area_through_the_facade() {
        let ring: Vec<Vertex> = (0..36).map(|k| Vertex::new(0.0, 10.0 * k as f64)).collect();
        let p = SphericalPolygon::new(ring);
        assert!((p.area() - 2.0 * PI).abs() < 1e-9);
    }
}
