use nalgebra::Vector3;

/// Tolerances shared by the measure and containment engines.
///
/// Defaults are fixed constants so callers do not juggle tolerances during
/// normal use; pass a custom value to `SphericalPolygon::with_cfg` or the
/// engine functions when a computation needs different slack.
#[derive(Clone, Copy, Debug)]
pub struct MeasureCfg {
    /// Coincident-vertex skip threshold on the raw longitude delta of an
    /// edge, in radians. Edges below it contribute zero to every accumulator.
    pub eps_edge: f64,
    /// Slack for classifying the signed excess against the branch boundaries
    /// {0, ±2π}.
    pub eps_band: f64,
    /// Absolute tolerance for the per-edge lune integrals.
    pub quad_tol: f64,
    /// Bisection depth cap for the adaptive quadrature.
    pub quad_max_depth: u32,
    /// Winding-sum slack for containment, in radians. Deliberately loose: it
    /// absorbs floating error accumulated over many edges.
    pub winding_tol: f64,
}

impl Default for MeasureCfg {
    fn default() -> Self {
        Self {
            eps_edge: 1e-6,
            eps_band: 1e-9,
            quad_tol: 1e-10,
            quad_max_depth: 48,
            winding_tol: 0.1,
        }
    }
}

/// A polygon vertex: latitude and longitude in degrees.
///
/// Latitude lies in [−90°, 90°]; longitude may follow either the
/// [−180°, 180°] or the [0°, 360°] convention, and both are accepted
/// everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub lat: f64,
    pub lon: f64,
}

impl Vertex {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude and longitude in radians.
    #[inline]
    pub fn radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }

    /// Unit vector on the sphere: x toward (0°, 0°), z toward the north pole.
    #[inline]
    pub fn unit_vector(self) -> Vector3<f64> {
        let (lat, lon) = self.radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Vertex under the spherical decomposition of `v`; the norm is
    /// discarded. Longitude comes out in (−180°, 180°].
    #[inline]
    pub fn from_unit_vector(v: Vector3<f64>) -> Self {
        let r = v.norm();
        Self {
            lat: (v.z / r).asin().to_degrees(),
            lon: v.y.atan2(v.x).to_degrees(),
        }
    }
}

/// Traversal direction of a closed ring, relative to the smaller of the two
/// regions its boundary cuts from the sphere.
///
/// Derived from the signed excess, never supplied by callers; the containment
/// engine takes it as an explicit parameter only to avoid recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Counterclockwise,
    Clockwise,
}

impl Orientation {
    /// Orientation of the same ring traversed backwards.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Counterclockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::Counterclockwise,
        }
    }
}
