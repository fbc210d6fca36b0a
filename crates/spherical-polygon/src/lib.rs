//! Measures of simple polygons on the unit sphere.
//!
//! A polygon is an ordered ring of (latitude, longitude) vertices joined by
//! great-circle arcs. The crate computes its signed spherical excess and
//! unsigned area, perimeter, centroid (with depth below the surface), the
//! symmetric inertia tensor of the enclosed surface patch, and point
//! containment via a winding test around the query point.
//!
//! Layout
//! - `geo`: shared spherical primitives (vertices, longitude wrapping, arcs,
//!   tolerances, a reproducible polygon sampler).
//! - `measure`: the excess/area, perimeter, centroid and inertia engines and
//!   the adaptive quadrature they share.
//! - `contains`: pole-rotation winding containment.
//! - `polygon`: the `SphericalPolygon` façade (ring closing, cached
//!   orientation, physical scaling by radius and density).

pub mod contains;
pub mod geo;
pub mod measure;
pub mod polygon;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contains::{contains_point, contains_points};
    pub use crate::geo::rand::{draw_polygon_cap, CapCfg, ReplayToken};
    pub use crate::geo::{MeasureCfg, Orientation, Vertex};
    pub use crate::measure::{
        polygon_area, polygon_centroid, polygon_excess, polygon_inertia, polygon_perimeter,
        Centroid, ExcessBand, Inertia, MeasureError,
    };
    pub use crate::polygon::SphericalPolygon;
}
