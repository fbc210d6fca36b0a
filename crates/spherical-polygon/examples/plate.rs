//! Timing probe for one realistic plate on the Earth.
//!
//! Computes every measure of a lat/lon quadrilateral over the Indian Ocean
//! at Earth radius and prints key=value lines, with wall times for the
//! closed-form engines versus the quadrature-backed ones.

use std::time::Instant;

use spherical_polygon::geo::Vertex;
use spherical_polygon::polygon::SphericalPolygon;

const EARTH_RADIUS_KM: f64 = 6378.137;

fn main() {
    let plate = SphericalPolygon::new(vec![
        Vertex::new(-10.0, 60.0),
        Vertex::new(-10.0, 100.0),
        Vertex::new(25.0, 100.0),
        Vertex::new(25.0, 60.0),
    ]);

    let fast_start = Instant::now();
    let area = plate.area_scaled(EARTH_RADIUS_KM, 1.0);
    let perimeter = plate.perimeter_scaled(EARTH_RADIUS_KM);
    let fast_elapsed = fast_start.elapsed().as_secs_f64() * 1e3;

    let quad_start = Instant::now();
    let centroid = plate
        .centroid_scaled(EARTH_RADIUS_KM)
        .expect("centroid converges");
    let inertia = plate.inertia().expect("inertia converges");
    let quad_elapsed = quad_start.elapsed().as_secs_f64() * 1e3;

    println!(
        "vertices={} orientation={:?} excess_sr={:.9}",
        plate.vertices().len(),
        plate.orientation(),
        plate.signed_excess()
    );
    println!("area_km2={area:.3} perimeter_km={perimeter:.3}");
    println!(
        "centroid_lat={:.4} centroid_lon={:.4} centroid_depth_km={:.3}",
        centroid.lat, centroid.lon, centroid.depth
    );
    println!(
        "inertia_trace={:.9} twice_area_sr={:.9}",
        inertia.trace(),
        2.0 * plate.area()
    );
    println!("closed_form_time_ms={fast_elapsed:.3}");
    println!("quadrature_time_ms={quad_elapsed:.3}");
}
