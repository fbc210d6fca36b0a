//! Random star-shaped polygons on the sphere (cap jitter + replay tokens).
//!
//! Model
//! - Draw a cap center away from the poles, `n` ascending azimuths with
//!   bounded jitter, and angular radii around a base colatitude; place each
//!   vertex by rotating the jittered cap boundary from the pole frame onto
//!   the center.
//! - Ascending azimuths make the ring simple (star-shaped) and
//!   counterclockwise; determinism uses a replay token `(seed, index)` mixed
//!   into a single RNG.

use std::f64::consts::PI;

use nalgebra::{Rotation3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Vertex;

/// Cap-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CapCfg {
    /// Number of ring vertices (at least 3).
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to
    /// [0, 0.49] so azimuths stay strictly ascending.
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude on the colatitude).
    pub radius_jitter: f64,
    /// Base angular radius of the cap in radians.
    pub base_radius: f64,
}

impl Default for CapCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter_frac: 0.3,
            radius_jitter: 0.25,
            base_radius: 0.4,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw an open ring tracing a star-shaped polygon counterclockwise around a
/// random cap center. Closing the ring is left to the caller.
pub fn draw_polygon_cap(cfg: CapCfg, tok: ReplayToken) -> Vec<Vertex> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radius_jitter.max(0.0);
    let rho0 = cfg.base_radius.clamp(1e-3, PI / 2.0 - 1e-3);

    // Keep the center off the poles so the ring stays well conditioned.
    let center_lat = (rng.gen::<f64>() * 2.0 - 1.0) * 60.0;
    let center_lon = (rng.gen::<f64>() * 2.0 - 1.0) * 180.0;
    let frame = cap_frame(center_lat.to_radians(), center_lon.to_radians());

    let delta = 2.0 * PI / n as f64;
    let phase = rng.gen::<f64>() * 2.0 * PI;
    let mut azimuths: Vec<f64> = (0..n)
        .map(|k| phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta)
        .collect();
    azimuths.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    azimuths
        .into_iter()
        .map(|az| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let rho = (1.0 + u).max(1e-3) * rho0;
            let (sin_rho, cos_rho) = rho.sin_cos();
            let local = Vector3::new(sin_rho * az.cos(), sin_rho * az.sin(), cos_rho);
            Vertex::from_unit_vector(frame * local)
        })
        .collect()
}

/// Rotation taking the north-pole frame onto the cap center.
fn cap_frame(lat: f64, lon: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), lon)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), PI / 2.0 - lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CapCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_polygon_cap(cfg, tok);
        let b = draw_polygon_cap(cfg, tok);
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p, q);
        }
    }

    #[test]
    fn distinct_tokens_differ() {
        let cfg = CapCfg::default();
        let a = draw_polygon_cap(cfg, ReplayToken { seed: 1, index: 0 });
        let b = draw_polygon_cap(cfg, ReplayToken { seed: 1, index: 1 });
        assert!(a.iter().zip(b.iter()).any(|(p, q)| p != q));
    }

    #[test]
    fn vertex_count_floor_is_three() {
        let cfg = CapCfg {
            vertices: 1,
            ..CapCfg::default()
        };
        assert_eq!(draw_polygon_cap(cfg, ReplayToken { seed: 9, index: 0 }).len(), 3);
    }
}
