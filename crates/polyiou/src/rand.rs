//! Random convex polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - A small, deterministic sampler for convex vertex loops, used by the
//!   property tests and benches. Parameterizable, reproducible, and
//!   returning a CCW [`Polygon`] ready for the overlap engine.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   and radial jitter, then take the convex hull of the resulting points.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::polygon::Polygon;
use crate::types::Point;
use crate::util::convex_hull;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius of the sampled loop.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
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

/// Draw a random convex polygon via radial jitter + convex hull.
///
/// The hull may drop jittered points that fall inside it, so the returned
/// loop can have fewer vertices than requested. Vertices come out in CCW
/// order near the origin; translate or rotate the result as needed.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    convex_hull(&pts).map(Polygon::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Winding;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1.verts.len(), p2.verts.len());
        for (a, b) in p1.verts.iter().zip(p2.verts.iter()) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn draws_are_convex_and_ccw() {
        let cfg = RadialCfg::default();
        for index in 0..50 {
            let poly = draw_polygon_radial(cfg, ReplayToken { seed: 3, index }).expect("poly");
            assert!(poly.verts.len() >= 3);
            assert!(poly.is_convex());
            assert_eq!(poly.winding(), Winding::CounterClockwise);
        }
    }

    #[test]
    fn distinct_indices_differ() {
        let cfg = RadialCfg::default();
        let a = draw_polygon_radial(cfg, ReplayToken { seed: 9, index: 0 }).unwrap();
        let b = draw_polygon_radial(cfg, ReplayToken { seed: 9, index: 1 }).unwrap();
        let same = a.verts.len() == b.verts.len()
            && a.verts
                .iter()
                .zip(b.verts.iter())
                .all(|(p, q)| (p - q).norm() < 1e-12);
        assert!(!same);
    }
}
