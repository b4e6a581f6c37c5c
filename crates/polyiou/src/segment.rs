//! Finite line segment and its two geometric queries.
//!
//! Purpose
//! - `contains_point_eps`: eps-tolerant membership on the segment.
//! - `line_intersection_cfg`: intersection of the two infinite supporting
//!   lines; `None` for near-parallel pairs instead of an unguarded division.
//!
//! Invariants
//! - Endpoints are used as provided; a near-zero-length segment degrades to
//!   an eps point check in `contains_point_eps`.

use crate::types::{GeomCfg, Point};
use crate::util::{cross, points_equal};

/// Finite segment from `a` to `b`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    #[inline]
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    /// True iff `p` is within `eps` of the supporting line and inside the
    /// eps-inflated bounding extent of the segment.
    ///
    /// The perpendicular distance is `|cross(d, p-a)| / |d|`, so axis-aligned
    /// segments need no special casing.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        let d = self.direction();
        let len = d.norm();
        if len <= eps {
            return points_equal(p, self.a, eps);
        }
        let dist = cross(d, p - self.a).abs() / len;
        if dist > eps {
            return false;
        }
        let (xmin, xmax) = (self.a.x.min(self.b.x), self.a.x.max(self.b.x));
        let (ymin, ymax) = (self.a.y.min(self.b.y), self.a.y.max(self.b.y));
        p.x >= xmin - eps && p.x <= xmax + eps && p.y >= ymin - eps && p.y <= ymax + eps
    }

    /// Shorthand for [`Self::contains_point_eps`] with the default tolerance.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_point_eps(p, GeomCfg::default().eps)
    }

    /// Intersection of the two *infinite* lines through the segments.
    ///
    /// Determinant formula on the direction vectors. Returns `None` when the
    /// lines are near-parallel (`|cross(d1, d2)| <= eps_det * |d1| * |d2|`);
    /// callers decide what a missing crossing means.
    pub fn line_intersection_cfg(&self, other: &Segment, cfg: GeomCfg) -> Option<Point> {
        let d1 = self.direction();
        let d2 = other.direction();
        let denom = cross(d1, d2);
        if denom.abs() <= cfg.eps_det * d1.norm() * d2.norm() {
            return None;
        }
        let t = cross(other.a - self.a, d2) / denom;
        Some(self.a + d1 * t)
    }

    /// Shorthand for [`Self::line_intersection_cfg`] with default tolerances.
    #[inline]
    pub fn line_intersection(&self, other: &Segment) -> Option<Point> {
        self.line_intersection_cfg(other, GeomCfg::default())
    }

    /// True segment-segment intersection: the line crossing, kept only when
    /// it lies on **both** finite segments (within `cfg.eps`).
    pub fn intersection_cfg(&self, other: &Segment, cfg: GeomCfg) -> Option<Point> {
        let p = self.line_intersection_cfg(other, cfg)?;
        if self.contains_point_eps(p, cfg.eps) && other.contains_point_eps(p, cfg.eps) {
            Some(p)
        } else {
            None
        }
    }

    /// Shorthand for [`Self::intersection_cfg`] with default tolerances.
    #[inline]
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        self.intersection_cfg(other, GeomCfg::default())
    }
}
