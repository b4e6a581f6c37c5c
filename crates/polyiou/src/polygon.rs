//! Convex polygon as an ordered vertex loop.
//!
//! Purpose
//! - Shoelace area and winding detection, orientation normalization,
//!   N-vertex point location, and single-line clipping. These are the
//!   primitives the overlap engine composes.
//!
//! Invariants (caller-upheld, checked only by the optional `is_convex`)
//! - Consecutive vertices are distinct.
//! - The loop, closed, traces a convex non-self-intersecting boundary.
//!
//! Winding convention: positive shoelace sum means `CounterClockwise`;
//! `locate_eps` votes in the same direction.

use crate::segment::Segment;
use crate::types::{GeomCfg, Location, Point, Winding};
use crate::util::{cross, points_equal, push_unique};

/// Ordered vertex loop of an assumed-convex polygon.
#[derive(Clone, Debug, Default)]
pub struct Polygon {
    pub verts: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(verts: Vec<Point>) -> Self {
        Self { verts }
    }

    /// Boundary edges in loop order, each as a finite segment.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| Segment::new(self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Signed shoelace sum over the closed loop; positive for CCW order.
    /// Zero for fewer than 3 vertices.
    pub fn signed_area(&self) -> f64 {
        if self.verts.len() < 3 {
            return 0.0;
        }
        let mut s = 0.0;
        for i in 0..self.verts.len() {
            let p = self.verts[i];
            let q = self.verts[(i + 1) % self.verts.len()];
            s += cross(p, q);
        }
        0.5 * s
    }

    /// Non-negative area magnitude.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding of the loop; |signed area| within `eps` is `Degenerate`.
    pub fn winding_eps(&self, eps: f64) -> Winding {
        let s = self.signed_area();
        if s > eps {
            Winding::CounterClockwise
        } else if s < -eps {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Shorthand for [`Self::winding_eps`] with the default tolerance.
    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding_eps(GeomCfg::default().eps)
    }

    /// Reverse the vertex order iff the current winding is the opposite of
    /// `target`. No-op when the winding already matches or is degenerate.
    /// Idempotent.
    pub fn orient_eps(&mut self, target: Winding, eps: f64) {
        let w = self.winding_eps(eps);
        if !w.is_degenerate() && w == target.reversed() {
            self.verts.reverse();
        }
    }

    /// Shorthand for [`Self::orient_eps`] with the default tolerance.
    #[inline]
    pub fn orient(&mut self, target: Winding) {
        self.orient_eps(target, GeomCfg::default().eps);
    }

    /// Non-mutating [`Self::orient_eps`].
    pub fn oriented_eps(&self, target: Winding, eps: f64) -> Polygon {
        let mut out = self.clone();
        out.orient_eps(target, eps);
        out
    }

    /// Shorthand for [`Self::oriented_eps`] with the default tolerance.
    #[inline]
    pub fn oriented(&self, target: Winding) -> Polygon {
        self.oriented_eps(target, GeomCfg::default().eps)
    }

    /// Classify `p` against the boundary in the loop's *current* winding.
    ///
    /// Any edge containing `p` (within `eps`) answers `OnBoundary` at once.
    /// Otherwise every edge's cross sign must agree with the winding for
    /// `Inside`; one disagreement is enough for `Outside`. Degenerate loops
    /// have no interior.
    pub fn locate_eps(&self, p: Point, eps: f64) -> Location {
        match self.verts.len() {
            0 => return Location::Outside,
            1 => {
                return if points_equal(p, self.verts[0], eps) {
                    Location::OnBoundary
                } else {
                    Location::Outside
                }
            }
            _ => {}
        }
        let mut pos = false;
        let mut neg = false;
        for e in self.edges() {
            if e.contains_point_eps(p, eps) {
                return Location::OnBoundary;
            }
            let c = cross(e.direction(), p - e.a);
            if c > 0.0 {
                pos = true;
            } else if c < 0.0 {
                neg = true;
            }
        }
        match self.winding_eps(eps) {
            Winding::CounterClockwise if !neg => Location::Inside,
            Winding::Clockwise if !pos => Location::Inside,
            _ => Location::Outside,
        }
    }

    /// Shorthand for [`Self::locate_eps`] with the default tolerance.
    #[inline]
    pub fn locate(&self, p: Point) -> Location {
        self.locate_eps(p, GeomCfg::default().eps)
    }

    /// Crossings of the infinite line through `line` with the boundary:
    /// for each edge, the line-line intersection kept iff it lies within the
    /// edge's extent. Eps-deduped (the line may pass through a shared vertex
    /// of two edges).
    pub fn clip_line_cfg(&self, line: &Segment, cfg: GeomCfg) -> Vec<Point> {
        let mut out = Vec::new();
        for e in self.edges() {
            if let Some(p) = line.line_intersection_cfg(&e, cfg) {
                if e.contains_point_eps(p, cfg.eps) {
                    push_unique(&mut out, p, cfg.eps);
                }
            }
        }
        out
    }

    /// Shorthand for [`Self::clip_line_cfg`] with default tolerances.
    #[inline]
    pub fn clip_line(&self, line: &Segment) -> Vec<Point> {
        self.clip_line_cfg(line, GeomCfg::default())
    }

    /// Optional validation pass: every turn along the loop has a consistent
    /// sign (eps-collinear turns allowed). The rest of the kernel trusts the
    /// convexity precondition; call this at trust boundaries.
    pub fn is_convex_eps(&self, eps: f64) -> bool {
        let n = self.verts.len();
        if n < 3 {
            return false;
        }
        let mut pos = false;
        let mut neg = false;
        for i in 0..n {
            let a = self.verts[i];
            let b = self.verts[(i + 1) % n];
            let c = self.verts[(i + 2) % n];
            let t = cross(b - a, c - b);
            if t > eps {
                pos = true;
            } else if t < -eps {
                neg = true;
            }
        }
        !(pos && neg)
    }

    /// Shorthand for [`Self::is_convex_eps`] with the default tolerance.
    #[inline]
    pub fn is_convex(&self) -> bool {
        self.is_convex_eps(GeomCfg::default().eps)
    }
}
