//! Fixed 4-vertex convenience polygon for the bounding-quad use case.
//!
//! Array-backed storage with named accessors; semantically identical to a
//! 4-vertex [`Polygon`] and delegating to the same machinery.

use crate::overlap;
use crate::polygon::Polygon;
use crate::types::{GeomCfg, Location, Point, Winding};
use crate::util::points_equal;

/// Convex quadrilateral given by its four corners in loop order.
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    pub verts: [Point; 4],
}

impl Quad {
    #[inline]
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self {
            verts: [p1, p2, p3, p4],
        }
    }

    #[inline]
    pub fn from_array(verts: [Point; 4]) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.verts[0]
    }
    #[inline]
    pub fn p2(&self) -> Point {
        self.verts[1]
    }
    #[inline]
    pub fn p3(&self) -> Point {
        self.verts[2]
    }
    #[inline]
    pub fn p4(&self) -> Point {
        self.verts[3]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.verts
    }

    /// Swap the 2nd and 4th vertex, reversing the traversal direction of the
    /// loop. Renormalizes quads whose two point pairs were supplied in the
    /// opposite rotational order.
    #[inline]
    pub fn flip(&mut self) {
        self.verts.swap(1, 3);
    }

    /// Degenerate-quad check: any two of the four corners eps-coincide.
    pub fn has_repeat_vertex_eps(&self, eps: f64) -> bool {
        for i in 0..4 {
            for j in (i + 1)..4 {
                if points_equal(self.verts[i], self.verts[j], eps) {
                    return true;
                }
            }
        }
        false
    }

    /// Shorthand for [`Self::has_repeat_vertex_eps`] with the default
    /// tolerance.
    #[inline]
    pub fn has_repeat_vertex(&self) -> bool {
        self.has_repeat_vertex_eps(GeomCfg::default().eps)
    }

    #[inline]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.verts.to_vec())
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.to_polygon().area()
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        self.to_polygon().winding()
    }

    /// Normalize the corner order to `target` winding (in place).
    pub fn orient(&mut self, target: Winding) {
        let mut poly = self.to_polygon();
        poly.orient(target);
        for (v, p) in self.verts.iter_mut().zip(poly.verts) {
            *v = p;
        }
    }

    #[inline]
    pub fn locate(&self, p: Point) -> Location {
        self.to_polygon().locate(p)
    }

    pub fn intersection_area_with_cfg(&self, other: &Quad, cfg: GeomCfg) -> f64 {
        overlap::intersection_area_cfg(&self.to_polygon(), &other.to_polygon(), cfg)
    }

    #[inline]
    pub fn intersection_area_with(&self, other: &Quad) -> f64 {
        self.intersection_area_with_cfg(other, GeomCfg::default())
    }

    pub fn union_area_with_cfg(&self, other: &Quad, cfg: GeomCfg) -> f64 {
        overlap::union_area_cfg(&self.to_polygon(), &other.to_polygon(), cfg)
    }

    #[inline]
    pub fn union_area_with(&self, other: &Quad) -> f64 {
        self.union_area_with_cfg(other, GeomCfg::default())
    }

    pub fn iou_with_cfg(&self, other: &Quad, cfg: GeomCfg) -> f64 {
        overlap::iou_cfg(&self.to_polygon(), &other.to_polygon(), cfg)
    }

    #[inline]
    pub fn iou_with(&self, other: &Quad) -> f64 {
        self.iou_with_cfg(other, GeomCfg::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_quad(x0: f64, y0: f64) -> Quad {
        Quad::new(
            vector![x0, y0],
            vector![x0 + 1.0, y0],
            vector![x0 + 1.0, y0 + 1.0],
            vector![x0, y0 + 1.0],
        )
    }

    #[test]
    fn quad_matches_polygon_semantics() {
        let q = unit_quad(0.0, 0.0);
        assert!((q.area() - 1.0).abs() < 1e-12);
        assert_eq!(q.winding(), Winding::CounterClockwise);
        assert_eq!(q.locate(vector![0.5, 0.5]), Location::Inside);
    }

    #[test]
    fn flip_reverses_traversal() {
        let mut q = unit_quad(0.0, 0.0);
        q.flip();
        assert_eq!(q.winding(), Winding::Clockwise);
        assert!((q.area() - 1.0).abs() < 1e-12);
        q.flip();
        assert_eq!(q.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn repeat_vertex_detection() {
        let q = Quad::new(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
        );
        assert!(q.has_repeat_vertex());
        assert!(!unit_quad(0.0, 0.0).has_repeat_vertex());
    }

    #[test]
    fn orient_reorders_corners_in_place() {
        let mut q = unit_quad(0.0, 0.0);
        q.orient(Winding::Clockwise);
        assert_eq!(q.winding(), Winding::Clockwise);
        q.orient(Winding::Clockwise);
        assert_eq!(q.winding(), Winding::Clockwise);
    }

    #[test]
    fn quad_iou_shifted_by_half() {
        let a = unit_quad(0.0, 0.0);
        let b = unit_quad(0.5, 0.0);
        assert!((a.intersection_area_with(&b) - 0.5).abs() < 1e-9);
        assert!((a.union_area_with(&b) - 1.5).abs() < 1e-9);
        assert!((a.iou_with(&b) - 1.0 / 3.0).abs() < 1e-9);
    }
}
