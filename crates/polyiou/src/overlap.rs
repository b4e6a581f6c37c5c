//! Overlap engine: intersection polygon, areas, and IoU of two convex
//! polygons.
//!
//! Purpose
//! - Assemble the intersection polygon of two convex vertex loops from
//!   boundary crossings plus covered vertices, reorder the merged set into a
//!   valid convex loop, and derive intersection/union area and IoU.
//!
//! Why this construction
//! - The intersection of two convex polygons is convex, and each of its
//!   vertices is either a boundary crossing of the two outlines or a vertex
//!   of one polygon covered by the other. Collecting both sets and sorting
//!   them by polar angle around their centroid recovers the loop without any
//!   edge-walking state.
//! - Union area then follows from the inclusion-exclusion identity, so no
//!   union polygon is ever constructed.
//!
//! Degeneracies
//! - Fewer than 3 merged points: the polygons miss each other or touch in a
//!   point or an edge. The intersection is empty (`None`, area 0).
//! - Eps-zero union (both inputs degenerate): IoU is defined as 0.

use crate::polygon::Polygon;
use crate::types::{GeomCfg, Point, Winding};
use crate::util::{polar_angle, push_unique};

/// All crossings of the two boundaries: every edge of `a` against every edge
/// of `b`, keeping points that lie on both finite edges. Eps-deduped.
pub fn crossing_points_cfg(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> Vec<Point> {
    let mut out = Vec::new();
    for ea in a.edges() {
        for p in b.clip_line_cfg(&ea, cfg) {
            if ea.contains_point_eps(p, cfg.eps) {
                push_unique(&mut out, p, cfg.eps);
            }
        }
    }
    out
}

/// Shorthand for [`crossing_points_cfg`] with default tolerances.
#[inline]
pub fn crossing_points(a: &Polygon, b: &Polygon) -> Vec<Point> {
    crossing_points_cfg(a, b, GeomCfg::default())
}

/// Vertices of `a` that are inside-or-on `b`.
pub fn interior_points_cfg(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> Vec<Point> {
    a.verts
        .iter()
        .copied()
        .filter(|&v| b.locate_eps(v, cfg.eps).is_covered())
        .collect()
}

/// Shorthand for [`interior_points_cfg`] with default tolerances.
#[inline]
pub fn interior_points(a: &Polygon, b: &Polygon) -> Vec<Point> {
    interior_points_cfg(a, b, GeomCfg::default())
}

/// The intersection polygon of two convex polygons, or `None` when it is
/// empty (no overlap, or touching in only a point or an edge).
///
/// Steps: normalize both loops to CCW; merge boundary crossings with the
/// covered vertices of either polygon (eps-dedup); with 3 or more points,
/// sort by polar angle around the centroid (ties by squared distance, so
/// centroid-collinear duplicates order deterministically) and return the
/// loop.
pub fn intersection_polygon_cfg(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> Option<Polygon> {
    if a.verts.len() < 3 || b.verts.len() < 3 {
        return None;
    }
    let a = a.oriented_eps(Winding::CounterClockwise, cfg.eps);
    let b = b.oriented_eps(Winding::CounterClockwise, cfg.eps);

    let mut pts = crossing_points_cfg(&a, &b, cfg);
    for p in interior_points_cfg(&a, &b, cfg) {
        push_unique(&mut pts, p, cfg.eps);
    }
    for p in interior_points_cfg(&b, &a, cfg) {
        push_unique(&mut pts, p, cfg.eps);
    }
    if pts.len() < 3 {
        return None;
    }

    let centroid = pts.iter().fold(Point::zeros(), |s, p| s + *p) / pts.len() as f64;
    pts.sort_by(|p, q| {
        let ap = polar_angle(*p - centroid);
        let aq = polar_angle(*q - centroid);
        match ap.partial_cmp(&aq).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => {
                let dp = (*p - centroid).norm_squared();
                let dq = (*q - centroid).norm_squared();
                dp.partial_cmp(&dq).unwrap_or(std::cmp::Ordering::Equal)
            }
            o => o,
        }
    });
    Some(Polygon::new(pts))
}

/// Shorthand for [`intersection_polygon_cfg`] with default tolerances.
#[inline]
pub fn intersection_polygon(a: &Polygon, b: &Polygon) -> Option<Polygon> {
    intersection_polygon_cfg(a, b, GeomCfg::default())
}

/// Area of the intersection of two convex polygons; 0 when they do not
/// overlap.
pub fn intersection_area_cfg(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> f64 {
    intersection_polygon_cfg(a, b, cfg)
        .map(|p| p.area())
        .unwrap_or(0.0)
}

/// Shorthand for [`intersection_area_cfg`] with default tolerances.
#[inline]
pub fn intersection_area(a: &Polygon, b: &Polygon) -> f64 {
    intersection_area_cfg(a, b, GeomCfg::default())
}

/// Union area via inclusion-exclusion: `area(a) + area(b) - intersection`.
pub fn union_area_cfg(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> f64 {
    a.area() + b.area() - intersection_area_cfg(a, b, cfg)
}

/// Shorthand for [`union_area_cfg`] with default tolerances.
#[inline]
pub fn union_area(a: &Polygon, b: &Polygon) -> f64 {
    union_area_cfg(a, b, GeomCfg::default())
}

/// Intersection over Union in [0, 1]; 0 when the union is eps-zero (both
/// polygons degenerate).
pub fn iou_cfg(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> f64 {
    let inter = intersection_area_cfg(a, b, cfg);
    let union = a.area() + b.area() - inter;
    if union <= cfg.eps {
        0.0
    } else {
        inter / union
    }
}

/// Shorthand for [`iou_cfg`] with default tolerances.
#[inline]
pub fn iou(a: &Polygon, b: &Polygon) -> f64 {
    iou_cfg(a, b, GeomCfg::default())
}
