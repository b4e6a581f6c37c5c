//! Intersection-over-Union for convex polygons.
//!
//! A pure computation kernel: given two convex vertex loops, compute their
//! intersection polygon, intersection/union area, and the IoU ratio used by
//! detection, tracking, and matching pipelines. All operations are
//! deterministic functions of their inputs; nothing is persisted and no
//! caller-owned polygon is mutated outside the explicit `orient`/`flip`
//! normalizations.
//!
//! Numerical policy
//! - Plain `f64` with explicit tolerances carried in [`GeomCfg`]; every
//!   predicate has a `_cfg`/`_eps` variant and a default-tolerance shorthand.
//! - Geometric degeneracies (parallel lines, empty intersections) yield
//!   `Option::None` or zero areas, never panics.

pub mod overlap;
pub mod polygon;
pub mod quad;
pub mod rand;
pub mod segment;
pub mod types;
pub mod util;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use overlap::{intersection_area, intersection_polygon, iou, union_area};
pub use polygon::Polygon;
pub use quad::Quad;
pub use segment::Segment;
pub use types::{GeomCfg, Location, Point, Winding};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::overlap::{
        crossing_points, crossing_points_cfg, interior_points, interior_points_cfg,
        intersection_area, intersection_area_cfg, intersection_polygon, intersection_polygon_cfg,
        iou, iou_cfg, union_area, union_area_cfg,
    };
    pub use crate::polygon::Polygon;
    pub use crate::quad::Quad;
    pub use crate::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::segment::Segment;
    pub use crate::types::{GeomCfg, Location, Point, Winding};
    pub use crate::util::{cross, points_equal, polar_angle};
}
