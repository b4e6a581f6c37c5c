//! Basic types and tolerances for the convex-overlap kernel.
//!
//! - `GeomCfg`: centralizes epsilons for point equality and parallelism checks.
//! - `Winding`: orientation of a vertex loop (determined, never stored).
//! - `Location`: position of a point relative to a convex boundary.

use nalgebra::Vector2;

/// 2D point/vector. All kernel operations work on plain `f64` coordinates.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// `eps` is the coordinate-scale tolerance: two points are equal, a point is
/// on a segment, or an area is degenerate when the relevant quantity is
/// within `eps`. Callers working at other coordinate scales tune it here
/// instead of patching literals.
///
/// `eps_det` guards the line-intersection determinant; it is relative to the
/// product of the direction norms, so it is scale-free.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps: f64,
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            eps_det: 1e-12,
        }
    }
}

/// Orientation of a polygon's vertex loop.
///
/// `Degenerate` covers fewer than 3 distinct points or an eps-zero signed
/// area. Convention, fixed crate-wide: positive shoelace sum means
/// `CounterClockwise`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Degenerate,
    Clockwise,
    CounterClockwise,
}

impl Winding {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Winding::Degenerate)
    }
    /// The loop direction with the opposite sign, if any.
    #[inline]
    pub fn reversed(&self) -> Winding {
        match self {
            Winding::Degenerate => Winding::Degenerate,
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

/// Position of a query point relative to a convex polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Outside,
    OnBoundary,
    Inside,
}

impl Location {
    /// Inside or on the boundary; what the overlap engine collects.
    #[inline]
    pub fn is_covered(&self) -> bool {
        !matches!(self, Location::Outside)
    }
}
