use crate::types::Point;

/// Signed z-component of the 3D cross product of `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Polar angle of `v` from the positive x-axis, in [0, 2π).
///
/// atan2-based; the zero vector maps to 0 by the `atan2(0, 0)` convention.
#[inline]
pub fn polar_angle(v: Point) -> f64 {
    let a = v.y.atan2(v.x);
    if a < 0.0 {
        a + std::f64::consts::TAU
    } else {
        a
    }
}

/// Eps-box point equality: both coordinate differences within `eps`.
#[inline]
pub fn points_equal(a: Point, b: Point, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Append `p` unless an eps-equal point is already present.
pub fn push_unique(pts: &mut Vec<Point>, p: Point, eps: f64) {
    if !pts.iter().any(|&q| points_equal(p, q, eps)) {
        pts.push(p);
    }
}

/// Andrew's monotone chain convex hull (returns hull in CCW order, deduped).
///
/// Complexity: O(N log N) for sort + linear passes.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(
        |a, b| match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        },
    );
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let turn = |o: Point, a: Point, b: Point| cross(a - o, b - o);
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn polar_angle_quadrants() {
        assert!(polar_angle(vector![1.0, 0.0]).abs() < 1e-12);
        assert!((polar_angle(vector![0.0, 1.0]) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((polar_angle(vector![-1.0, 0.0]) - std::f64::consts::PI).abs() < 1e-12);
        assert!((polar_angle(vector![0.0, -1.0]) - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn push_unique_dedups_within_eps() {
        let mut pts = vec![vector![0.0, 0.0]];
        push_unique(&mut pts, vector![1e-8, -1e-8], 1e-6);
        assert_eq!(pts.len(), 1);
        push_unique(&mut pts, vector![1.0, 0.0], 1e-6);
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn hull_of_square_with_interior_point() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![0.5, 0.5],
        ];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull.len(), 4);
        // CCW: positive shoelace sum.
        let mut s = 0.0;
        for i in 0..hull.len() {
            s += cross(hull[i], hull[(i + 1) % hull.len()]);
        }
        assert!(s > 0.0);
    }

    #[test]
    fn hull_rejects_collinear_input() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(convex_hull(&pts).is_none());
    }
}
