//! Print IoU scores for a few bounding-quad pairs, the way a detection or
//! tracking pipeline would consume them.
//!
//! Usage:
//!   cargo run -p polyiou --example rotated_boxes

use nalgebra::vector;
use polyiou::Quad;

fn axis_box(x0: f64, y0: f64, w: f64, h: f64) -> Quad {
    Quad::new(
        vector![x0, y0],
        vector![x0 + w, y0],
        vector![x0 + w, y0 + h],
        vector![x0, y0 + h],
    )
}

fn rotated_box(cx: f64, cy: f64, w: f64, h: f64, angle: f64) -> Quad {
    let (s, c) = angle.sin_cos();
    let corners = [
        (-w / 2.0, -h / 2.0),
        (w / 2.0, -h / 2.0),
        (w / 2.0, h / 2.0),
        (-w / 2.0, h / 2.0),
    ];
    let verts = corners.map(|(x, y)| vector![cx + c * x - s * y, cy + s * x + c * y]);
    Quad::from_array(verts)
}

fn main() {
    let anchor = axis_box(0.0, 0.0, 2.0, 1.0);
    let cases = [
        ("identical", axis_box(0.0, 0.0, 2.0, 1.0)),
        ("shifted by half a width", axis_box(1.0, 0.0, 2.0, 1.0)),
        ("disjoint", axis_box(5.0, 5.0, 2.0, 1.0)),
        (
            "rotated 30 deg about center",
            rotated_box(1.0, 0.5, 2.0, 1.0, 30f64.to_radians()),
        ),
    ];
    for (label, candidate) in &cases {
        println!(
            "{label}: iou={:.4} intersection={:.4} union={:.4}",
            anchor.iou_with(candidate),
            anchor.intersection_area_with(candidate),
            anchor.union_area_with(candidate),
        );
    }
}
