use std::f64::consts::PI;

use crate::artifact::ArtifactGeometry;
use crate::types::ShapeKind;

/// Convert a Y value between the source frame (origin top-left, Y down) and
/// the render frame (origin bottom-left, Y up). The formula is its own
/// inverse, so the same call performs both directions.
pub fn flip_y(y: i32, frame_height: i32) -> i32 {
    frame_height - y
}

/// Square vertices around `(cx, cy)` with half-extent `s`:
/// bottom-left, top-left, top-right, bottom-right.
pub fn square_vertices(center: (i32, i32), s: i32) -> Vec<(f64, f64)> {
    let (cx, cy) = (f64::from(center.0), f64::from(center.1));
    let s = f64::from(s);
    vec![
        (cx - s, cy - s),
        (cx - s, cy + s),
        (cx + s, cy + s),
        (cx + s, cy - s),
    ]
}

/// Triangle vertices around `(cx, cy)` with half-extent `s`:
/// apex, bottom-right, bottom-left.
pub fn triangle_vertices(center: (i32, i32), s: i32) -> Vec<(f64, f64)> {
    let (cx, cy) = (f64::from(center.0), f64::from(center.1));
    let s = f64::from(s);
    vec![(cx, cy + s), (cx + s, cy - s), (cx - s, cy - s)]
}

/// Rotate `points` about `center` by `degrees`, rounding each coordinate.
/// Positive angles turn clockwise in the render frame (`y' = cy - sin·dx +
/// cos·dy`), matching how the shapes visually spin, not the mathematical
/// counter-clockwise convention.
pub fn rotate_about(points: &[(f64, f64)], center: (f64, f64), degrees: f32) -> Vec<(f64, f64)> {
    let radians = f64::from(degrees) * PI / 180.0;
    let (cos_rad, sin_rad) = (radians.cos(), radians.sin());
    let (cx, cy) = center;
    points
        .iter()
        .map(|&(x, y)| {
            let (dx, dy) = (x - cx, y - cy);
            (
                (cx + cos_rad * dx + sin_rad * dy).round(),
                (cy - sin_rad * dx + cos_rad * dy).round(),
            )
        })
        .collect()
}

/// Build the renderable geometry for one shape in the render frame.
/// Circles carry center + radius; squares and triangles carry their vertex
/// list, rotated when a non-zero angle is present.
pub fn shape_geometry(
    kind: ShapeKind,
    center: (i32, i32),
    half_extent: i32,
    angle_degrees: Option<f32>,
) -> ArtifactGeometry {
    let center_f = (f64::from(center.0), f64::from(center.1));
    match kind {
        ShapeKind::Circle => ArtifactGeometry::Circle {
            center: center_f,
            radius: f64::from(half_extent),
        },
        ShapeKind::Square | ShapeKind::Triangle => {
            let mut vertices = match kind {
                ShapeKind::Square => square_vertices(center, half_extent),
                _ => triangle_vertices(center, half_extent),
            };
            if let Some(angle) = angle_degrees {
                if angle != 0.0 {
                    vertices = rotate_about(&vertices, center_f, angle);
                }
            }
            ArtifactGeometry::Polygon { vertices }
        }
    }
}

/// Reflect one axis of motion off the walls of `[0, limit]`.
///
/// The candidate position is `center + delta`; if the shape's edge would
/// cross either wall the center snaps to the wall-adjacent position and the
/// returned delta is negated for the caller to store back. The two axes
/// never influence each other. A shape with `half_extent >= limit / 2` may
/// oscillate every tick; that is accepted behavior.
pub fn bounce_axis(center: i32, half_extent: i32, delta: i32, limit: i32) -> (i32, i32) {
    let candidate = center + delta;
    if candidate + half_extent > limit {
        (limit - half_extent, -delta)
    } else if candidate - half_extent < 0 {
        (half_extent, -delta)
    } else {
        (candidate, delta)
    }
}

/// Reflect both axes independently. Returns the new center and the
/// (possibly negated) per-axis deltas.
pub fn bounce(
    center: (i32, i32),
    half_extent: i32,
    delta: (i32, i32),
    limit: (i32, i32),
) -> ((i32, i32), (i32, i32)) {
    let (x, dx) = bounce_axis(center.0, half_extent, delta.0, limit.0);
    let (y, dy) = bounce_axis(center.1, half_extent, delta.1, limit.1);
    ((x, y), (dx, dy))
}

fn bounding_box_center(vertices: &[(f64, f64)]) -> (f64, f64) {
    let (mut min_x, mut min_y) = vertices[0];
    let (mut max_x, mut max_y) = vertices[0];
    for &(x, y) in &vertices[1..] {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    (min_x + (max_x - min_x) / 2.0, min_y + (max_y - min_y) / 2.0)
}

/// Endpoints of the gone-mark "X": a single open polyline through the
/// shape's last known pose, never two independent segments.
///
/// Circles cross the bounding square of the circle (`delta = sqrt(r²/2)`),
/// squares cross corner-to-corner through the center, triangles run
/// apex/center/bottom-left then center/bottom-right.
pub fn gone_mark_endpoints(geometry: &ArtifactGeometry) -> Vec<(f64, f64)> {
    match geometry {
        ArtifactGeometry::Circle { center, radius } => {
            let (x, y) = *center;
            let delta = (radius * radius / 2.0).sqrt();
            let (lt_x, rt_x) = (x - delta, x + delta);
            let (tp_y, bt_y) = (y + delta, y - delta);
            vec![(lt_x, tp_y), (rt_x, bt_y), (x, y), (rt_x, tp_y), (lt_x, bt_y)]
        }
        ArtifactGeometry::Polygon { vertices } if vertices.len() == 4 => {
            // vertex order: bottom-left, top-left, top-right, bottom-right
            let center = bounding_box_center(vertices);
            vec![vertices[1], vertices[3], center, vertices[2], vertices[0]]
        }
        ArtifactGeometry::Polygon { vertices } => {
            // vertex order: apex, bottom-right, bottom-left
            let center = bounding_box_center(vertices);
            vec![vertices[0], center, vertices[2], center, vertices[1]]
        }
        // already a mark; nothing further to overlay
        ArtifactGeometry::Polyline { points } => points.clone(),
    }
}
