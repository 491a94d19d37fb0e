//! Two-corner outline construction for the shape tools.
//!
//! Every shape tool is driven by the same gesture: the user drags from one
//! corner of a bounding box to the other. The functions here turn those two
//! corners into the concrete geometry that gets stroked, without touching
//! any drawing context.

use std::f64::consts::PI;

/// Shape produced by a corner-to-corner drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Rectangle outline spanning the drag box
    Rectangle,
    /// Ellipse inscribed in the drag box
    Circle,
    /// Straight segment between the two drag points
    Line,
    /// Wireframe cube: front face on the drag box, back face offset by half
    /// the box size up and to the right
    Cube,
    /// Regular pentagon inscribed in the drag box
    Pentagon,
    /// Regular hexagon inscribed in the drag box
    Hexagon,
    /// Triangle with its base on the bottom edge of the drag box
    Triangle,
    /// Five-pointed star inscribed in the drag box
    Star,
}

impl ShapeKind {
    /// Human-readable tool label for logs and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Line => "Line",
            ShapeKind::Cube => "Cube",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Star => "Star",
        }
    }
}

/// Resolved geometry of a shape, ready for stroking.
///
/// `Rect` and `Ellipse` carry the drag box itself (the renderer handles
/// negative extents from previews); polygons carry explicit vertex lists and
/// are always drawn closed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Axis-aligned rectangle. Width/height may be negative while previewing.
    Rect { x: f64, y: f64, w: f64, h: f64 },
    /// Axis-aligned ellipse given by center and radii.
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    /// Open segment between two points, never normalized.
    Segment { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Closed polygon through the listed vertices.
    Polygon(Vec<(f64, f64)>),
}

/// Builds the outline for `kind` spanning the two corner points.
///
/// Corners are taken as given: previews pass the raw anchor and pointer
/// position, commits pass the normalized box (except for `Line`, which keeps
/// its endpoints in drag order).
pub fn outline(kind: ShapeKind, a: (f64, f64), b: (f64, f64)) -> Outline {
    let (x0, y0) = a;
    let (x1, y1) = b;
    match kind {
        ShapeKind::Rectangle => Outline::Rect {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        },
        ShapeKind::Circle => {
            let (cx, cy, rx, ry) = ellipse_in_box(x0, y0, x1, y1);
            Outline::Ellipse { cx, cy, rx, ry }
        }
        ShapeKind::Line => Outline::Segment { x1: x0, y1: y0, x2: x1, y2: y1 },
        ShapeKind::Cube => Outline::Polygon(cube_points(x0, y0, x1, y1)),
        ShapeKind::Pentagon => Outline::Polygon(regular_points(x0, y0, x1, y1, 5, PI / 2.0)),
        ShapeKind::Hexagon => Outline::Polygon(regular_points(x0, y0, x1, y1, 6, 0.0)),
        ShapeKind::Triangle => Outline::Polygon(triangle_points(x0, y0, x1, y1)),
        ShapeKind::Star => Outline::Polygon(star_points(x0, y0, x1, y1)),
    }
}

/// Center point of the drag box.
fn box_center(x0: f64, y0: f64, x1: f64, y1: f64) -> (f64, f64) {
    ((x0 + x1) / 2.0, (y0 + y1) / 2.0)
}

/// Circumradius used by the regular polygons: half the shorter box side.
fn box_radius(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    ((x1 - x0).abs()).min((y1 - y0).abs()) / 2.0
}

/// Converts a drag box into ellipse parameters (center and radii).
pub(crate) fn ellipse_in_box(x0: f64, y0: f64, x1: f64, y1: f64) -> (f64, f64, f64, f64) {
    let (cx, cy) = box_center(x0, y0, x1, y1);
    (cx, cy, (x1 - x0).abs() / 2.0, (y1 - y0).abs() / 2.0)
}

/// Vertex sequence for the wireframe cube.
///
/// The front face sits on the drag box (p1 top-left, going clockwise); the
/// back face is the front face shifted by (+width/2, -height/2). The single
/// sequence threads through all twelve edges, revisiting p1 halfway, and is
/// closed by the renderer to complete the final edge.
pub(crate) fn cube_points(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(f64, f64)> {
    let width = x1 - x0;
    let height = y1 - y0;

    let p1 = (x0, y0);
    let p2 = (x1, y0);
    let p3 = (x1, y1);
    let p4 = (x0, y1);

    let p5 = (x0 + width / 2.0, y0 - height / 2.0);
    let p6 = (x1 + width / 2.0, y0 - height / 2.0);
    let p7 = (x1 + width / 2.0, y1 - height / 2.0);
    let p8 = (x0 + width / 2.0, y1 - height / 2.0);

    vec![
        p1, p2, p6, p7, p3, p4, p8, p5, p1, p5, p6, p2, p3, p7, p8, p4,
    ]
}

/// Vertices of a regular polygon inscribed in the drag box.
///
/// `angle_offset` rotates the first vertex; the pentagon and star start from
/// the top (pi/2), the hexagon from the positive x axis. The y axis is
/// flipped so positive angles go up in screen coordinates.
pub(crate) fn regular_points(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    sides: usize,
    angle_offset: f64,
) -> Vec<(f64, f64)> {
    let (cx, cy) = box_center(x0, y0, x1, y1);
    let radius = box_radius(x0, y0, x1, y1);
    (0..sides)
        .map(|i| {
            let angle = angle_offset + i as f64 * 2.0 * PI / sides as f64;
            (cx + radius * angle.cos(), cy - radius * angle.sin())
        })
        .collect()
}

/// Triangle with its base on the bottom edge of the drag box.
///
/// The apex offset is half of `height`, which is itself half the box
/// height, so the apex sits a quarter of the box height above center
/// rather than on the top edge. A drag box of height H yields a visibly
/// squat triangle of height 3H/4.
pub(crate) fn triangle_points(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(f64, f64)> {
    let (cx, cy) = box_center(x0, y0, x1, y1);
    let height = (y1 - y0).abs() / 2.0;
    vec![(x0, y1), (x1, y1), (cx, cy - height / 2.0)]
}

/// Five-pointed star: outer vertices on the box radius, inner vertices at
/// half that radius, interleaved so the outline alternates between them.
pub(crate) fn star_points(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(f64, f64)> {
    let (cx, cy) = box_center(x0, y0, x1, y1);
    let radius = box_radius(x0, y0, x1, y1);
    let inner_radius = radius / 2.0;
    let angle_offset = PI / 2.0;

    let mut coords = Vec::with_capacity(10);
    for i in 0..5 {
        let outer_angle = angle_offset + i as f64 * 2.0 * PI / 5.0;
        coords.push((
            cx + radius * outer_angle.cos(),
            cy - radius * outer_angle.sin(),
        ));

        let inner_angle = outer_angle + PI / 5.0;
        coords.push((
            cx + inner_radius * inner_angle.cos(),
            cy - inner_radius * inner_angle.sin(),
        ));
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn point_close(p: (f64, f64), q: (f64, f64)) -> bool {
        close(p.0, q.0) && close(p.1, q.1)
    }

    #[test]
    fn rectangle_passes_the_box_through() {
        let outline = outline(ShapeKind::Rectangle, (50.0, 50.0), (150.0, 120.0));
        assert_eq!(
            outline,
            Outline::Rect {
                x: 50.0,
                y: 50.0,
                w: 100.0,
                h: 70.0
            }
        );
    }

    #[test]
    fn circle_is_the_inscribed_ellipse() {
        let outline = outline(ShapeKind::Circle, (0.0, 0.0), (10.0, 4.0));
        assert_eq!(
            outline,
            Outline::Ellipse {
                cx: 5.0,
                cy: 2.0,
                rx: 5.0,
                ry: 2.0
            }
        );
    }

    #[test]
    fn line_keeps_raw_endpoints() {
        let outline = outline(ShapeKind::Line, (100.0, 80.0), (20.0, 30.0));
        assert_eq!(
            outline,
            Outline::Segment {
                x1: 100.0,
                y1: 80.0,
                x2: 20.0,
                y2: 30.0
            }
        );
    }

    #[test]
    fn cube_has_sixteen_points_and_revisits_the_origin_corner() {
        let points = cube_points(0.0, 0.0, 100.0, 60.0);
        assert_eq!(points.len(), 16);
        // Walk starts at the front top-left corner and passes through it
        // again when switching from face edges to connector edges.
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[8], (0.0, 0.0));
        // Closing the polygon supplies the final edge back to p1's face.
        assert_eq!(points[15], (0.0, 60.0));
        // Back face is offset by (+w/2, -h/2) from the front face.
        assert_eq!(points[1], (100.0, 0.0));
        assert_eq!(points[2], (150.0, -30.0));
    }

    #[test]
    fn cube_threads_every_edge() {
        let points = cube_points(10.0, 20.0, 110.0, 80.0);
        // All eight distinct corners appear in the sequence.
        let mut distinct: Vec<(i64, i64)> = points
            .iter()
            .map(|&(x, y)| (x.round() as i64, y.round() as i64))
            .collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn pentagon_starts_at_the_top() {
        let points = regular_points(0.0, 0.0, 100.0, 100.0, 5, PI / 2.0);
        assert_eq!(points.len(), 5);
        assert!(point_close(points[0], (50.0, 0.0)));
    }

    #[test]
    fn hexagon_vertices_are_sixty_degrees_apart() {
        let points = regular_points(0.0, 0.0, 200.0, 200.0, 6, 0.0);
        assert_eq!(points.len(), 6);

        let (cx, cy) = (100.0, 100.0);
        for (i, &(x, y)) in points.iter().enumerate() {
            // Screen y grows downward, so flip it back before measuring.
            let angle = (cy - y).atan2(x - cx).rem_euclid(2.0 * PI);
            let expected = (i as f64 * PI / 3.0).rem_euclid(2.0 * PI);
            assert!(
                close(angle, expected),
                "vertex {i} at angle {angle}, expected {expected}"
            );
        }
    }

    #[test]
    fn polygon_radius_uses_the_shorter_box_side() {
        let points = regular_points(0.0, 0.0, 100.0, 40.0, 6, 0.0);
        // First vertex lies on the positive x axis at the radius.
        assert!(point_close(points[0], (70.0, 20.0)));
    }

    #[test]
    fn star_alternates_outer_and_inner_radii() {
        let points = star_points(0.0, 0.0, 200.0, 200.0);
        assert_eq!(points.len(), 10);

        let (cx, cy) = (100.0, 100.0);
        for (i, &(x, y)) in points.iter().enumerate() {
            let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            let expected = if i % 2 == 0 { 100.0 } else { 50.0 };
            assert!(
                close(dist, expected),
                "vertex {i} at distance {dist}, expected {expected}"
            );
        }
        // Outer ring starts at the top of the box.
        assert!(point_close(points[0], (100.0, 0.0)));
    }

    #[test]
    fn triangle_base_sits_on_the_bottom_edge() {
        let points = triangle_points(0.0, 0.0, 100.0, 100.0);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (0.0, 100.0));
        assert_eq!(points[1], (100.0, 100.0));
        // Apex lands a quarter of the box height above its center.
        assert_eq!(points[2], (50.0, 25.0));
    }

    #[test]
    fn regular_shapes_ignore_drag_direction() {
        let forward = regular_points(0.0, 0.0, 100.0, 40.0, 5, PI / 2.0);
        let backward = regular_points(100.0, 40.0, 0.0, 0.0, 5, PI / 2.0);
        for (f, b) in forward.iter().zip(backward.iter()) {
            assert!(point_close(*f, *b));
        }
    }
}
