//! Line, curve, and arrow rendering.
//!
//! All entry points take rink-relative points and transform them before any
//! geometry. Paths with fewer than two points are a legitimate transient
//! state while the user is still drawing, so they render as silent no-ops.

use glam::{dvec2, DVec2};

use crate::model::{DrawingElement, ElementKind};
use crate::surface::{Fill, Path, Stroke, Surface};
use crate::transform::TransformContext;
use crate::types::{HexColor, Px, RinkPoint};

use super::defaults;

fn to_canvas(points: &[RinkPoint], transform: &TransformContext) -> Vec<DVec2> {
    points
        .iter()
        .map(|p| transform.rink_to_canvas(*p).to_vec2())
        .collect()
}

fn line_path(points: &[DVec2]) -> Path {
    Path::polyline(points)
}

/// Midpoint-anchor smoothing: each interior input point becomes a quadratic
/// control point whose segment lands on the midpoint to the next input
/// point, and the final segment curves directly into the last point so the
/// path terminates exactly there.
///
/// This is deliberately not a standard spline. Saved plays were authored
/// against this exact shape, so the asymmetric final segment must stay.
fn curve_path(points: &[DVec2]) -> Path {
    let mut path = Path::new();
    match points {
        [] | [_] => {}
        [a, b] => {
            path.move_to(*a);
            path.line_to(*b);
        }
        _ => {
            let n = points.len();
            path.move_to(points[0]);
            for i in 1..n - 2 {
                let mid = (points[i] + points[i + 1]) * 0.5;
                path.quad_to(points[i], mid);
            }
            path.quad_to(points[n - 2], points[n - 1]);
        }
    }
    path
}

/// Arrowhead length in pixels, proportional to stroke width with a floor so
/// thin arrows stay visible.
fn arrow_head_length(stroke_width: Px) -> f64 {
    (stroke_width.raw() * defaults::ARROW_HEAD_PER_STROKE).max(defaults::ARROW_HEAD_MIN)
}

/// Filled triangle with its apex at `to`, oriented along the final segment.
fn arrow_head_path(from: DVec2, to: DVec2, stroke_width: Px) -> Path {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let len = arrow_head_length(stroke_width);
    let base = |a: f64| to - len * dvec2(a.cos(), a.sin());

    let mut path = Path::new();
    path.move_to(to);
    path.line_to(base(angle - defaults::ARROW_HEAD_HALF_ANGLE));
    path.line_to(base(angle + defaults::ARROW_HEAD_HALF_ANGLE));
    path.close();
    path
}

fn fill_arrow_head<S: Surface + ?Sized>(
    surface: &mut S,
    canvas_points: &[DVec2],
    color: HexColor,
    stroke_width: Px,
) {
    let n = canvas_points.len();
    let head = arrow_head_path(canvas_points[n - 2], canvas_points[n - 1], stroke_width);
    surface.fill_path(&head, &Fill::opaque(color));
}

/// Stroke a polyline through the transformed points, optionally capped with
/// an arrowhead on the final segment.
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[RinkPoint],
    color: HexColor,
    stroke_width: Px,
    transform: &TransformContext,
    show_arrow: bool,
) {
    if points.len() < 2 {
        return;
    }
    let pts = to_canvas(points, transform);
    surface.stroke_path(&line_path(&pts), &Stroke::solid(color, stroke_width.raw()));
    if show_arrow {
        fill_arrow_head(surface, &pts, color, stroke_width);
    }
}

/// Stroke a smoothed curve through the transformed points. Two points fall
/// back to a straight segment identical to [`draw_line`].
pub fn draw_curve<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[RinkPoint],
    color: HexColor,
    stroke_width: Px,
    transform: &TransformContext,
    show_arrow: bool,
) {
    if points.len() < 2 {
        return;
    }
    let pts = to_canvas(points, transform);
    surface.stroke_path(&curve_path(&pts), &Stroke::solid(color, stroke_width.raw()));
    if show_arrow {
        fill_arrow_head(surface, &pts, color, stroke_width);
    }
}

/// [`draw_line`] with the arrowhead always on.
pub fn draw_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[RinkPoint],
    color: HexColor,
    stroke_width: Px,
    transform: &TransformContext,
) {
    draw_line(surface, points, color, stroke_width, transform, true);
}

/// Render one drawing element, dispatching on its kind. Selection adds a
/// soft gold halo under the element: the same path at `stroke_width + 4`,
/// half opacity, so the element keeps its own color on top.
pub fn draw_element<S: Surface + ?Sized>(
    surface: &mut S,
    element: &DrawingElement,
    transform: &TransformContext,
    is_selected: bool,
) {
    if element.points.len() < 2 {
        return;
    }
    let pts = to_canvas(&element.points, transform);
    let path = match element.kind {
        ElementKind::Curve => curve_path(&pts),
        ElementKind::Line | ElementKind::Arrow => line_path(&pts),
    };

    if is_selected {
        let halo = Stroke::solid(
            defaults::SELECTION_COLOR,
            element.stroke_width.raw() + defaults::HALO_EXTRA_WIDTH,
        )
        .with_opacity(defaults::HALO_OPACITY);
        surface.stroke_path(&path, &halo);
    }

    surface.stroke_path(&path, &Stroke::solid(element.color, element.stroke_width.raw()));

    if element.kind == ElementKind::Arrow {
        fill_arrow_head(surface, &pts, element.color, element.stroke_width);
    }
}
