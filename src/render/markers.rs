//! Player markers and text annotations.

use glam::{dvec2, DVec2};

use crate::model::{PlayerIcon, TextAnnotation};
use crate::surface::{Fill, Path, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::transform::TransformContext;
use crate::types::HexColor;

use super::defaults;

/// Render one player marker: a filled circle in the player's color with a
/// black outline and the label centered inside. Selection draws a gold ring
/// beneath the marker first.
pub fn draw_player_icon<S: Surface + ?Sized>(
    surface: &mut S,
    player: &PlayerIcon,
    transform: &TransformContext,
    is_selected: bool,
) {
    let center = transform.rink_to_canvas(player.position).to_vec2();
    // Uniform scaling keeps the marker circular under anisotropic transforms.
    let radius = defaults::PLAYER_RADIUS.raw() * transform.uniform_scale();

    if is_selected {
        let ring = Path::circle(center, radius + defaults::SELECTION_RING_OFFSET);
        surface.stroke_path(
            &ring,
            &Stroke::solid(defaults::SELECTION_COLOR, defaults::SELECTION_RING_WIDTH),
        );
    }

    let body = Path::circle(center, radius);
    surface.fill_path(&body, &Fill::opaque(player.color));
    surface.stroke_path(&body, &Stroke::solid(HexColor::BLACK, defaults::PLAYER_OUTLINE_WIDTH));

    let label_style = TextStyle {
        size: radius * defaults::LABEL_FONT_RATIO,
        bold: true,
        color: HexColor::WHITE,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };
    surface.fill_text(&player.label, center, &label_style);
}

fn padded_rect(origin: DVec2, width: f64, height: f64, pad: f64) -> Path {
    Path::rect(
        origin - DVec2::splat(pad),
        origin + dvec2(width + pad, height + pad),
    )
}

/// Render one text annotation: a translucent white backing rectangle sized
/// to the measured text (for legibility over line work), then the text
/// itself, left- and top-aligned. Selection adds a translucent gold
/// highlight beneath the backing rectangle.
pub fn draw_text_annotation<S: Surface + ?Sized>(
    surface: &mut S,
    annotation: &TextAnnotation,
    transform: &TransformContext,
    is_selected: bool,
) {
    let origin = transform.rink_to_canvas(annotation.position).to_vec2();
    let style = TextStyle {
        size: annotation.font_size.raw() * transform.uniform_scale(),
        bold: false,
        color: annotation.color,
        align: TextAlign::Left,
        baseline: TextBaseline::Top,
    };
    let metrics = surface.measure_text(&annotation.text, &style);

    if is_selected {
        let highlight = padded_rect(
            origin,
            metrics.width,
            metrics.height,
            defaults::TEXT_HIGHLIGHT_PADDING,
        );
        surface.fill_path(
            &highlight,
            &Fill::translucent(defaults::SELECTION_COLOR, defaults::TEXT_HIGHLIGHT_OPACITY),
        );
    }

    let backing = padded_rect(origin, metrics.width, metrics.height, defaults::TEXT_BG_PADDING);
    surface.fill_path(
        &backing,
        &Fill::translucent(HexColor::WHITE, defaults::TEXT_BG_OPACITY),
    );

    surface.fill_text(&annotation.text, origin, &style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, PathEl, RecordingSurface};
    use crate::types::{Feet, Point, Px};

    fn player_at(x: f64, y: f64) -> PlayerIcon {
        PlayerIcon {
            id: "p1".to_string(),
            position: Point::new(Feet(x), Feet(y)),
            label: "91".to_string(),
            color: HexColor::new(0x00, 0x3A, 0x70),
        }
    }

    fn annotation_at(x: f64, y: f64) -> TextAnnotation {
        TextAnnotation {
            id: "a1".to_string(),
            text: "breakout".to_string(),
            position: Point::new(Feet(x), Feet(y)),
            font_size: Px(14.0),
            color: HexColor::BLACK,
        }
    }

    #[test]
    fn player_icon_draws_fill_outline_label() {
        let mut surface = RecordingSurface::new();
        let t = TransformContext::new(2.0, 3.0, 0.0, 0.0);
        draw_player_icon(&mut surface, &player_at(10.0, 10.0), &t, false);

        assert_eq!(surface.ops().len(), 3);
        // Radius uses the smaller scale so the marker stays circular.
        match &surface.ops()[0] {
            DrawOp::FillPath { path, fill } => {
                assert_eq!(
                    path.elements(),
                    &[PathEl::Circle { center: dvec2(20.0, 30.0), radius: 24.0 }]
                );
                assert_eq!(fill.color, HexColor::new(0x00, 0x3A, 0x70));
            }
            other => panic!("expected body fill, got {other:?}"),
        }
        match &surface.ops()[1] {
            DrawOp::StrokePath { stroke, .. } => {
                assert_eq!(stroke.color, HexColor::BLACK);
                assert_eq!(stroke.width, defaults::PLAYER_OUTLINE_WIDTH);
            }
            other => panic!("expected outline stroke, got {other:?}"),
        }
        match &surface.ops()[2] {
            DrawOp::FillText { text, origin, style } => {
                assert_eq!(text, "91");
                assert_eq!(*origin, dvec2(20.0, 30.0));
                assert!(style.bold);
                assert_eq!(style.color, HexColor::WHITE);
                assert_eq!(style.align, TextAlign::Center);
                assert_eq!(style.baseline, TextBaseline::Middle);
                assert_eq!(style.size, 24.0 * defaults::LABEL_FONT_RATIO);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn selected_player_gets_gold_ring_first() {
        let mut surface = RecordingSurface::new();
        let t = TransformContext::IDENTITY;
        draw_player_icon(&mut surface, &player_at(0.0, 0.0), &t, true);

        assert_eq!(surface.ops().len(), 4);
        match &surface.ops()[0] {
            DrawOp::StrokePath { path, stroke } => {
                assert_eq!(
                    path.elements(),
                    &[PathEl::Circle {
                        center: dvec2(0.0, 0.0),
                        radius: defaults::PLAYER_RADIUS.raw() + defaults::SELECTION_RING_OFFSET,
                    }]
                );
                assert_eq!(stroke.color, defaults::SELECTION_COLOR);
                assert_eq!(stroke.width, defaults::SELECTION_RING_WIDTH);
            }
            other => panic!("expected selection ring, got {other:?}"),
        }
    }

    #[test]
    fn annotation_draws_backing_then_text() {
        let mut surface = RecordingSurface::new();
        let t = TransformContext::new(2.0, 2.0, 0.0, 0.0);
        draw_text_annotation(&mut surface, &annotation_at(5.0, 5.0), &t, false);

        assert_eq!(surface.ops().len(), 2);
        match &surface.ops()[0] {
            DrawOp::FillPath { path, fill } => {
                assert_eq!(fill.color, HexColor::WHITE);
                assert_eq!(fill.opacity, defaults::TEXT_BG_OPACITY);
                // 8 chars at 0.6em advance, size 28 (14 * uniform scale 2).
                let expected_w = 8.0 * 28.0 * 0.6;
                assert_eq!(
                    path.elements(),
                    &[PathEl::Rect {
                        min: dvec2(10.0 - 2.0, 10.0 - 2.0),
                        max: dvec2(10.0 + (expected_w + 2.0), 10.0 + (28.0 + 2.0)),
                    }]
                );
            }
            other => panic!("expected backing rect, got {other:?}"),
        }
        match &surface.ops()[1] {
            DrawOp::FillText { origin, style, .. } => {
                assert_eq!(*origin, dvec2(10.0, 10.0));
                assert_eq!(style.size, 28.0);
                assert_eq!(style.align, TextAlign::Left);
                assert_eq!(style.baseline, TextBaseline::Top);
                assert!(!style.bold);
            }
            other => panic!("expected annotation text, got {other:?}"),
        }
    }

    #[test]
    fn selected_annotation_gets_highlight_beneath_backing() {
        let mut surface = RecordingSurface::new();
        draw_text_annotation(
            &mut surface,
            &annotation_at(0.0, 0.0),
            &TransformContext::IDENTITY,
            true,
        );

        assert_eq!(surface.ops().len(), 3);
        match &surface.ops()[0] {
            DrawOp::FillPath { fill, .. } => {
                assert_eq!(fill.color, defaults::SELECTION_COLOR);
                assert_eq!(fill.opacity, defaults::TEXT_HIGHLIGHT_OPACITY);
            }
            other => panic!("expected highlight, got {other:?}"),
        }
        match &surface.ops()[1] {
            DrawOp::FillPath { fill, .. } => assert_eq!(fill.color, HexColor::WHITE),
            other => panic!("expected backing, got {other:?}"),
        }
    }
}
