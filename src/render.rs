//! Play rendering: drawing primitives plus the composite z-order pass.

pub mod defaults;
mod markers;
mod paths;

pub use markers::{draw_player_icon, draw_text_annotation};
pub use paths::{draw_arrow, draw_curve, draw_element, draw_line};

use crate::model::{DrawingElement, PlayerIcon, TextAnnotation};
use crate::surface::Surface;
use crate::transform::TransformContext;

/// Render a full play in the fixed z-order: drawings on the bottom, player
/// markers above them, text annotations on top. The ordering is a hard
/// invariant so annotations stay legible over everything else.
///
/// `selected_id` names at most one element across all three collections;
/// the matching element (and only it) is rendered with its selection
/// treatment.
pub fn draw_all_elements<S: Surface + ?Sized>(
    surface: &mut S,
    players: &[PlayerIcon],
    drawings: &[DrawingElement],
    annotations: &[TextAnnotation],
    transform: &TransformContext,
    selected_id: Option<&str>,
) {
    crate::log::debug!(
        players = players.len(),
        drawings = drawings.len(),
        annotations = annotations.len(),
        selected = selected_id.is_some(),
        "rendering play"
    );

    let selected = |id: &str| selected_id == Some(id);

    for drawing in drawings {
        paths::draw_element(surface, drawing, transform, selected(&drawing.id));
    }
    for player in players {
        markers::draw_player_icon(surface, player, transform, selected(&player.id));
    }
    for annotation in annotations {
        markers::draw_text_annotation(surface, annotation, transform, selected(&annotation.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use crate::surface::{DrawOp, RecordingSurface};
    use crate::types::{Feet, HexColor, Point, Px, RinkPoint};

    fn rp(x: f64, y: f64) -> RinkPoint {
        Point::new(Feet(x), Feet(y))
    }

    fn player(id: &str) -> PlayerIcon {
        PlayerIcon {
            id: id.to_string(),
            position: rp(30.0, 40.0),
            label: "C".to_string(),
            color: HexColor::new(0x00, 0x3A, 0x70),
        }
    }

    fn drawing(id: &str) -> DrawingElement {
        DrawingElement {
            id: id.to_string(),
            kind: ElementKind::Line,
            points: vec![rp(0.0, 0.0), rp(50.0, 20.0)],
            color: HexColor::new(0xFF, 0x00, 0x00),
            stroke_width: Px(2.0),
        }
    }

    fn annotation(id: &str) -> TextAnnotation {
        TextAnnotation {
            id: id.to_string(),
            text: "dump and chase".to_string(),
            position: rp(60.0, 10.0),
            font_size: Px(14.0),
            color: HexColor::BLACK,
        }
    }

    // Classify each op by which layer emitted it, given one element per
    // layer: a line is one stroke, a player is fill+stroke+text, an
    // annotation is fill+text.
    #[test]
    fn z_order_is_drawings_then_players_then_annotations() {
        let mut surface = RecordingSurface::new();
        draw_all_elements(
            &mut surface,
            &[player("p1")],
            &[drawing("d1")],
            &[annotation("a1")],
            &TransformContext::IDENTITY,
            None,
        );

        let ops = surface.ops();
        assert_eq!(ops.len(), 6);
        // drawing
        assert!(matches!(ops[0], DrawOp::StrokePath { .. }));
        // player body fill, outline, label
        assert!(matches!(ops[1], DrawOp::FillPath { .. }));
        assert!(matches!(ops[2], DrawOp::StrokePath { .. }));
        assert!(matches!(&ops[3], DrawOp::FillText { text, .. } if text == "C"));
        // annotation backing and text
        assert!(matches!(ops[4], DrawOp::FillPath { .. }));
        assert!(matches!(&ops[5], DrawOp::FillText { text, .. } if text == "dump and chase"));
    }

    #[test]
    fn selection_applies_to_exactly_one_element() {
        let mut surface = RecordingSurface::new();
        draw_all_elements(
            &mut surface,
            &[player("p1"), player("p2")],
            &[drawing("d1"), drawing("d2")],
            &[annotation("a1")],
            &TransformContext::IDENTITY,
            Some("d2"),
        );

        // Gold-colored ops: exactly one halo stroke, attached to d2 (the
        // second drawing, so ops order is d1 stroke, then d2 halo + stroke).
        let gold = crate::render::defaults::SELECTION_COLOR;
        let gold_ops: Vec<usize> = surface
            .ops()
            .iter()
            .enumerate()
            .filter(|(_, op)| match op {
                DrawOp::StrokePath { stroke, .. } => stroke.color == gold,
                DrawOp::FillPath { fill, .. } => fill.color == gold,
                DrawOp::FillText { .. } => false,
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(gold_ops, vec![1]);
    }

    #[test]
    fn selection_id_missing_from_play_highlights_nothing() {
        let mut surface = RecordingSurface::new();
        draw_all_elements(
            &mut surface,
            &[player("p1")],
            &[drawing("d1")],
            &[],
            &TransformContext::IDENTITY,
            Some("ghost"),
        );

        let gold = crate::render::defaults::SELECTION_COLOR;
        assert!(surface.ops().iter().all(|op| match op {
            DrawOp::StrokePath { stroke, .. } => stroke.color != gold,
            DrawOp::FillPath { fill, .. } => fill.color != gold,
            DrawOp::FillText { .. } => true,
        }));
    }

    #[test]
    fn empty_play_renders_nothing() {
        let mut surface = RecordingSurface::new();
        draw_all_elements(&mut surface, &[], &[], &[], &TransformContext::IDENTITY, None);
        assert!(surface.is_empty());
    }
}
