//! The drawing surface abstraction.
//!
//! Renderers never talk to a real graphics backend. They emit paths, fills,
//! and text through the [`Surface`] trait, and the host UI supplies the
//! implementation backed by its canvas. [`RecordingSurface`] is the
//! in-process implementation used by this crate's tests (and useful to
//! downstream callers for the same purpose): it records every draw call in
//! order so ordering and styling invariants can be asserted without a
//! graphics stack.

use glam::DVec2;

use crate::types::HexColor;

/// One element of a canvas path.
///
/// `Circle` and `Rect` mirror the Canvas2D `arc()`/`rect()` path commands:
/// backends that only understand move/line/curve can lower them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEl {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    Circle { center: DVec2, radius: f64 },
    Rect { min: DVec2, max: DVec2 },
    Close,
}

/// An ordered list of path elements in canvas pixel space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    els: Vec<PathEl>,
}

impl Path {
    pub fn new() -> Self {
        Path { els: Vec::new() }
    }

    pub fn move_to(&mut self, p: DVec2) {
        self.els.push(PathEl::MoveTo(p));
    }

    pub fn line_to(&mut self, p: DVec2) {
        self.els.push(PathEl::LineTo(p));
    }

    pub fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.els.push(PathEl::QuadTo { ctrl, to });
    }

    pub fn close(&mut self) {
        self.els.push(PathEl::Close);
    }

    /// A polyline through `points` (first point is the move-to).
    pub fn polyline(points: &[DVec2]) -> Self {
        let mut path = Path::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
        }
        path
    }

    /// A full circle.
    pub fn circle(center: DVec2, radius: f64) -> Self {
        Path { els: vec![PathEl::Circle { center, radius }] }
    }

    /// An axis-aligned rectangle.
    pub fn rect(min: DVec2, max: DVec2) -> Self {
        Path { els: vec![PathEl::Rect { min, max }] }
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// The destination of the last drawing element, if any.
    pub fn end_point(&self) -> Option<DVec2> {
        self.els.iter().rev().find_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            PathEl::QuadTo { to, .. } => Some(to),
            PathEl::Circle { .. } | PathEl::Rect { .. } | PathEl::Close => None,
        })
    }
}

/// Stroke line-cap shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Stroke line-join shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Stroke styling for a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: HexColor,
    /// Line width in pixels
    pub width: f64,
    /// 0.0 transparent .. 1.0 opaque
    pub opacity: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Stroke {
    /// An opaque stroke with round caps and joins.
    pub fn solid(color: HexColor, width: f64) -> Self {
        Stroke {
            color,
            width,
            opacity: 1.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Fill styling for a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: HexColor,
    /// 0.0 transparent .. 1.0 opaque
    pub opacity: f64,
}

impl Fill {
    pub fn opaque(color: HexColor) -> Self {
        Fill { color, opacity: 1.0 }
    }

    pub fn translucent(color: HexColor, opacity: f64) -> Self {
        Fill { color, opacity }
    }
}

/// Horizontal anchoring of drawn text relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Vertical anchoring of drawn text relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
}

/// Text styling for `fill_text`/`measure_text`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f64,
    pub bold: bool,
    pub color: HexColor,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Measured extent of a piece of text at a given style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// The capability a renderer needs from the host canvas.
///
/// A surface is exclusively borrowed for the duration of one render call;
/// implementations do not need interior synchronization.
pub trait Surface {
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
    fn fill_path(&mut self, path: &Path, fill: &Fill);
    fn fill_text(&mut self, text: &str, origin: DVec2, style: &TextStyle);
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    StrokePath { path: Path, stroke: Stroke },
    FillPath { path: Path, fill: Fill },
    FillText { text: String, origin: DVec2, style: TextStyle },
}

/// A [`Surface`] that records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

// Advance width per character as a fraction of the font size. A fixed
// approximation is enough for layout-shaped assertions; real measurement
// belongs to the host canvas.
const APPROX_ADVANCE: f64 = 0.6;

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All draw calls, in issue order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokePath { path: path.clone(), stroke: stroke.clone() });
    }

    fn fill_path(&mut self, path: &Path, fill: &Fill) {
        self.ops.push(DrawOp::FillPath { path: path.clone(), fill: fill.clone() });
    }

    fn fill_text(&mut self, text: &str, origin: DVec2, style: &TextStyle) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * style.size * APPROX_ADVANCE,
            height: style.size,
        }
    }
}
