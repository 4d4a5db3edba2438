//! Rink-to-canvas coordinate transform.
//!
//! A [`TransformContext`] captures how rink-relative feet map to canvas
//! pixels for one render pass. It is recomputed whenever the viewport or
//! zoom changes and is never persisted.

use crate::types::{CanvasPoint, Feet, NumericError, Point, Px, RinkPoint};

/// Scale and offset mapping rink feet to canvas pixels.
///
/// The mapping is linear and invertible (see [`canvas_to_rink`]):
/// `canvas.x = rink.x * scale_x + offset_x`, same for y. Negative scales are
/// legal and flip an axis (canvas y grows downward, rink y grows toward the
/// far blue line).
///
/// [`canvas_to_rink`]: TransformContext::canvas_to_rink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    /// Pixels per foot along x
    pub scale_x: f64,
    /// Pixels per foot along y
    pub scale_y: f64,
    /// Canvas x of the rink origin, in pixels
    pub offset_x: f64,
    /// Canvas y of the rink origin, in pixels
    pub offset_y: f64,
}

impl TransformContext {
    /// Identity transform: one pixel per foot, origin at the canvas origin.
    pub const IDENTITY: TransformContext = TransformContext::new(1.0, 1.0, 0.0, 0.0);

    /// Create a transform (unchecked). Use `try_new` for user-provided values.
    pub const fn new(scale_x: f64, scale_y: f64, offset_x: f64, offset_y: f64) -> Self {
        TransformContext { scale_x, scale_y, offset_x, offset_y }
    }

    /// Create a transform with validation: scales must be finite and
    /// non-zero (zero would make the transform non-invertible), offsets
    /// must be finite.
    pub fn try_new(
        scale_x: f64,
        scale_y: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<Self, NumericError> {
        for v in [scale_x, scale_y, offset_x, offset_y] {
            if v.is_nan() {
                return Err(NumericError::NaN);
            }
            if v.is_infinite() {
                return Err(NumericError::Infinite);
            }
        }
        if scale_x == 0.0 || scale_y == 0.0 {
            return Err(NumericError::Zero);
        }
        Ok(TransformContext { scale_x, scale_y, offset_x, offset_y })
    }

    /// Compute the uniform, centered transform that fits a whole rink of
    /// `rink_width` x `rink_height` feet into a canvas of `canvas_width` x
    /// `canvas_height` pixels. Returns `None` when either rink dimension is
    /// not a positive finite number.
    pub fn fit(
        rink_width: Feet,
        rink_height: Feet,
        canvas_width: Px,
        canvas_height: Px,
    ) -> Option<Self> {
        if !(rink_width.raw() > 0.0 && rink_width.is_finite())
            || !(rink_height.raw() > 0.0 && rink_height.is_finite())
        {
            return None;
        }
        let scale = (canvas_width.raw() / rink_width.raw())
            .min(canvas_height.raw() / rink_height.raw());
        let offset_x = (canvas_width.raw() - rink_width.raw() * scale) / 2.0;
        let offset_y = (canvas_height.raw() - rink_height.raw() * scale) / 2.0;
        Some(TransformContext::new(scale, scale, offset_x, offset_y))
    }

    /// Convert a rink-relative point (feet) to canvas pixels.
    ///
    /// Pure and total: every finite input maps to a point. Callers are
    /// responsible for supplying a sane transform.
    #[inline]
    pub fn rink_to_canvas(&self, p: RinkPoint) -> CanvasPoint {
        Point {
            x: Px(p.x.raw() * self.scale_x + self.offset_x),
            y: Px(p.y.raw() * self.scale_y + self.offset_y),
        }
    }

    /// Invert the transform: canvas pixels back to rink feet.
    ///
    /// Returns `None` when a scale factor is zero (the forward mapping
    /// collapsed an axis). Used for hit testing.
    #[inline]
    pub fn canvas_to_rink(&self, p: CanvasPoint) -> Option<RinkPoint> {
        if self.scale_x == 0.0 || self.scale_y == 0.0 {
            return None;
        }
        Some(Point {
            x: Feet((p.x.raw() - self.offset_x) / self.scale_x),
            y: Feet((p.y.raw() - self.offset_y) / self.scale_y),
        })
    }

    /// The uniform scale factor, `min(|scale_x|, |scale_y|)`.
    ///
    /// Round glyphs (player icons) are sized by this so they stay circular
    /// under anisotropic transforms.
    #[inline]
    pub fn uniform_scale(&self) -> f64 {
        self.scale_x.abs().min(self.scale_y.abs())
    }
}

impl Default for TransformContext {
    fn default() -> Self {
        Self::IDENTITY
    }
}
