//! Default sizes and settings for play rendering (canvas pixels unless noted)

use crate::types::{Feet, HexColor};

/// Player marker radius in rink feet; scaled by the uniform transform factor
/// at render time so markers stay circular.
pub const PLAYER_RADIUS: Feet = Feet::new(12.0);
pub const PLAYER_OUTLINE_WIDTH: f64 = 2.0;
/// Label font size as a fraction of the marker radius
pub const LABEL_FONT_RATIO: f64 = 0.9;

/// Selection gold, shared by rings, halos, and highlights
pub const SELECTION_COLOR: HexColor = HexColor::new(0xFF, 0xD7, 0x00);
pub const SELECTION_RING_OFFSET: f64 = 4.0;
pub const SELECTION_RING_WIDTH: f64 = 3.0;
/// Extra stroke width of the selection halo around line work
pub const HALO_EXTRA_WIDTH: f64 = 4.0;
pub const HALO_OPACITY: f64 = 0.5;

/// Arrowhead length floor in pixels
pub const ARROW_HEAD_MIN: f64 = 10.0;
/// Arrowhead length per pixel of stroke width
pub const ARROW_HEAD_PER_STROKE: f64 = 5.0;
/// Half-angle of the arrowhead triangle (30 degrees)
pub const ARROW_HEAD_HALF_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

pub const TEXT_BG_PADDING: f64 = 2.0;
pub const TEXT_BG_OPACITY: f64 = 0.8;
pub const TEXT_HIGHLIGHT_PADDING: f64 = 4.0;
pub const TEXT_HIGHLIGHT_OPACITY: f64 = 0.3;
