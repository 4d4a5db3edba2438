//! Strongly-typed numeric primitives for puckboard (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` in domain logic
//! - Rink-relative and canvas coordinates can never be mixed up
//! - Conversions only via `TransformContext`

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is zero when non-zero required
    #[error("value is zero")]
    Zero,
}

/// Length in feet on the playing surface (rink canonical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Feet(pub f64);

impl Feet {
    pub const ZERO: Feet = Feet(0.0);

    /// Create a Feet value (const-friendly, unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn new(val: f64) -> Feet {
        Feet(val)
    }

    /// Create a Feet value with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Feet, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Feet(val))
        }
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Feet {
        Feet(self.0.abs())
    }

    /// Get the minimum of two lengths
    #[inline]
    pub fn min(self, other: Feet) -> Feet {
        Feet(self.0.min(other.0))
    }

    /// Get the maximum of two lengths
    #[inline]
    pub fn max(self, other: Feet) -> Feet {
        Feet(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Check if this length is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Feet {
    type Output = Feet;
    fn add(self, rhs: Feet) -> Feet { Feet(self.0 + rhs.0) }
}
impl Sub for Feet {
    type Output = Feet;
    fn sub(self, rhs: Feet) -> Feet { Feet(self.0 - rhs.0) }
}
impl Mul<f64> for Feet {
    type Output = Feet;
    fn mul(self, rhs: f64) -> Feet { Feet(self.0 * rhs) }
}
impl Div<f64> for Feet {
    type Output = Feet;
    fn div(self, rhs: f64) -> Feet { Feet(self.0 / rhs) }
}
impl Neg for Feet {
    type Output = Feet;
    fn neg(self) -> Feet { Feet(-self.0) }
}

impl AddAssign for Feet {
    fn add_assign(&mut self, rhs: Feet) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Feet {
    fn sub_assign(&mut self, rhs: Feet) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pixels on the canvas after applying a transform
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a Px value (const-friendly, unchecked).
    #[inline]
    pub const fn new(val: f64) -> Px {
        Px(val)
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Check if finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px { Px(self.0 + rhs.0) }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px { Px(self.0 - rhs.0) }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px { Px(self.0 * rhs) }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

impl Point<Feet> {
    /// Both coordinates are finite (not NaN, not infinite)
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Point<Px> {
    /// View this canvas point as a glam vector for geometry math
    pub fn to_vec2(self) -> glam::DVec2 {
        glam::dvec2(self.x.0, self.y.0)
    }

    /// Build a canvas point from a glam vector
    pub fn from_vec2(v: glam::DVec2) -> Self {
        Point { x: Px(v.x), y: Px(v.y) }
    }
}

/// A point in rink-relative feet, independent of zoom/pan
pub type RinkPoint = Point<Feet>;
/// A point in on-screen pixels after applying the current transform
pub type CanvasPoint = Point<Px>;

/// Error parsing a `#RRGGBB` color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}: expected \"#RRGGBB\"")]
pub struct ColorParseError(pub String);

/// An sRGB color in `#RRGGBB` form.
///
/// The wire format is exactly the 7-character hex string the drawing
/// documents store; named CSS colors are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> HexColor {
        HexColor { r, g, b }
    }

    /// True if `s` is a well-formed `#RRGGBB` string.
    pub fn is_valid_str(s: &str) -> bool {
        s.parse::<HexColor>().is_ok()
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        let parse = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(HexColor {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
