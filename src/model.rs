//! Typed document model for persisted plays.
//!
//! [`PlayDataJson`] is the durable envelope stored by the persistence layer.
//! Field names are camelCase on the wire for round-trip compatibility with
//! existing stored plays; the `version` tag is carried for forward
//! compatibility. Documents of unknown provenance should go through
//! [`parse_play_data_json`], which validates the raw JSON before committing
//! to the typed representation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Feet, HexColor, Px, RinkPoint};
use crate::validate::{validate_play_data_json, ValidationReport};

/// Schema version written into newly created documents.
pub const PLAY_DATA_VERSION: &str = "1.0";

/// One player marker on the rink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerIcon {
    pub id: String,
    pub position: RinkPoint,
    /// Jersey number or position code shown inside the marker, e.g. "C" or "91"
    pub label: String,
    pub color: HexColor,
}

/// How a drawing element's point list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Line,
    Curve,
    Arrow,
}

/// A polyline, smoothed curve, or arrow drawn on the rink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub points: Vec<RinkPoint>,
    pub color: HexColor,
    pub stroke_width: Px,
}

/// Free-form text placed on the rink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    pub id: String,
    pub text: String,
    pub position: RinkPoint,
    pub font_size: Px,
    pub color: HexColor,
}

/// The elements of one play, in no particular order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayData {
    pub players: Vec<PlayerIcon>,
    pub drawings: Vec<DrawingElement>,
    pub annotations: Vec<TextAnnotation>,
}

impl PlayData {
    /// Total element count across all three categories.
    pub fn element_count(&self) -> usize {
        self.players.len() + self.drawings.len() + self.annotations.len()
    }
}

/// Rink playing-surface size in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RinkDimensions {
    pub width: Feet,
    pub height: Feet,
}

impl RinkDimensions {
    /// NHL-regulation surface, 200 x 85 ft.
    pub const NHL: RinkDimensions = RinkDimensions {
        width: Feet::new(200.0),
        height: Feet::new(85.0),
    };
}

/// The persisted envelope: play elements plus rink sizing and schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDataJson {
    pub version: String,
    pub rink_dimensions: RinkDimensions,
    pub players: Vec<PlayerIcon>,
    pub drawings: Vec<DrawingElement>,
    pub annotations: Vec<TextAnnotation>,
}

impl PlayDataJson {
    /// Wrap play elements in a fresh envelope stamped with the current
    /// schema version.
    pub fn new(rink_dimensions: RinkDimensions, data: PlayData) -> Self {
        PlayDataJson {
            version: PLAY_DATA_VERSION.to_string(),
            rink_dimensions,
            players: data.players,
            drawings: data.drawings,
            annotations: data.annotations,
        }
    }

    /// Split the envelope back into rink metadata and play elements.
    pub fn into_play_data(self) -> (RinkDimensions, PlayData) {
        (
            self.rink_dimensions,
            PlayData {
                players: self.players,
                drawings: self.drawings,
                annotations: self.annotations,
            },
        )
    }
}

/// Failure to load a persisted play document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not JSON at all.
    #[error("play document is not valid JSON")]
    Json(#[from] serde_json::Error),
    /// The JSON parsed but violates the document schema.
    #[error("play document failed validation with {} error(s)", .0.errors.len())]
    Invalid(ValidationReport),
}

/// Parse and validate a persisted play document.
///
/// Validation runs on the raw JSON value first, so a malformed document
/// yields the full structured error list rather than whichever field serde
/// happens to reject first.
pub fn parse_play_data_json(source: &str) -> Result<PlayDataJson, DocumentError> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let report = validate_play_data_json(&value);
    if !report.valid {
        return Err(DocumentError::Invalid(report));
    }
    Ok(serde_json::from_value(value)?)
}
