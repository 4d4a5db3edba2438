//! Structural validation of play and session documents.
//!
//! Validators accept untyped `serde_json::Value` input (the defensive
//! boundary for data arriving from storage or the network), never panic,
//! and never fail fast: every violation in a document is collected into one
//! [`ValidationReport`] so a caller can surface all problems in a single
//! pass. The same functions back client-side pre-save checks and
//! server-side pre-persist checks.

mod document;
mod session;

pub use document::{
    is_valid_drawing_element, is_valid_player_icon, is_valid_position, is_valid_text_annotation,
    validate_play_data, validate_play_data_json, MAX_ANNOTATIONS, MAX_DRAWINGS, MAX_ELEMENTS,
    MAX_PLAYERS, MAX_TEXT_LEN,
};
pub use session::{
    validate_play_durations, validate_practice_session_data, validate_session_duration,
    MAX_SESSION_MINUTES, MIN_SESSION_MINUTES,
};

use std::fmt;

use serde::Serialize;

/// Stable machine-readable code for one class of violation.
///
/// Serialized (and displayed) in SCREAMING_SNAKE_CASE; these strings are
/// part of the wire contract with stored-play tooling and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidDocument,
    InvalidPosition,
    MissingId,
    EmptyLabel,
    InvalidColor,
    InvalidElementType,
    TooFewPoints,
    InvalidStrokeWidth,
    EmptyText,
    TextTooLong,
    InvalidFontSize,
    MaxPlayersExceeded,
    MaxDrawingsExceeded,
    MaxAnnotationsExceeded,
    MaxElementsExceeded,
    MissingVersion,
    InvalidRinkDimensions,
    InvalidDuration,
    PlayDurationsExceedSession,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidDocument => "INVALID_DOCUMENT",
            ErrorCode::InvalidPosition => "INVALID_POSITION",
            ErrorCode::MissingId => "MISSING_ID",
            ErrorCode::EmptyLabel => "EMPTY_LABEL",
            ErrorCode::InvalidColor => "INVALID_COLOR",
            ErrorCode::InvalidElementType => "INVALID_ELEMENT_TYPE",
            ErrorCode::TooFewPoints => "TOO_FEW_POINTS",
            ErrorCode::InvalidStrokeWidth => "INVALID_STROKE_WIDTH",
            ErrorCode::EmptyText => "EMPTY_TEXT",
            ErrorCode::TextTooLong => "TEXT_TOO_LONG",
            ErrorCode::InvalidFontSize => "INVALID_FONT_SIZE",
            ErrorCode::MaxPlayersExceeded => "MAX_PLAYERS_EXCEEDED",
            ErrorCode::MaxDrawingsExceeded => "MAX_DRAWINGS_EXCEEDED",
            ErrorCode::MaxAnnotationsExceeded => "MAX_ANNOTATIONS_EXCEEDED",
            ErrorCode::MaxElementsExceeded => "MAX_ELEMENTS_EXCEEDED",
            ErrorCode::MissingVersion => "MISSING_VERSION",
            ErrorCode::InvalidRinkDimensions => "INVALID_RINK_DIMENSIONS",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::PlayDurationsExceedSession => "PLAY_DURATIONS_EXCEED_SESSION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violation: where it is, what is wrong, and a stable code for
/// programmatic handling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Path into the document, e.g. `players[3].color`
    pub field: String,
    /// Human-readable description
    pub message: String,
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ErrorCode) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// The outcome of a validation pass. Never an `Err`: failure is data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// A passing report.
    pub fn ok() -> Self {
        ValidationReport { valid: true, errors: Vec::new() }
    }

    /// Build a report from collected errors; `valid` reflects emptiness.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationReport { valid: errors.is_empty(), errors }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.valid = self.valid && other.valid;
        self.errors.extend(other.errors);
    }

    /// True if any collected error carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_wire_form_is_screaming_snake_case() {
        assert_eq!(ErrorCode::MaxPlayersExceeded.as_str(), "MAX_PLAYERS_EXCEEDED");
        assert_eq!(
            serde_json::to_string(&ErrorCode::MaxPlayersExceeded).unwrap(),
            "\"MAX_PLAYERS_EXCEEDED\""
        );
        assert_eq!(ErrorCode::TooFewPoints.to_string(), "TOO_FEW_POINTS");
    }

    #[test]
    fn report_validity_tracks_errors() {
        assert!(ValidationReport::ok().valid);
        assert!(ValidationReport::from_errors(Vec::new()).valid);

        let failing = ValidationReport::from_errors(vec![ValidationError::new(
            "players",
            "too many players",
            ErrorCode::MaxPlayersExceeded,
        )]);
        assert!(!failing.valid);
        assert!(failing.has_code(ErrorCode::MaxPlayersExceeded));
        assert!(!failing.has_code(ErrorCode::EmptyText));
    }

    #[test]
    fn merge_combines_errors_and_validity() {
        let mut report = ValidationReport::ok();
        report.merge(ValidationReport::ok());
        assert!(report.valid);

        report.merge(ValidationReport::from_errors(vec![ValidationError::new(
            "duration",
            "out of range",
            ErrorCode::InvalidDuration,
        )]));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn report_serializes_for_api_responses() {
        let report = ValidationReport::from_errors(vec![ValidationError::new(
            "players[0].color",
            "must be a #RRGGBB color",
            ErrorCode::InvalidColor,
        )]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], serde_json::json!(false));
        assert_eq!(json["errors"][0]["field"], serde_json::json!("players[0].color"));
        assert_eq!(json["errors"][0]["code"], serde_json::json!("INVALID_COLOR"));
    }
}
