//! Practice-session consistency checks.
//!
//! These sit one level above per-play structure: a session's total duration
//! must be sane, and the plays scheduled into it must fit.

use serde_json::Value;

use super::{ErrorCode, ValidationError, ValidationReport};

/// Shortest allowed session, in minutes.
pub const MIN_SESSION_MINUTES: f64 = 1.0;
/// Longest allowed session, in minutes (five hours of ice time).
pub const MAX_SESSION_MINUTES: f64 = 300.0;

/// Check that a session duration lies within `[1, 300]` minutes.
pub fn validate_session_duration(minutes: f64) -> ValidationReport {
    let mut errors = Vec::new();
    if !minutes.is_finite() || !(MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&minutes) {
        errors.push(ValidationError::new(
            "duration",
            format!(
                "must be between {MIN_SESSION_MINUTES} and {MAX_SESSION_MINUTES} minutes"
            ),
            ErrorCode::InvalidDuration,
        ));
    }
    ValidationReport::from_errors(errors)
}

/// Check every play's duration and that their sum fits inside the session.
///
/// `plays` is the untyped `plays` array of a session document; each entry
/// must carry a positive numeric `duration`. Entries with an invalid
/// duration are reported individually and excluded from the sum.
pub fn validate_play_durations(plays: &Value, session_minutes: f64) -> ValidationReport {
    let mut errors = Vec::new();

    let Some(items) = plays.as_array() else {
        errors.push(ValidationError::new(
            "plays",
            "must be an array",
            ErrorCode::InvalidDocument,
        ));
        return ValidationReport::from_errors(errors);
    };

    let mut total = 0.0;
    for (i, play) in items.iter().enumerate() {
        match play.get("duration").and_then(Value::as_f64) {
            Some(minutes) if minutes.is_finite() && minutes > 0.0 => total += minutes,
            _ => {
                errors.push(ValidationError::new(
                    format!("plays[{i}].duration"),
                    "must be a positive number of minutes",
                    ErrorCode::InvalidDuration,
                ));
            }
        }
    }

    if total > session_minutes {
        errors.push(ValidationError::new(
            "plays",
            format!(
                "play durations total {total} minutes, exceeding the session's {session_minutes}"
            ),
            ErrorCode::PlayDurationsExceedSession,
        ));
    }

    ValidationReport::from_errors(errors)
}

/// Validate a practice-session document: `{duration, plays: [{duration, ..}]}`.
///
/// Composes [`validate_session_duration`] and [`validate_play_durations`];
/// when the session duration itself is not numeric, per-play durations are
/// still checked but the sum comparison is skipped.
pub fn validate_practice_session_data(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::ok();

    if !value.is_object() {
        return ValidationReport::from_errors(vec![ValidationError::new(
            "",
            "practice session must be a JSON object",
            ErrorCode::InvalidDocument,
        )]);
    }

    let plays = value.get("plays").unwrap_or(&Value::Null);
    match value.get("duration").and_then(Value::as_f64) {
        Some(minutes) => {
            report.merge(validate_session_duration(minutes));
            report.merge(validate_play_durations(plays, minutes));
        }
        None => {
            report.merge(ValidationReport::from_errors(vec![ValidationError::new(
                "duration",
                "must be a number of minutes",
                ErrorCode::InvalidDuration,
            )]));
            report.merge(validate_play_durations(plays, f64::INFINITY));
        }
    }

    report
}
