//! Per-element and whole-document validation of play data.

use serde_json::Value;

use crate::types::HexColor;

use super::{ErrorCode, ValidationError, ValidationReport};

/// Per-category and aggregate element caps. The combined cap is stricter
/// than the sum of the category caps.
pub const MAX_PLAYERS: usize = 50;
pub const MAX_DRAWINGS: usize = 100;
pub const MAX_ANNOTATIONS: usize = 20;
pub const MAX_ELEMENTS: usize = 100;
/// Longest allowed annotation text, in characters.
pub const MAX_TEXT_LEN: usize = 500;

fn finite_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite())
}

fn non_empty_string(v: Option<&Value>) -> Option<&str> {
    v.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn position_errors(v: &Value, field: &str, out: &mut Vec<ValidationError>) {
    let ok = v.get("x").is_some_and(|x| finite_number(x).is_some())
        && v.get("y").is_some_and(|y| finite_number(y).is_some());
    if !ok {
        out.push(ValidationError::new(
            field,
            "must be a point with numeric x and y",
            ErrorCode::InvalidPosition,
        ));
    }
}

fn id_errors(v: &Value, field: &str, out: &mut Vec<ValidationError>) {
    if non_empty_string(v.get("id")).is_none() {
        out.push(ValidationError::new(
            format!("{field}.id"),
            "must be a non-empty string",
            ErrorCode::MissingId,
        ));
    }
}

fn color_errors(v: &Value, field: &str, out: &mut Vec<ValidationError>) {
    let ok = v
        .get("color")
        .and_then(Value::as_str)
        .is_some_and(HexColor::is_valid_str);
    if !ok {
        out.push(ValidationError::new(
            format!("{field}.color"),
            "must be a #RRGGBB color",
            ErrorCode::InvalidColor,
        ));
    }
}

fn player_errors(v: &Value, field: &str, out: &mut Vec<ValidationError>) {
    id_errors(v, field, out);
    position_errors(
        v.get("position").unwrap_or(&Value::Null),
        &format!("{field}.position"),
        out,
    );
    let label_ok = v
        .get("label")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !label_ok {
        out.push(ValidationError::new(
            format!("{field}.label"),
            "must be a non-empty label",
            ErrorCode::EmptyLabel,
        ));
    }
    color_errors(v, field, out);
}

fn drawing_errors(v: &Value, field: &str, out: &mut Vec<ValidationError>) {
    id_errors(v, field, out);

    let kind_ok = matches!(
        v.get("type").and_then(Value::as_str),
        Some("line" | "curve" | "arrow")
    );
    if !kind_ok {
        out.push(ValidationError::new(
            format!("{field}.type"),
            "must be one of line, curve, arrow",
            ErrorCode::InvalidElementType,
        ));
    }

    match v.get("points").and_then(Value::as_array) {
        Some(points) if points.len() >= 2 => {
            for (i, point) in points.iter().enumerate() {
                position_errors(point, &format!("{field}.points[{i}]"), out);
            }
        }
        _ => {
            out.push(ValidationError::new(
                format!("{field}.points"),
                "must be an array of at least 2 points",
                ErrorCode::TooFewPoints,
            ));
        }
    }

    color_errors(v, field, out);

    let width_ok = v
        .get("strokeWidth")
        .is_some_and(|w| finite_number(w).is_some_and(|n| n > 0.0));
    if !width_ok {
        out.push(ValidationError::new(
            format!("{field}.strokeWidth"),
            "must be a positive number",
            ErrorCode::InvalidStrokeWidth,
        ));
    }
}

fn annotation_errors(v: &Value, field: &str, out: &mut Vec<ValidationError>) {
    id_errors(v, field, out);

    match v.get("text").and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => {
            if text.chars().count() > MAX_TEXT_LEN {
                out.push(ValidationError::new(
                    format!("{field}.text"),
                    format!("must be at most {MAX_TEXT_LEN} characters"),
                    ErrorCode::TextTooLong,
                ));
            }
        }
        _ => {
            out.push(ValidationError::new(
                format!("{field}.text"),
                "must be non-empty text",
                ErrorCode::EmptyText,
            ));
        }
    }

    position_errors(
        v.get("position").unwrap_or(&Value::Null),
        &format!("{field}.position"),
        out,
    );

    let size_ok = v
        .get("fontSize")
        .is_some_and(|s| finite_number(s).is_some_and(|n| n > 0.0));
    if !size_ok {
        out.push(ValidationError::new(
            format!("{field}.fontSize"),
            "must be a positive number",
            ErrorCode::InvalidFontSize,
        ));
    }

    color_errors(v, field, out);
}

/// True if `value` is a well-formed position.
pub fn is_valid_position(value: &Value) -> bool {
    let mut errors = Vec::new();
    position_errors(value, "position", &mut errors);
    errors.is_empty()
}

/// True if `value` is a well-formed player icon.
pub fn is_valid_player_icon(value: &Value) -> bool {
    let mut errors = Vec::new();
    player_errors(value, "player", &mut errors);
    errors.is_empty()
}

/// True if `value` is a well-formed drawing element.
pub fn is_valid_drawing_element(value: &Value) -> bool {
    let mut errors = Vec::new();
    drawing_errors(value, "drawing", &mut errors);
    errors.is_empty()
}

/// True if `value` is a well-formed text annotation.
pub fn is_valid_text_annotation(value: &Value) -> bool {
    let mut errors = Vec::new();
    annotation_errors(value, "annotation", &mut errors);
    errors.is_empty()
}

/// The three element arrays of a play. Returns an empty slice (plus an
/// error) when the category is missing or not an array, so per-element
/// validation of the other categories still runs.
fn category<'a>(
    value: &'a Value,
    name: &str,
    out: &mut Vec<ValidationError>,
) -> &'a [Value] {
    match value.get(name).and_then(Value::as_array) {
        Some(items) => items,
        None => {
            out.push(ValidationError::new(
                name,
                "must be an array",
                ErrorCode::InvalidDocument,
            ));
            &[]
        }
    }
}

/// Validate the element arrays of a play: per-element structure, per-category
/// caps, and the combined element cap. All violations are collected.
pub fn validate_play_data(value: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    if !value.is_object() {
        errors.push(ValidationError::new(
            "",
            "play data must be a JSON object",
            ErrorCode::InvalidDocument,
        ));
        return ValidationReport::from_errors(errors);
    }

    let players = category(value, "players", &mut errors);
    let drawings = category(value, "drawings", &mut errors);
    let annotations = category(value, "annotations", &mut errors);

    for (i, player) in players.iter().enumerate() {
        player_errors(player, &format!("players[{i}]"), &mut errors);
    }
    for (i, drawing) in drawings.iter().enumerate() {
        drawing_errors(drawing, &format!("drawings[{i}]"), &mut errors);
    }
    for (i, annotation) in annotations.iter().enumerate() {
        annotation_errors(annotation, &format!("annotations[{i}]"), &mut errors);
    }

    if players.len() > MAX_PLAYERS {
        errors.push(ValidationError::new(
            "players",
            format!("a play may have at most {MAX_PLAYERS} players"),
            ErrorCode::MaxPlayersExceeded,
        ));
    }
    if drawings.len() > MAX_DRAWINGS {
        errors.push(ValidationError::new(
            "drawings",
            format!("a play may have at most {MAX_DRAWINGS} drawings"),
            ErrorCode::MaxDrawingsExceeded,
        ));
    }
    if annotations.len() > MAX_ANNOTATIONS {
        errors.push(ValidationError::new(
            "annotations",
            format!("a play may have at most {MAX_ANNOTATIONS} annotations"),
            ErrorCode::MaxAnnotationsExceeded,
        ));
    }

    let total = players.len() + drawings.len() + annotations.len();
    if total > MAX_ELEMENTS {
        errors.push(ValidationError::new(
            "",
            format!("a play may have at most {MAX_ELEMENTS} elements in total, found {total}"),
            ErrorCode::MaxElementsExceeded,
        ));
    }

    ValidationReport::from_errors(errors)
}

/// Validate a persisted envelope: schema version and rink dimensions, then
/// the play data itself. Error lists are concatenated.
pub fn validate_play_data_json(value: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    if !value.is_object() {
        errors.push(ValidationError::new(
            "",
            "play document must be a JSON object",
            ErrorCode::InvalidDocument,
        ));
        return ValidationReport::from_errors(errors);
    }

    if non_empty_string(value.get("version")).is_none() {
        errors.push(ValidationError::new(
            "version",
            "must be a non-empty string",
            ErrorCode::MissingVersion,
        ));
    }

    let dims = value.get("rinkDimensions").unwrap_or(&Value::Null);
    let dims_ok = ["width", "height"].iter().all(|side| {
        dims.get(side)
            .is_some_and(|v| finite_number(v).is_some_and(|n| n > 0.0))
    });
    if !dims_ok {
        errors.push(ValidationError::new(
            "rinkDimensions",
            "must have positive width and height",
            ErrorCode::InvalidRinkDimensions,
        ));
    }

    let mut report = ValidationReport::from_errors(errors);
    report.merge(validate_play_data(value));

    crate::log::debug!(
        valid = report.valid,
        errors = report.errors.len(),
        "validated play document"
    );
    report
}
