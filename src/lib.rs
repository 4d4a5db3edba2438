//! puckboard: the drawing engine behind the hockey practice planner.
//!
//! Converts rink-relative coordinates (feet) to canvas pixels, renders
//! players, line work, and text annotations in a fixed z-order through an
//! injected [`Surface`] capability, and validates the persisted play
//! document schema with collect-everything, never-throw semantics.
//!
//! The host UI owns the real canvas; this crate never touches a graphics
//! backend. [`RecordingSurface`] stands in for one in tests.
//!
//! ## Example
//!
//! ```
//! use puckboard::{
//!     draw_all_elements, validate_play_data_json, PlayData, PlayDataJson, PlayerIcon,
//!     RecordingSurface, RinkDimensions, TransformContext,
//! };
//! use puckboard::types::{Feet, Point, Px};
//!
//! let play = PlayData {
//!     players: vec![PlayerIcon {
//!         id: "p1".into(),
//!         position: Point::new(Feet(30.0), Feet(40.0)),
//!         label: "C".into(),
//!         color: "#003A70".parse().unwrap(),
//!     }],
//!     drawings: vec![],
//!     annotations: vec![],
//! };
//!
//! // Persist: wrap in the versioned envelope and check it before saving.
//! let doc = PlayDataJson::new(RinkDimensions::NHL, play);
//! let value = serde_json::to_value(&doc).unwrap();
//! assert!(validate_play_data_json(&value).valid);
//!
//! // Render: fit an NHL rink into an 800x340 canvas and draw.
//! let transform = TransformContext::fit(Feet(200.0), Feet(85.0), Px(800.0), Px(340.0)).unwrap();
//! let mut surface = RecordingSurface::new();
//! draw_all_elements(&mut surface, &doc.players, &doc.drawings, &doc.annotations, &transform, None);
//! assert_eq!(surface.ops().len(), 3); // marker fill + outline + label
//! ```

pub mod log;
pub mod model;
pub mod render;
pub mod surface;
pub mod transform;
pub mod types;
pub mod validate;

pub use model::{
    parse_play_data_json, DocumentError, DrawingElement, ElementKind, PlayData, PlayDataJson,
    PlayerIcon, RinkDimensions, TextAnnotation, PLAY_DATA_VERSION,
};
pub use render::{
    draw_all_elements, draw_arrow, draw_curve, draw_element, draw_line, draw_player_icon,
    draw_text_annotation,
};
pub use surface::{
    DrawOp, Fill, Path, PathEl, RecordingSurface, Stroke, Surface, TextMetrics, TextStyle,
};
pub use transform::TransformContext;
pub use types::{CanvasPoint, Feet, HexColor, NumericError, Point, Px, RinkPoint};
pub use validate::{
    validate_play_data, validate_play_data_json, validate_play_durations,
    validate_practice_session_data, validate_session_duration, ErrorCode, ValidationError,
    ValidationReport,
};
