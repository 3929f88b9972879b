//! Engine-wide default constants.
//!
//! These are the defaults used when no configuration overrides them.

/// Radius (diagram units) within which a click toggles off an existing marker.
pub const PROXIMITY_RADIUS: f64 = 10.0;

/// Minimum zoom scale.
pub const ZOOM_MIN: f64 = 0.5;

/// Maximum zoom scale.
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom multiplier applied on scroll-up.
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom multiplier applied on scroll-down.
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;

/// Hold duration (milliseconds) after which a tool button opens its palette.
pub const LONG_PRESS_MS: u64 = 500;

/// Degrees of incisor rotation per diagram unit of horizontal pointer travel.
pub const ROTATE_DEGREES_PER_UNIT: f64 = 0.5;

/// Stroke width of the invisible region hit area.
pub const HIT_AREA_STROKE_WIDTH: f64 = 10.0;

/// Color used when a tool has no color of its own.
pub const DEFAULT_COLOR: &str = "#000000";

/// Diagram file names, ordered left, center, right.
pub const DEFAULT_DIAGRAM_FILES: [&str; 3] = [
    "odontogram_left.svg",
    "odontogram_center.svg",
    "odontogram_right.svg",
];
