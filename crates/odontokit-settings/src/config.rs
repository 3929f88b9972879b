//! Configuration and settings management for Odontokit
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (proximity radius, zoom bounds, gesture thresholds)
//! - Diagram settings (where each view's vector source lives)

use odontokit_core::constants;
use odontokit_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Interaction settings for the odontogram editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Radius (diagram units) for toggle-by-proximity marker removal
    pub proximity_radius: f64,
    /// Lower zoom clamp
    pub zoom_min: f64,
    /// Upper zoom clamp
    pub zoom_max: f64,
    /// Zoom multiplier on scroll-up
    pub wheel_zoom_in_factor: f64,
    /// Zoom multiplier on scroll-down
    pub wheel_zoom_out_factor: f64,
    /// Hold time before a tool button opens its palette
    pub long_press_ms: u64,
    /// Incisor rotation per diagram unit of horizontal drag
    pub rotate_degrees_per_unit: f64,
    /// Stroke width of the invisible region hit area
    pub hit_area_stroke_width: f64,
    /// Color used by tools without a configured color
    pub default_color: Color,
    /// Minimum distance between recorded freehand points (0 records every move)
    pub freehand_min_segment: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            proximity_radius: constants::PROXIMITY_RADIUS,
            zoom_min: constants::ZOOM_MIN,
            zoom_max: constants::ZOOM_MAX,
            wheel_zoom_in_factor: constants::WHEEL_ZOOM_IN_FACTOR,
            wheel_zoom_out_factor: constants::WHEEL_ZOOM_OUT_FACTOR,
            long_press_ms: constants::LONG_PRESS_MS,
            rotate_degrees_per_unit: constants::ROTATE_DEGREES_PER_UNIT,
            hit_area_stroke_width: constants::HIT_AREA_STROKE_WIDTH,
            default_color: Color::black(),
            freehand_min_segment: 0.0,
        }
    }
}

/// Locations of the three diagram sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramSettings {
    /// Directory containing the diagram files
    pub directory: PathBuf,
    /// File name of the left view
    pub left: String,
    /// File name of the center view
    pub center: String,
    /// File name of the right view
    pub right: String,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        let [left, center, right] = constants::DEFAULT_DIAGRAM_FILES;
        Self {
            directory: PathBuf::from("assets/diagrams"),
            left: left.to_string(),
            center: center.to_string(),
            right: right.to_string(),
        }
    }
}

impl DiagramSettings {
    /// File names ordered left, center, right.
    pub fn file_names(&self) -> [&str; 3] {
        [&self.left, &self.center, &self.right]
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor interaction settings
    pub editor: EditorConfig,
    /// Diagram source locations
    pub diagrams: DiagramSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config_dir>/odontokit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("No configuration directory on this platform".into())
        })?;
        Ok(dir.join("odontokit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Config = match Self::format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults if the file is absent
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::SaveError(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let editor = &self.editor;

        if editor.proximity_radius <= 0.0 {
            return Err(out_of_range("editor.proximity_radius", editor.proximity_radius));
        }

        if editor.zoom_min <= 0.0 {
            return Err(out_of_range("editor.zoom_min", editor.zoom_min));
        }

        if editor.zoom_min >= editor.zoom_max {
            return Err(ConfigError::InvalidValue {
                key: "editor.zoom_max".to_string(),
                reason: format!(
                    "must be greater than zoom_min ({} >= {})",
                    editor.zoom_min, editor.zoom_max
                ),
            });
        }

        if editor.wheel_zoom_in_factor <= 1.0 {
            return Err(out_of_range(
                "editor.wheel_zoom_in_factor",
                editor.wheel_zoom_in_factor,
            ));
        }

        if editor.wheel_zoom_out_factor <= 0.0 || editor.wheel_zoom_out_factor >= 1.0 {
            return Err(out_of_range(
                "editor.wheel_zoom_out_factor",
                editor.wheel_zoom_out_factor,
            ));
        }

        if editor.long_press_ms == 0 {
            return Err(out_of_range("editor.long_press_ms", editor.long_press_ms));
        }

        if editor.hit_area_stroke_width < 0.0 {
            return Err(out_of_range(
                "editor.hit_area_stroke_width",
                editor.hit_area_stroke_width,
            ));
        }

        if editor.freehand_min_segment < 0.0 {
            return Err(out_of_range(
                "editor.freehand_min_segment",
                editor.freehand_min_segment,
            ));
        }

        for (key, name) in ["left", "center", "right"]
            .iter()
            .zip(self.diagrams.file_names())
        {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("diagrams.{}", key),
                    reason: "file name must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    fn format_of(path: &Path) -> ConfigResult<Format> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
