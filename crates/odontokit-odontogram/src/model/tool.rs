//! The closed catalogue of editor tools.

use odontokit_core::{Color, InputError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::overlay::OverlayKind;

/// How a tool responds to pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolBehavior {
    /// Press-drag-release draws a path.
    Freehand,
    /// Click on a region removes its paint entry.
    Eraser,
    /// Click on a region paints it with the tool color.
    Fill,
    /// Press on an overlay and drag to translate it.
    Move,
    /// Horizontal drag rotates the latest incisor marker.
    Rotate,
    /// Click toggles a point marker.
    Marker,
    /// Click on a region paints it, elsewhere toggles a marker.
    Condition,
}

/// Stable tool identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    Freehand,
    Eraser,
    Fill,
    Move,
    Rotate,
    Arrow,
    Circle,
    Line,
    Caries,
    Fracture,
    WolfTooth,
    Extraction,
    Missing,
    Crown,
    Implant,
    RootCanal,
    RetainedDeciduous,
    Calculus,
    Resorption,
    Incisor,
}

impl ToolId {
    pub const ALL: [ToolId; 20] = [
        ToolId::Freehand,
        ToolId::Eraser,
        ToolId::Fill,
        ToolId::Move,
        ToolId::Rotate,
        ToolId::Arrow,
        ToolId::Circle,
        ToolId::Line,
        ToolId::Caries,
        ToolId::Fracture,
        ToolId::WolfTooth,
        ToolId::Extraction,
        ToolId::Missing,
        ToolId::Crown,
        ToolId::Implant,
        ToolId::RootCanal,
        ToolId::RetainedDeciduous,
        ToolId::Calculus,
        ToolId::Resorption,
        ToolId::Incisor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::Freehand => "freehand",
            ToolId::Eraser => "eraser",
            ToolId::Fill => "fill",
            ToolId::Move => "move",
            ToolId::Rotate => "rotate",
            ToolId::Arrow => "arrow",
            ToolId::Circle => "circle",
            ToolId::Line => "line",
            ToolId::Caries => "caries",
            ToolId::Fracture => "fracture",
            ToolId::WolfTooth => "wolf_tooth",
            ToolId::Extraction => "extraction",
            ToolId::Missing => "missing",
            ToolId::Crown => "crown",
            ToolId::Implant => "implant",
            ToolId::RootCanal => "root_canal",
            ToolId::RetainedDeciduous => "retained_deciduous",
            ToolId::Calculus => "calculus",
            ToolId::Resorption => "resorption",
            ToolId::Incisor => "incisor",
        }
    }

    pub fn behavior(self) -> ToolBehavior {
        match self {
            ToolId::Freehand => ToolBehavior::Freehand,
            ToolId::Eraser => ToolBehavior::Eraser,
            ToolId::Fill => ToolBehavior::Fill,
            ToolId::Move => ToolBehavior::Move,
            ToolId::Rotate => ToolBehavior::Rotate,
            ToolId::Arrow
            | ToolId::Circle
            | ToolId::Line
            | ToolId::WolfTooth
            | ToolId::Implant
            | ToolId::RetainedDeciduous
            | ToolId::Incisor => ToolBehavior::Marker,
            ToolId::Caries
            | ToolId::Fracture
            | ToolId::Extraction
            | ToolId::Missing
            | ToolId::Crown
            | ToolId::RootCanal
            | ToolId::Calculus
            | ToolId::Resorption => ToolBehavior::Condition,
        }
    }

    /// Overlay kind placed by a click with this tool, if any.
    pub fn marker_kind(self) -> Option<OverlayKind> {
        let kind = match self {
            ToolId::Arrow => OverlayKind::Arrow,
            ToolId::Circle => OverlayKind::Circle,
            ToolId::Line => OverlayKind::Line,
            ToolId::Caries => OverlayKind::Caries,
            ToolId::Fracture => OverlayKind::Fracture,
            ToolId::WolfTooth => OverlayKind::WolfTooth,
            ToolId::Extraction => OverlayKind::Extraction,
            ToolId::Missing => OverlayKind::Missing,
            ToolId::Crown => OverlayKind::Crown,
            ToolId::Implant => OverlayKind::Implant,
            ToolId::RootCanal => OverlayKind::RootCanal,
            ToolId::RetainedDeciduous => OverlayKind::RetainedDeciduous,
            ToolId::Calculus => OverlayKind::Calculus,
            ToolId::Resorption => OverlayKind::Resorption,
            ToolId::Incisor => OverlayKind::Incisor,
            ToolId::Freehand | ToolId::Eraser | ToolId::Fill | ToolId::Move | ToolId::Rotate => {
                return None
            }
        };
        Some(kind)
    }

    /// True for tools that write to the paint map.
    pub fn paints_regions(self) -> bool {
        matches!(
            self.behavior(),
            ToolBehavior::Fill | ToolBehavior::Condition
        )
    }

    /// Tools that only make sense while the incisor view is open.
    pub fn requires_incisor_view(self) -> bool {
        matches!(self, ToolId::Incisor | ToolId::Rotate)
    }

    /// Tools whose button carries a color palette on long press.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            ToolId::Freehand | ToolId::Fill | ToolId::Arrow | ToolId::Circle | ToolId::Line
        ) || self.behavior() == ToolBehavior::Condition
    }

    /// Color a tool starts with, for tools that have a fixed preset.
    pub fn preset_color(self) -> Option<Color> {
        let hex = match self {
            ToolId::Caries => "#D32F2F",
            ToolId::Fracture => "#F57C00",
            ToolId::Extraction => "#C62828",
            ToolId::Missing => "#616161",
            ToolId::Crown => "#FBC02D",
            ToolId::RootCanal => "#7B1FA2",
            ToolId::Calculus => "#8D6E63",
            ToolId::Resorption => "#1976D2",
            ToolId::Fill => "#4CAF50",
            _ => return None,
        };
        Color::parse(hex).ok()
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ToolId::ALL
            .iter()
            .copied()
            .find(|tool| tool.as_str() == needle)
            .ok_or_else(|| InputError::UnknownTool {
                value: s.to_string(),
            })
    }
}
