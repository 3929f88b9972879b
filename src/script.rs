//! Interaction scripts: a JSON list of host events replayed against a session.
//!
//! ```json
//! [
//!   { "step": "toolbar", "action": { "action": "select_tool", "tool": "caries" } },
//!   { "step": "click", "x": 120, "y": 80, "region": "region_3" },
//!   { "step": "pointer_down", "x": 10, "y": 10 },
//!   { "step": "pointer_up", "x": 30, "y": 10 }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use odontokit_odontogram::{
    DiagramSource, DiagramView, EditorSession, Point, PointerInput, PointerTarget, RegionId,
    Surface, ToolbarAction,
};

/// One replayed host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Mount or resize the surface; all fields omitted unmounts it.
    Surface {
        #[serde(default)]
        left: f64,
        #[serde(default)]
        top: f64,
        width: Option<f64>,
        height: Option<f64>,
    },
    Toolbar {
        action: ToolbarAction,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        region: Option<RegionId>,
        #[serde(default)]
        overlay: Option<u64>,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    PointerLeave,
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        region: Option<RegionId>,
        #[serde(default)]
        overlay: Option<u64>,
    },
    Wheel {
        delta_y: f64,
    },
    SelectView {
        view: DiagramView,
    },
    /// Loads the active view's diagram.
    Load,
}

fn target(region: Option<RegionId>, overlay: Option<u64>) -> PointerTarget {
    match (region, overlay) {
        (_, Some(id)) => PointerTarget::Overlay(id),
        (Some(region), None) => PointerTarget::Region(region),
        (None, None) => PointerTarget::Canvas,
    }
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse interaction script")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Replays every step in order.
    ///
    /// A failed diagram load is logged and replay continues, matching how
    /// the editor keeps running with a failed view.
    pub async fn run(&self, session: &mut EditorSession, source: &dyn DiagramSource) {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!("Step {}: {:?}", index, step);
            match step {
                ScriptStep::Surface {
                    left,
                    top,
                    width,
                    height,
                } => {
                    let surface = match (width, height) {
                        (Some(w), Some(h)) => Some(Surface::new(*left, *top, *w, *h)),
                        _ => None,
                    };
                    session.set_surface(surface);
                }
                ScriptStep::Toolbar { action } => session.dispatch(action.clone()),
                ScriptStep::PointerDown {
                    x,
                    y,
                    region,
                    overlay,
                } => {
                    session.pointer_down(PointerInput::new(*x, *y, target(*region, *overlay)));
                }
                ScriptStep::PointerMove { x, y } => session.pointer_move(Point::new(*x, *y)),
                ScriptStep::PointerUp { x, y } => session.pointer_up(Point::new(*x, *y)),
                ScriptStep::PointerLeave => session.pointer_leave_window(),
                ScriptStep::Click {
                    x,
                    y,
                    region,
                    overlay,
                } => {
                    session.click(PointerInput::new(*x, *y, target(*region, *overlay)));
                }
                ScriptStep::Wheel { delta_y } => session.wheel(*delta_y),
                ScriptStep::SelectView { view } => {
                    session.select_view(*view);
                }
                ScriptStep::Load => {
                    if let Err(e) = session.load_active_view(source).await {
                        tracing::warn!("Diagram load failed: {}", e);
                    }
                }
            }
        }
    }
}
