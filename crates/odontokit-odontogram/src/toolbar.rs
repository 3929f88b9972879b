//! Toolbar contract: what a toolbar shows and the actions it sends back.

use odontokit_core::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::annotations::ClearScope;
use crate::editor_state::EditorSession;
use crate::model::{DiagramView, ToolId};
use crate::tools::ButtonOutcome;

/// One toolbar button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolButton {
    pub tool: ToolId,
    pub color: Color,
    pub has_options: bool,
    pub enabled: bool,
}

/// Everything a toolbar needs to render itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarProps {
    pub active_tool: Option<ToolId>,
    pub active_color: Color,
    pub incisor_view_open: bool,
    pub palette_open_for: Option<ToolId>,
    pub can_undo: bool,
    pub active_view: DiagramView,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub buttons: Vec<ToolButton>,
}

/// Which incisor tool the incisor view's mode switch picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncisorMode {
    Place,
    Rotate,
}

/// Actions sent by the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ToolbarAction {
    /// Short press on a tool button (toggle).
    SelectTool { tool: ToolId },
    /// Press held for `held_ms` before release.
    PressTool { tool: ToolId, held_ms: u64 },
    SelectColor { color: Color },
    ChoosePaletteColor { color: Color },
    DismissPalette,
    Undo,
    Clear {
        #[serde(default)]
        all_views: bool,
    },
    ToggleIncisorView,
    SelectIncisorsMode { mode: IncisorMode },
    PreviousView,
    NextView,
}

impl EditorSession {
    pub fn toolbar_props(&self) -> ToolbarProps {
        let tools = self.tools();
        let buttons = ToolId::ALL
            .iter()
            .map(|&tool| ToolButton {
                tool,
                color: tools.color_of(tool),
                has_options: tool.has_options(),
                enabled: !tool.requires_incisor_view() || tools.incisor_view_open(),
            })
            .collect();

        ToolbarProps {
            active_tool: tools.active(),
            active_color: tools.active_color(),
            incisor_view_open: tools.incisor_view_open(),
            palette_open_for: tools.palette(),
            can_undo: self.can_undo(),
            active_view: self.active_view(),
            can_go_previous: self.navigator().can_go_previous(),
            can_go_next: self.navigator().can_go_next(),
            buttons,
        }
    }

    /// Applies a toolbar action.
    pub fn dispatch(&mut self, action: ToolbarAction) {
        tracing::debug!("Toolbar action: {:?}", action);
        match action {
            ToolbarAction::SelectTool { tool } => {
                self.tools_mut().toggle(tool);
            }
            ToolbarAction::PressTool { tool, held_ms } => {
                let start = Instant::now();
                let end = start + Duration::from_millis(held_ms);
                let tools = self.tools_mut();
                tools.press_button(tool, start);
                tools.poll_long_press(end);
                if let ButtonOutcome::Ignored = tools.release_button(tool, end) {
                    tracing::debug!("Press on {} ignored", tool);
                }
            }
            ToolbarAction::SelectColor { color } => {
                self.tools_mut().set_active_color(color);
            }
            ToolbarAction::ChoosePaletteColor { color } => {
                self.tools_mut().choose_palette_color(color);
            }
            ToolbarAction::DismissPalette => self.tools_mut().dismiss_palette(),
            ToolbarAction::Undo => {
                self.undo();
            }
            ToolbarAction::Clear { all_views } => {
                if all_views {
                    self.clear(ClearScope::All);
                } else {
                    self.clear_active_view();
                }
            }
            ToolbarAction::ToggleIncisorView => {
                self.toggle_incisor_view();
            }
            ToolbarAction::SelectIncisorsMode { mode } => {
                self.set_incisor_view_open(true);
                let tool = match mode {
                    IncisorMode::Place => ToolId::Incisor,
                    IncisorMode::Rotate => ToolId::Rotate,
                };
                self.tools_mut().select(tool);
            }
            ToolbarAction::PreviousView => {
                self.go_previous();
            }
            ToolbarAction::NextView => {
                self.go_next();
            }
        }
    }
}
