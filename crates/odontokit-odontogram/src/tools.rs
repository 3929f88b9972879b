//! Tool selection, per-tool colors and the toolbar button press machine.
//!
//! A short press on a tool button selects it (or deselects it if it is
//! already active). Holding a button that carries options past the long-press
//! threshold opens its color palette instead, and the tool is not selected by
//! that press.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use odontokit_core::Color;
use odontokit_settings::EditorConfig;

use crate::model::ToolId;

/// Result of releasing a tool button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonOutcome {
    Selected(ToolId),
    Deselected(ToolId),
    PaletteOpened(ToolId),
    /// The release did not match a tracked press, or the tool is unavailable.
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct ButtonPress {
    tool: ToolId,
    since: Instant,
    long_fired: bool,
}

#[derive(Debug, Clone)]
pub struct ToolSelector {
    active: Option<ToolId>,
    colors: HashMap<ToolId, Color>,
    default_color: Color,
    incisor_view_open: bool,
    long_press: Duration,
    press: Option<ButtonPress>,
    palette: Option<ToolId>,
}

impl ToolSelector {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            active: None,
            colors: HashMap::new(),
            default_color: config.default_color.clone(),
            incisor_view_open: false,
            long_press: Duration::from_millis(config.long_press_ms),
            press: None,
            palette: None,
        }
    }

    pub fn active(&self) -> Option<ToolId> {
        self.active
    }

    /// Selects `tool`. Incisor tools are refused while the incisor view is closed.
    pub fn select(&mut self, tool: ToolId) -> bool {
        if tool.requires_incisor_view() && !self.incisor_view_open {
            tracing::debug!("Tool {} needs the incisor view", tool);
            return false;
        }
        self.active = Some(tool);
        true
    }

    /// Clears the active tool, returning the editor to pan mode.
    pub fn deselect(&mut self) {
        self.active = None;
    }

    /// Toolbar toggle: deselects `tool` if active, otherwise selects it.
    pub fn toggle(&mut self, tool: ToolId) -> ButtonOutcome {
        if self.active == Some(tool) {
            self.deselect();
            ButtonOutcome::Deselected(tool)
        } else if self.select(tool) {
            ButtonOutcome::Selected(tool)
        } else {
            ButtonOutcome::Ignored
        }
    }

    pub fn color_of(&self, tool: ToolId) -> Color {
        self.colors
            .get(&tool)
            .cloned()
            .or_else(|| tool.preset_color())
            .unwrap_or_else(|| self.default_color.clone())
    }

    pub fn set_color(&mut self, tool: ToolId, color: Color) {
        self.colors.insert(tool, color);
    }

    /// Color of the active tool, or the default color in pan mode.
    pub fn active_color(&self) -> Color {
        match self.active {
            Some(tool) => self.color_of(tool),
            None => self.default_color.clone(),
        }
    }

    /// Sets the active tool's color. Ignored in pan mode.
    pub fn set_active_color(&mut self, color: Color) -> bool {
        match self.active {
            Some(tool) => {
                self.set_color(tool, color);
                true
            }
            None => false,
        }
    }

    pub fn incisor_view_open(&self) -> bool {
        self.incisor_view_open
    }

    /// Opens or closes the incisor view. Closing it drops incisor-only tools.
    pub fn set_incisor_view_open(&mut self, open: bool) {
        self.incisor_view_open = open;
        if !open {
            if let Some(tool) = self.active.filter(|t| t.requires_incisor_view()) {
                tracing::debug!("Incisor view closed, deselecting {}", tool);
                self.active = None;
            }
            if self.palette.is_some_and(|t| t.requires_incisor_view()) {
                self.palette = None;
            }
        }
    }

    /// Starts tracking a press on `tool`'s button.
    pub fn press_button(&mut self, tool: ToolId, at: Instant) {
        self.press = Some(ButtonPress {
            tool,
            since: at,
            long_fired: false,
        });
    }

    /// Opens the palette once the held button passes the threshold. Returns the
    /// tool whose palette opened on this poll.
    pub fn poll_long_press(&mut self, at: Instant) -> Option<ToolId> {
        let press = self.press.as_mut()?;
        if press.long_fired || !press.tool.has_options() {
            return None;
        }
        if at.saturating_duration_since(press.since) >= self.long_press {
            press.long_fired = true;
            self.palette = Some(press.tool);
            return Some(press.tool);
        }
        None
    }

    /// Ends a press on `tool`'s button.
    pub fn release_button(&mut self, tool: ToolId, at: Instant) -> ButtonOutcome {
        let Some(press) = self.press.take() else {
            return ButtonOutcome::Ignored;
        };
        if press.tool != tool {
            return ButtonOutcome::Ignored;
        }
        if press.long_fired {
            return ButtonOutcome::PaletteOpened(tool);
        }
        if tool.has_options() && at.saturating_duration_since(press.since) >= self.long_press {
            self.palette = Some(tool);
            return ButtonOutcome::PaletteOpened(tool);
        }
        self.toggle(tool)
    }

    /// Abandons a press without selecting anything (pointer left the button).
    pub fn cancel_press(&mut self) {
        self.press = None;
    }

    /// Tool whose palette is open.
    pub fn palette(&self) -> Option<ToolId> {
        self.palette
    }

    /// Picks a color in the open palette: sets the tool's color and selects it.
    pub fn choose_palette_color(&mut self, color: Color) -> Option<ToolId> {
        let tool = self.palette.take()?;
        self.set_color(tool, color);
        self.select(tool).then_some(tool)
    }

    pub fn dismiss_palette(&mut self) {
        self.palette = None;
    }
}

impl Default for ToolSelector {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
