//! Editor session: the state behind one odontogram editor.
//!
//! This module is split into submodules by concern:
//! - `pointer`: press/move/release, click and wheel routing
//! - `paint`: region paint and erase
//! - `overlays`: marker toggling
//! - `history`: undo and clear
//! - `view`: view navigation, diagram loading and the incisor view

mod history;
pub mod overlays;
mod paint;
mod pointer;
mod view;

use odontokit_core::DataCallback;
use odontokit_settings::{Config, EditorConfig};
use std::fmt;

use crate::annotations::{Annotations, Changes};
use crate::gesture::GestureSession;
use crate::history::History;
use crate::model::{DiagramView, Overlay, Point, RegionId};
use crate::navigator::ViewNavigator;
use crate::overlay_store::OverlayStore;
use crate::paint_map::PaintMap;
use crate::serialization::EditorSnapshot;
use crate::tools::ToolSelector;
use crate::viewport::Viewport;
use crate::EditorUpdate;

/// What the pointer is over, as reported by the host's hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty diagram space.
    Canvas,
    Region(RegionId),
    Overlay(u64),
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub screen: Point,
    pub target: PointerTarget,
}

impl PointerInput {
    pub fn new(x: f64, y: f64, target: PointerTarget) -> Self {
        Self {
            screen: Point::new(x, y),
            target,
        }
    }

    pub fn canvas(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerTarget::Canvas)
    }

    pub fn region(x: f64, y: f64, region: RegionId) -> Self {
        Self::new(x, y, PointerTarget::Region(region))
    }

    pub fn overlay(x: f64, y: f64, id: u64) -> Self {
        Self::new(x, y, PointerTarget::Overlay(id))
    }
}

/// Editor session state
pub struct EditorSession {
    doc: Annotations,
    /// Freehand stroke being drawn; not part of the document until release.
    pending_stroke: Option<Overlay>,
    tools: ToolSelector,
    viewport: Viewport,
    navigator: ViewNavigator,
    history: History,
    gesture: GestureSession,
    config: EditorConfig,
    on_update: Option<DataCallback<EditorUpdate>>,
}

impl EditorSession {
    /// Creates an empty session on the center view.
    pub fn new(config: &Config) -> Self {
        Self::with_state(config, Annotations::new(), DiagramView::Center)
    }

    /// Creates a session from host-provided initial state.
    pub fn from_snapshot(config: &Config, snapshot: EditorSnapshot) -> Self {
        let doc = Annotations::from_parts(
            snapshot.paint_map,
            OverlayStore::from_overlays(snapshot.overlays),
        );
        Self::with_state(config, doc, snapshot.active_view)
    }

    fn with_state(config: &Config, doc: Annotations, active: DiagramView) -> Self {
        let names = config.diagrams.file_names().map(str::to_string);
        Self {
            doc,
            pending_stroke: None,
            tools: ToolSelector::new(&config.editor),
            viewport: Viewport::new(&config.editor),
            navigator: ViewNavigator::new(names, active),
            history: History::new(),
            gesture: GestureSession::default(),
            config: config.editor.clone(),
            on_update: None,
        }
    }

    /// Registers the host callback that receives state changes.
    pub fn set_on_update(&mut self, callback: DataCallback<EditorUpdate>) {
        self.on_update = Some(callback);
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::new(
            self.doc.paint.clone(),
            self.doc.overlays.to_vec(),
            self.navigator.active(),
        )
    }

    pub fn paint_map(&self) -> &PaintMap {
        &self.doc.paint
    }

    pub fn overlays(&self) -> &OverlayStore {
        &self.doc.overlays
    }

    pub fn pending_stroke(&self) -> Option<&Overlay> {
        self.pending_stroke.as_ref()
    }

    pub fn tools(&self) -> &ToolSelector {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolSelector {
        &mut self.tools
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn navigator(&self) -> &ViewNavigator {
        &self.navigator
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn active_view(&self) -> DiagramView {
        self.navigator.active()
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Pointer input is only handled once the active view's diagram is loaded.
    pub fn is_interactive(&self) -> bool {
        self.navigator.is_ready()
    }

    /// Maps a screen point into the active diagram's local coordinates.
    pub fn screen_to_local(&self, screen: Point) -> Option<Point> {
        let diagram = self.navigator.active_diagram()?;
        Some(self.viewport.screen_to_local(screen, &diagram.view_box))
    }

    fn notify(&mut self, changes: Changes, view_changed: bool) {
        if changes.is_empty() && !view_changed {
            return;
        }
        let update = EditorUpdate {
            paint_map: changes.paint.then(|| self.doc.paint.clone()),
            overlays: changes.overlays.then(|| self.doc.overlays.to_vec()),
            active_view: view_changed.then(|| self.navigator.active()),
        };
        if let Some(callback) = self.on_update.as_mut() {
            callback(update);
        }
    }
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("active_view", &self.navigator.active())
            .field("active_tool", &self.tools.active())
            .field("overlays", &self.doc.overlays.len())
            .field("paint_entries", &self.doc.paint.len())
            .field("history", &self.history.depth())
            .field("viewport", &self.viewport.to_string())
            .finish()
    }
}
