//! Pointer routing for editor state.

use super::{EditorSession, PointerInput, PointerTarget};
use crate::annotations::Changes;
use crate::commands::{CompleteStroke, EditorCommand, MoveOverlay, RotateOverlay};
use crate::gesture::{DragKind, DragSession};
use crate::model::{FreehandStroke, Overlay, OverlayKind, OverlayShape, Point, ToolBehavior};
use crate::viewport::Surface;

impl EditorSession {
    /// Mounts, resizes or unmounts the rendering surface.
    pub fn set_surface(&mut self, surface: Option<Surface>) {
        self.viewport.set_surface(surface);
    }

    /// Pointer pressed on the diagram.
    pub fn pointer_down(&mut self, input: PointerInput) {
        if !self.is_interactive() {
            return;
        }
        if self.gesture.is_active() {
            tracing::debug!("Press while a drag is active; finishing the old drag");
            self.finish_drag();
        }

        let view = self.navigator.active();
        let drag = match self.tools.active().map(|tool| tool.behavior()) {
            None => Some(DragSession::new(DragKind::Pan, input.screen)),
            Some(ToolBehavior::Freehand) => {
                let Some(local) = self.screen_to_local(input.screen) else {
                    return;
                };
                Some(DragSession::new(DragKind::Freehand, input.screen).with_anchor(local))
            }
            Some(ToolBehavior::Move) => match input.target {
                PointerTarget::Overlay(id) => self
                    .doc
                    .overlays
                    .get(id)
                    .filter(|overlay| overlay.view == view)
                    .map(|overlay| {
                        DragSession::new(DragKind::Move, input.screen)
                            .with_target(id, overlay.position())
                    }),
                _ => None,
            },
            Some(ToolBehavior::Rotate) => self
                .doc
                .overlays
                .latest_of_kind(view, OverlayKind::Incisor)
                .and_then(|id| self.doc.overlays.get(id))
                .map(|overlay| {
                    let angle = overlay.rotation().unwrap_or(0.0);
                    DragSession::new(DragKind::Rotate, input.screen)
                        .with_target(overlay.id, Point::new(angle, 0.0))
                }),
            Some(_) => None,
        };

        if let Some(drag) = drag {
            tracing::trace!("Drag started: {:?}", drag.kind);
            self.gesture.begin(drag);
        }
    }

    /// Pointer moved anywhere in the window.
    pub fn pointer_move(&mut self, screen: Point) {
        let Some((previous, drag)) = self.gesture.track(screen) else {
            return;
        };
        if screen == previous {
            return;
        }
        let Some(view_box) = self.navigator.active_diagram().map(|d| d.view_box) else {
            return;
        };

        match drag.kind {
            DragKind::Pan => {
                let delta = self.viewport.screen_delta_to_user(screen - previous, &view_box);
                self.viewport.pan_by(delta.x, delta.y);
            }
            DragKind::Freehand => {
                let local = self.viewport.screen_to_local(screen, &view_box);
                let min_segment = self.config.freehand_min_segment;
                if let Some(overlay) = self.pending_stroke.as_mut() {
                    if let OverlayShape::Freehand(stroke) = &mut overlay.shape {
                        stroke.extend_to(local, min_segment);
                    }
                    return;
                }
                let mut stroke = FreehandStroke::begin(drag.anchor);
                stroke.extend_to(local, 0.0);
                let id = self.doc.overlays.generate_id();
                self.pending_stroke = Some(Overlay::new(
                    id,
                    self.navigator.active(),
                    self.tools.active_color(),
                    OverlayShape::Freehand(stroke),
                ));
            }
            DragKind::Move => {
                let Some(id) = drag.origin_id else {
                    return;
                };
                let delta = self
                    .viewport
                    .screen_delta_to_local(drag.total_delta(), &view_box);
                if let Some(overlay) = self.doc.overlays.get_mut(id) {
                    overlay.set_position(drag.anchor + delta);
                }
            }
            DragKind::Rotate => {
                let Some(id) = drag.origin_id else {
                    return;
                };
                let delta = self
                    .viewport
                    .screen_delta_to_local(drag.total_delta(), &view_box);
                let angle = drag.anchor.x + delta.x * self.config.rotate_degrees_per_unit;
                if let Some(overlay) = self.doc.overlays.get_mut(id) {
                    overlay.set_rotation(angle);
                }
            }
        }
    }

    /// Pointer released anywhere in the window.
    pub fn pointer_up(&mut self, screen: Point) {
        self.pointer_move(screen);
        self.finish_drag();
    }

    /// Pointer left the window mid-gesture; finishes like a release.
    pub fn pointer_leave_window(&mut self) {
        self.finish_drag();
    }

    /// Host-side cancellation; finishes like a release.
    pub fn cancel_gesture(&mut self) {
        self.finish_drag();
    }

    pub(super) fn finish_drag(&mut self) {
        let Some(drag) = self.gesture.finish() else {
            return;
        };
        tracing::trace!("Drag finished: {:?}", drag.kind);

        match drag.kind {
            DragKind::Pan => {}
            DragKind::Freehand => {
                let Some(stroke) = self.pending_stroke.take() else {
                    return;
                };
                let cmd = CompleteStroke {
                    id: stroke.id,
                    view: stroke.view,
                };
                self.doc.overlays.insert(stroke);
                self.history.push(EditorCommand::CompleteStroke(cmd));
                self.notify(Changes::OVERLAYS, false);
            }
            DragKind::Move => {
                let Some(id) = drag.origin_id else {
                    return;
                };
                let Some(to) = self.doc.overlays.get(id).map(|o| o.position()) else {
                    return;
                };
                if to != drag.anchor {
                    self.history.push(EditorCommand::MoveOverlay(MoveOverlay {
                        id,
                        from: drag.anchor,
                        to,
                    }));
                    self.notify(Changes::OVERLAYS, false);
                }
            }
            DragKind::Rotate => {
                let Some(id) = drag.origin_id else {
                    return;
                };
                let Some(to) = self.doc.overlays.get(id).and_then(|o| o.rotation()) else {
                    return;
                };
                if to != drag.anchor.x {
                    self.history.push(EditorCommand::RotateOverlay(RotateOverlay {
                        id,
                        from: drag.anchor.x,
                        to,
                    }));
                    self.notify(Changes::OVERLAYS, false);
                }
            }
        }
    }

    /// Click on the diagram: paint, erase or toggle a marker.
    pub fn click(&mut self, input: PointerInput) {
        if !self.is_interactive() {
            return;
        }
        let Some(tool) = self.tools.active() else {
            return;
        };
        let Some(local) = self.screen_to_local(input.screen) else {
            return;
        };
        let color = self.tools.color_of(tool);

        match (tool.behavior(), input.target) {
            (ToolBehavior::Fill, PointerTarget::Region(region))
            | (ToolBehavior::Condition, PointerTarget::Region(region)) => {
                self.paint_region(region, tool, color);
            }
            (ToolBehavior::Eraser, PointerTarget::Region(region)) => {
                self.erase_region(region);
            }
            (ToolBehavior::Condition, _) | (ToolBehavior::Marker, _) => {
                if let Some(kind) = tool.marker_kind() {
                    self.toggle_marker(kind, local, color);
                }
            }
            _ => {}
        }
    }

    /// Mouse wheel over the diagram. Zoom works whether or not a diagram is
    /// loaded.
    pub fn wheel(&mut self, delta_y: f64) {
        self.viewport.wheel(delta_y);
    }
}
