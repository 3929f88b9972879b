//! Marker placement for editor state.

use odontokit_core::Color;

use super::EditorSession;
use crate::annotations::Changes;
use crate::commands::{AddOverlay, EditorCommand, RemoveOverlay};
use crate::model::{Overlay, OverlayKind, OverlayShape, Point};

/// Outcome of a marker toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerToggle {
    Added(u64),
    Removed(u64),
}

impl EditorSession {
    /// Removes the nearest `kind` marker within the proximity radius of `at`
    /// in the active view, or places a new one there.
    pub fn toggle_marker(&mut self, kind: OverlayKind, at: Point, color: Color) -> MarkerToggle {
        let view = self.navigator.active();
        let nearby = self
            .doc
            .overlays
            .nearest_of_kind(view, kind, at, self.config.proximity_radius);

        let result = match nearby.and_then(|id| self.doc.overlays.remove_return(id)) {
            Some((index, overlay)) => {
                let id = overlay.id;
                // Toggling off a marker placed this session cancels its
                // placement; markers from the initial snapshot get an entry.
                if !self.history.withdraw_placement(id) {
                    self.history
                        .push(EditorCommand::RemoveOverlay(RemoveOverlay { index, overlay }));
                }
                MarkerToggle::Removed(id)
            }
            None => {
                let id = self.doc.overlays.generate_id();
                self.doc.overlays.insert(Overlay::new(
                    id,
                    view,
                    color,
                    OverlayShape::marker(kind, at),
                ));
                self.history.push(EditorCommand::AddOverlay(AddOverlay { id }));
                MarkerToggle::Added(id)
            }
        };

        tracing::debug!("{} marker at {}: {:?}", kind, at, result);
        self.notify(Changes::OVERLAYS, false);
        result
    }
}
