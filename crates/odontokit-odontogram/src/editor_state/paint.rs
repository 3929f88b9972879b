//! Region paint and erase for editor state.

use odontokit_core::Color;

use super::EditorSession;
use crate::annotations::Changes;
use crate::commands::{EditorCommand, Erase, Paint};
use crate::model::{PaintEntry, RegionId, ToolId};

impl EditorSession {
    /// Paints `region` of the active view. Returns false if the region is not
    /// part of the loaded diagram.
    pub fn paint_region(&mut self, region: RegionId, tool: ToolId, color: Color) -> bool {
        if !self.region_exists(region) {
            tracing::debug!("Ignoring paint on unknown {}", region);
            return false;
        }
        let view = self.navigator.active();
        let previous = self
            .doc
            .paint
            .set(PaintEntry::new(view, region, tool, color));
        self.history.push(EditorCommand::Paint(Paint {
            view,
            region,
            previous,
        }));
        self.notify(Changes::PAINT, false);
        true
    }

    /// Removes the paint on `region` of the active view. Erasing an unpainted
    /// region changes nothing and records nothing.
    pub fn erase_region(&mut self, region: RegionId) -> bool {
        let view = self.navigator.active();
        let Some(entry) = self.doc.paint.remove(view, region) else {
            return false;
        };
        self.history.push(EditorCommand::Erase(Erase { entry }));
        self.notify(Changes::PAINT, false);
        true
    }

    fn region_exists(&self, region: RegionId) -> bool {
        self.navigator
            .active_diagram()
            .is_some_and(|diagram| diagram.region(region).is_some())
    }
}
