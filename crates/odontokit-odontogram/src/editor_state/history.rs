//! Undo and clear for editor state.

use super::EditorSession;
use crate::annotations::{Changes, ClearScope};
use crate::commands::{Clear, EditorCommand};

impl EditorSession {
    /// Reverses the newest action. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.finish_drag();
        match self.history.undo(&mut self.doc) {
            Some(changes) => {
                self.notify(changes, false);
                true
            }
            None => false,
        }
    }

    /// Removes paint and overlays in `scope`. The clear is recorded in history
    /// but undoing it does not bring anything back.
    ///
    /// The host always receives both stores, even when the scope was already
    /// empty.
    pub fn clear(&mut self, scope: ClearScope) {
        self.finish_drag();
        let removed = self.doc.clear(scope);
        self.history.push(EditorCommand::Clear(Clear { scope }));
        tracing::info!("Cleared {:?} ({:?})", scope, removed);
        self.notify(Changes::PAINT.merge(Changes::OVERLAYS), false);
    }

    /// Clears the active view.
    pub fn clear_active_view(&mut self) {
        self.clear(ClearScope::View(self.navigator.active()));
    }
}
