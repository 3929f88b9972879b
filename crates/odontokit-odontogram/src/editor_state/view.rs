//! View navigation and diagram loading for editor state.

use super::EditorSession;
use crate::annotations::Changes;
use crate::loader::DiagramSource;
use crate::model::DiagramView;

impl EditorSession {
    /// Switches to the view on the left. Returns false at the left end.
    pub fn go_previous(&mut self) -> bool {
        self.leave_view();
        let moved = self.navigator.go_previous().is_some();
        if moved {
            self.notify(Changes::NONE, true);
        }
        moved
    }

    /// Switches to the view on the right. Returns false at the right end.
    pub fn go_next(&mut self) -> bool {
        self.leave_view();
        let moved = self.navigator.go_next().is_some();
        if moved {
            self.notify(Changes::NONE, true);
        }
        moved
    }

    pub fn select_view(&mut self, view: DiagramView) -> bool {
        if view == self.navigator.active() {
            return false;
        }
        self.leave_view();
        self.navigator.select(view);
        self.notify(Changes::NONE, true);
        true
    }

    /// Loads the active view's diagram if it is not cached yet.
    ///
    /// A failure is kept in the view's load state and also returned.
    pub async fn load_active_view(&mut self, source: &dyn DiagramSource) -> odontokit_core::Result<()> {
        self.navigator.load_active(source).await
    }

    /// Loads all three views.
    pub async fn load_all_views(&mut self, source: &dyn DiagramSource) -> odontokit_core::Result<()> {
        let mut first_error = None;
        for view in DiagramView::ALL {
            if let Err(e) = self.navigator.load(view, source).await {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn incisor_view_open(&self) -> bool {
        self.tools.incisor_view_open()
    }

    /// Opens or closes the incisor view.
    pub fn set_incisor_view_open(&mut self, open: bool) {
        self.tools.set_incisor_view_open(open);
    }

    pub fn toggle_incisor_view(&mut self) -> bool {
        let open = !self.tools.incisor_view_open();
        self.set_incisor_view_open(open);
        open
    }

    /// Finishes any gesture before the view changes.
    fn leave_view(&mut self) {
        self.finish_drag();
    }
}
