//! Linear undo history.
//!
//! Every mutating action pushes exactly one command; undo pops the newest and
//! reverses it. There is no redo. Toggling a marker off withdraws the command
//! that placed it instead of pushing a new one.

use crate::annotations::{Annotations, Changes};
use crate::commands::EditorCommand;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<EditorCommand>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: EditorCommand) {
        tracing::trace!("History push: {}", cmd.name());
        self.entries.push(cmd);
    }

    /// Pops and reverses the newest command. Returns `None` when empty.
    pub fn undo(&mut self, doc: &mut Annotations) -> Option<Changes> {
        let cmd = self.entries.pop()?;
        tracing::debug!("Undo: {}", cmd.name());
        Some(cmd.undo(doc))
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn last(&self) -> Option<&EditorCommand> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops the entry that placed overlay `id`, along with any later move or
    /// rotate entries for it. Returns false if no placement entry is left.
    pub fn withdraw_placement(&mut self, id: u64) -> bool {
        let placed = self
            .entries
            .iter()
            .rposition(|cmd| matches!(cmd, EditorCommand::AddOverlay(add) if add.id == id));
        let Some(index) = placed else {
            return false;
        };
        let later = self.entries.split_off(index + 1);
        self.entries.pop();
        self.entries
            .extend(later.into_iter().filter(|cmd| cmd.target_overlay() != Some(id)));
        tracing::trace!("History withdrew placement of overlay {}", id);
        true
    }
}
