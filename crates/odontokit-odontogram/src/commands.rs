//! Reversible editor actions.
//!
//! An entry is pushed after its action has been applied to the document, and
//! carries exactly what is needed to reverse it.

use crate::annotations::{Annotations, Changes, ClearScope};
use crate::model::{DiagramView, Overlay, OverlayKind, PaintEntry, Point, RegionId};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    AddOverlay(AddOverlay),
    RemoveOverlay(RemoveOverlay),
    CompleteStroke(CompleteStroke),
    MoveOverlay(MoveOverlay),
    RotateOverlay(RotateOverlay),
    Paint(Paint),
    Erase(Erase),
    Clear(Clear),
}

/// A point marker was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOverlay {
    pub id: u64,
}

/// A marker was toggled off.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveOverlay {
    pub index: usize,
    pub overlay: Overlay,
}

/// A freehand stroke was finalised.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteStroke {
    pub id: u64,
    pub view: DiagramView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveOverlay {
    pub id: u64,
    pub from: Point,
    pub to: Point,
}

/// Rotation angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateOverlay {
    pub id: u64,
    pub from: f64,
    pub to: f64,
}

/// A region was painted; `previous` is what the region held before.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub view: DiagramView,
    pub region: RegionId,
    pub previous: Option<PaintEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Erase {
    pub entry: PaintEntry,
}

/// History marker for a clear. Undoing it restores nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Clear {
    pub scope: ClearScope,
}

impl EditorCommand {
    /// Reverses the action against `doc`, returning what changed.
    pub fn undo(self, doc: &mut Annotations) -> Changes {
        match self {
            EditorCommand::AddOverlay(cmd) => {
                if doc.overlays.remove(cmd.id) {
                    Changes::OVERLAYS
                } else {
                    Changes::NONE
                }
            }
            EditorCommand::RemoveOverlay(cmd) => {
                doc.overlays.restore(cmd.index, cmd.overlay);
                Changes::OVERLAYS
            }
            EditorCommand::CompleteStroke(cmd) => {
                if doc.overlays.remove(cmd.id) {
                    return Changes::OVERLAYS;
                }
                // Fall back to the newest stroke in the view.
                let latest = doc.overlays.latest_of_kind(cmd.view, OverlayKind::Freehand);
                match latest {
                    Some(id) => {
                        doc.overlays.remove(id);
                        Changes::OVERLAYS
                    }
                    None => Changes::NONE,
                }
            }
            EditorCommand::MoveOverlay(cmd) => match doc.overlays.get_mut(cmd.id) {
                Some(overlay) => {
                    overlay.set_position(cmd.from);
                    Changes::OVERLAYS
                }
                None => Changes::NONE,
            },
            EditorCommand::RotateOverlay(cmd) => {
                let rotated = doc
                    .overlays
                    .get_mut(cmd.id)
                    .map(|overlay| overlay.set_rotation(cmd.from))
                    .unwrap_or(false);
                if rotated {
                    Changes::OVERLAYS
                } else {
                    Changes::NONE
                }
            }
            EditorCommand::Paint(cmd) => {
                match cmd.previous {
                    Some(previous) => {
                        doc.paint.set(previous);
                    }
                    None => {
                        doc.paint.remove(cmd.view, cmd.region);
                    }
                }
                Changes::PAINT
            }
            EditorCommand::Erase(cmd) => {
                doc.paint.set(cmd.entry);
                Changes::PAINT
            }
            EditorCommand::Clear(cmd) => {
                tracing::debug!("Undo of clear ({:?}) restores nothing", cmd.scope);
                Changes::NONE
            }
        }
    }

    /// Overlay a move or rotate entry refers to.
    pub fn target_overlay(&self) -> Option<u64> {
        match self {
            EditorCommand::MoveOverlay(cmd) => Some(cmd.id),
            EditorCommand::RotateOverlay(cmd) => Some(cmd.id),
            _ => None,
        }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::AddOverlay(_) => "Add Marker",
            EditorCommand::RemoveOverlay(_) => "Remove Marker",
            EditorCommand::CompleteStroke(_) => "Draw Stroke",
            EditorCommand::MoveOverlay(_) => "Move Overlay",
            EditorCommand::RotateOverlay(_) => "Rotate Incisor",
            EditorCommand::Paint(_) => "Paint Region",
            EditorCommand::Erase(_) => "Erase Region",
            EditorCommand::Clear(_) => "Clear",
        }
    }
}
