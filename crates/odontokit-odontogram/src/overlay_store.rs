//! Ordered storage of overlays across all views.

use odontokit_core::InputError;
use std::collections::HashSet;

use crate::model::{DiagramView, Overlay, OverlayKind, Point};

/// Largest overlay id accepted from a host: the biggest integer a JavaScript
/// number holds exactly.
pub const MAX_OVERLAY_ID: u64 = (1 << 53) - 1;

/// Insertion-ordered overlay collection with monotonic id allocation.
#[derive(Debug, Clone, Default)]
pub struct OverlayStore {
    overlays: Vec<Overlay>,
    next_id: u64,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing overlays; new ids start past the largest
    /// one present.
    ///
    /// Overlays whose id repeats an earlier one or exceeds [`MAX_OVERLAY_ID`]
    /// are dropped with a warning.
    pub fn from_overlays(overlays: Vec<Overlay>) -> Self {
        let mut seen = HashSet::with_capacity(overlays.len());
        let mut store = Self::new();
        for overlay in overlays {
            if let Err(e) = check_id(overlay.id, &mut seen) {
                tracing::warn!("Dropping restored overlay: {}", e);
                continue;
            }
            store.set_next_id(overlay.id.saturating_add(1));
            store.overlays.push(overlay);
        }
        store
    }

    /// Checks that ids are unique and within range.
    pub fn validate(overlays: &[Overlay]) -> Result<(), InputError> {
        let mut seen = HashSet::with_capacity(overlays.len());
        overlays.iter().try_for_each(|o| check_id(o.id, &mut seen))
    }

    /// Allocates a fresh id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = self.next_id.max(id);
    }

    /// Appends an overlay, replacing any overlay with the same id in place.
    pub fn insert(&mut self, overlay: Overlay) {
        self.set_next_id(overlay.id.saturating_add(1));
        match self.index_of(overlay.id) {
            Some(index) => self.overlays[index] = overlay,
            None => self.overlays.push(overlay),
        }
    }

    /// Reinserts a removed overlay at its former position (used by undo).
    pub fn restore(&mut self, index: usize, overlay: Overlay) {
        if self.index_of(overlay.id).is_some() {
            self.insert(overlay);
            return;
        }
        self.set_next_id(overlay.id.saturating_add(1));
        let index = index.min(self.overlays.len());
        self.overlays.insert(index, overlay);
    }

    /// Removes an overlay and returns it with its former position.
    pub fn remove_return(&mut self, id: u64) -> Option<(usize, Overlay)> {
        let index = self.index_of(id)?;
        Some((index, self.overlays.remove(index)))
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.remove_return(id).is_some()
    }

    pub fn get(&self, id: u64) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Overlay> {
        self.overlays.iter_mut().find(|o| o.id == id)
    }

    fn index_of(&self, id: u64) -> Option<usize> {
        self.overlays.iter().position(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    /// Overlays of one view, in insertion order.
    pub fn in_view(&self, view: DiagramView) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().filter(move |o| o.view == view)
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn count_in_view(&self, view: DiagramView) -> usize {
        self.in_view(view).count()
    }

    /// Nearest overlay of `kind` in `view` strictly within `radius` of `at`.
    pub fn nearest_of_kind(
        &self,
        view: DiagramView,
        kind: OverlayKind,
        at: Point,
        radius: f64,
    ) -> Option<u64> {
        let limit = radius * radius;
        self.in_view(view)
            .filter(|o| o.kind() == kind)
            .map(|o| (o.id, o.position().distance_squared(&at)))
            .filter(|(_, dist)| *dist < limit)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Most recently placed overlay of `kind` in `view` (highest id).
    pub fn latest_of_kind(&self, view: DiagramView, kind: OverlayKind) -> Option<u64> {
        self.in_view(view)
            .filter(|o| o.kind() == kind)
            .map(|o| o.id)
            .max()
    }

    /// Removes every overlay in `view`, returning how many were removed.
    pub fn clear_view(&mut self, view: DiagramView) -> usize {
        let before = self.overlays.len();
        self.overlays.retain(|o| o.view != view);
        before - self.overlays.len()
    }

    /// Removes every overlay. Id allocation keeps counting upward.
    pub fn clear(&mut self) -> usize {
        let count = self.overlays.len();
        self.overlays.clear();
        count
    }

    pub fn to_vec(&self) -> Vec<Overlay> {
        self.overlays.clone()
    }
}

fn check_id(id: u64, seen: &mut HashSet<u64>) -> Result<(), InputError> {
    if id > MAX_OVERLAY_ID {
        return Err(InputError::OverlayIdOutOfRange {
            id,
            max: MAX_OVERLAY_ID,
        });
    }
    if !seen.insert(id) {
        return Err(InputError::DuplicateOverlayId { id });
    }
    Ok(())
}
