//! Region fills keyed by view and region.
//!
//! Hosts see the map as an object keyed by `"<view>_<regionId>"`
//! (e.g. `center_region_3`). Each entry also carries its own view and region,
//! so the key is derived on the way out and ignored on the way in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{DiagramView, PaintEntry, RegionId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, PaintEntry>", from = "BTreeMap<String, PaintEntry>")]
pub struct PaintMap {
    entries: BTreeMap<(DiagramView, RegionId), PaintEntry>,
}

impl PaintMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, view: DiagramView, region: RegionId) -> Option<&PaintEntry> {
        self.entries.get(&(view, region))
    }

    /// Inserts or overwrites the entry for its view and region, returning the
    /// previous entry.
    pub fn set(&mut self, entry: PaintEntry) -> Option<PaintEntry> {
        self.entries.insert((entry.view_id, entry.region_id), entry)
    }

    pub fn remove(&mut self, view: DiagramView, region: RegionId) -> Option<PaintEntry> {
        self.entries.remove(&(view, region))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaintEntry> {
        self.entries.values()
    }

    /// Entries of one view, ordered by region.
    pub fn in_view(&self, view: DiagramView) -> impl Iterator<Item = &PaintEntry> {
        self.entries
            .range((view, RegionId::new(0))..=(view, RegionId::new(usize::MAX)))
            .map(|(_, entry)| entry)
    }

    pub fn count_in_view(&self, view: DiagramView) -> usize {
        self.in_view(view).count()
    }

    pub fn clear_view(&mut self, view: DiagramView) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(entry_view, _), _| *entry_view != view);
        before - self.entries.len()
    }

    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }
}

impl From<PaintMap> for BTreeMap<String, PaintEntry> {
    fn from(map: PaintMap) -> Self {
        map.entries
            .into_values()
            .map(|entry| (entry.key(), entry))
            .collect()
    }
}

impl From<BTreeMap<String, PaintEntry>> for PaintMap {
    fn from(keyed: BTreeMap<String, PaintEntry>) -> Self {
        let mut map = PaintMap::new();
        for entry in keyed.into_values() {
            map.set(entry);
        }
        map
    }
}
