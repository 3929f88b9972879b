//! Saving and restoring editor state.
//!
//! The snapshot is the same shape the host exchanges with the editor:
//! the paint map keyed by `"<view>_<regionId>"`, the overlay list and the
//! active view.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{DiagramView, Overlay};
use crate::overlay_store::OverlayStore;
use crate::paint_map::PaintMap;

/// Snapshot format version
const SNAPSHOT_VERSION: &str = "1.0";

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub paint_map: PaintMap,
    #[serde(default)]
    pub overlays: Vec<Overlay>,
    #[serde(default)]
    pub active_view: DiagramView,
}

impl EditorSnapshot {
    pub fn new(paint_map: PaintMap, overlays: Vec<Overlay>, active_view: DiagramView) -> Self {
        Self {
            version: default_version(),
            paint_map,
            overlays,
            active_view,
        }
    }

    pub fn to_json(&self) -> odontokit_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot, rejecting duplicate or out-of-range overlay ids.
    pub fn from_json(json: &str) -> odontokit_core::Result<Self> {
        let snapshot: EditorSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> odontokit_core::Result<()> {
        OverlayStore::validate(&self.overlays)?;
        Ok(())
    }

    /// Save snapshot to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;
        std::fs::write(path.as_ref(), json).context("Failed to write snapshot file")?;
        Ok(())
    }

    /// Load snapshot from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read snapshot file")?;
        let snapshot: EditorSnapshot =
            serde_json::from_str(&content).context("Failed to parse snapshot file")?;
        snapshot.validate().context("Invalid snapshot file")?;
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                "Snapshot version {} differs from {}",
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }
        Ok(snapshot)
    }
}
