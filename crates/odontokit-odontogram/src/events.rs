//! Partial state updates handed to the host.

use serde::Serialize;

use crate::model::{DiagramView, Overlay};
use crate::paint_map::PaintMap;

/// Only the parts that changed are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint_map: Option<PaintMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlays: Option<Vec<Overlay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_view: Option<DiagramView>,
}

impl EditorUpdate {
    pub fn is_empty(&self) -> bool {
        self.paint_map.is_none() && self.overlays.is_none() && self.active_view.is_none()
    }
}
