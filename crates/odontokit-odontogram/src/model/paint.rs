use chrono::{DateTime, Utc};
use odontokit_core::Color;
use serde::{Deserialize, Serialize};

use super::region::RegionId;
use super::tool::ToolId;
use super::view::DiagramView;

/// A region fill recorded by a paint-capable tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintEntry {
    pub region_id: RegionId,
    pub view_id: DiagramView,
    pub tool_id: ToolId,
    pub color: Color,
    pub timestamp: DateTime<Utc>,
}

impl PaintEntry {
    /// New entry stamped with the current time.
    pub fn new(view: DiagramView, region: RegionId, tool: ToolId, color: Color) -> Self {
        Self {
            region_id: region,
            view_id: view,
            tool_id: tool,
            color,
            timestamp: Utc::now(),
        }
    }

    /// Key used in the host-facing paint map, e.g. `center_region_3`.
    pub fn key(&self) -> String {
        paint_key(self.view_id, self.region_id)
    }
}

pub fn paint_key(view: DiagramView, region: RegionId) -> String {
    format!("{}_{}", view, region)
}
