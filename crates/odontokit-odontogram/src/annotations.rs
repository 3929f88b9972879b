//! The editable document: overlays plus region fills.

use crate::model::DiagramView;
use crate::overlay_store::OverlayStore;
use crate::paint_map::PaintMap;

/// Which stores an operation touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub paint: bool,
    pub overlays: bool,
}

impl Changes {
    pub const NONE: Changes = Changes {
        paint: false,
        overlays: false,
    };
    pub const PAINT: Changes = Changes {
        paint: true,
        overlays: false,
    };
    pub const OVERLAYS: Changes = Changes {
        paint: false,
        overlays: true,
    };

    pub fn is_empty(&self) -> bool {
        !self.paint && !self.overlays
    }

    pub fn merge(self, other: Changes) -> Changes {
        Changes {
            paint: self.paint || other.paint,
            overlays: self.overlays || other.overlays,
        }
    }
}

/// What a clear removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "view")]
pub enum ClearScope {
    View(DiagramView),
    All,
}

#[derive(Debug, Clone, Default)]
pub struct Annotations {
    pub overlays: OverlayStore,
    pub paint: PaintMap,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(paint: PaintMap, overlays: OverlayStore) -> Self {
        Self { overlays, paint }
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty() && self.paint.is_empty()
    }

    /// Removes paint and overlays in `scope`.
    pub fn clear(&mut self, scope: ClearScope) -> Changes {
        let (paint, overlays) = match scope {
            ClearScope::View(view) => (self.paint.clear_view(view), self.overlays.clear_view(view)),
            ClearScope::All => (self.paint.clear(), self.overlays.clear()),
        };
        Changes {
            paint: paint > 0,
            overlays: overlays > 0,
        }
    }
}
