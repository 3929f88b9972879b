//! Plain data types shared by the editor components.

pub mod overlay;
pub mod paint;
pub mod point;
pub mod region;
pub mod tool;
pub mod view;

pub use overlay::{
    ArrowMark, CircleMark, DentalGlyph, DentalMark, FreehandStroke, IncisorMark, LineMark,
    Overlay, OverlayKind, OverlayShape,
};
pub use paint::{paint_key, PaintEntry};
pub use point::Point;
pub use region::RegionId;
pub use tool::{ToolBehavior, ToolId};
pub use view::DiagramView;
