//! # Odontokit Odontogram
//!
//! The editor engine behind a veterinary odontogram: three dental diagram
//! views (left, center, right) on which a clinician paints tooth regions,
//! places dental markers, draws freehand and rotates incisor markers.
//!
//! ## Core Components
//!
//! - **Model**: Views, regions, tools, overlays and paint entries
//! - **Viewport**: Screen to diagram coordinate mapping, pan and zoom
//! - **Stores**: Ordered overlay store and the per-view paint map
//! - **Tools**: Tool selection, colors and long-press palettes
//! - **History**: Linear undo of every mutating action
//! - **Navigator**: View switching with cached, asynchronously loaded diagrams
//! - **Gesture**: Press-drag-release tracking for freehand, move, rotate and pan
//! - **Renderer**: Pure scene projection and SVG output
//!
//! ## Architecture
//!
//! ```text
//! EditorSession
//!   ├── Annotations (OverlayStore + PaintMap)
//!   ├── ToolSelector
//!   ├── Viewport
//!   ├── ViewNavigator ── DiagramSource (fs / memory)
//!   ├── History (EditorCommand)
//!   └── GestureSession
//!
//! EditorSession::project() -> Projection -> Scene::to_svg()
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use odontokit_odontogram::{EditorSession, FsDiagramSource, PointerInput};
//!
//! let mut session = EditorSession::new(&config);
//! session.load_active_view(&FsDiagramSource::new("assets/diagrams")).await?;
//! session.tools_mut().select(ToolId::Caries);
//! session.click(PointerInput::canvas(120.0, 80.0));
//! let svg = session.project().to_svg();
//! ```

pub mod annotations;
pub mod commands;
pub mod diagram;
pub mod editor_state;
pub mod events;
pub mod gesture;
pub mod history;
pub mod loader;
pub mod model;
pub mod navigator;
pub mod overlay_store;
pub mod paint_map;
pub mod renderer;
pub mod serialization;
pub mod toolbar;
pub mod tools;
pub mod viewport;

pub use annotations::{Annotations, Changes, ClearScope};
pub use commands::EditorCommand;
pub use diagram::{Diagram, Region};
pub use editor_state::overlays::MarkerToggle;
pub use editor_state::{EditorSession, PointerInput, PointerTarget};
pub use events::EditorUpdate;
pub use gesture::{DragKind, DragSession, GestureSession};
pub use history::History;
pub use loader::{DiagramSource, FsDiagramSource, MemoryDiagramSource};
pub use model::{
    DiagramView, Overlay, OverlayKind, OverlayShape, PaintEntry, Point, RegionId, ToolBehavior,
    ToolId,
};
pub use navigator::{FetchTicket, LoadState, ViewNavigator};
pub use overlay_store::OverlayStore;
pub use paint_map::PaintMap;
pub use renderer::{Cursor, OverlayNode, Primitive, Projection, RegionNode, Scene};
pub use serialization::EditorSnapshot;
pub use toolbar::{IncisorMode, ToolButton, ToolbarAction, ToolbarProps};
pub use tools::{ButtonOutcome, ToolSelector};
pub use viewport::{PanZoom, Surface, ViewBox, Viewport};
