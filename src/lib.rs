//! # Odontokit
//!
//! A veterinary odontogram editor engine. Three dental diagrams (left,
//! center and right views) are annotated by painting tooth regions with
//! condition colors, placing dental markers, drawing freehand and
//! rotating incisor markers, all with linear undo.
//!
//! ## Architecture
//!
//! Odontokit is organized as a workspace with multiple crates:
//!
//! 1. **odontokit-core** - Error types, colors, engine defaults, callback aliases
//! 2. **odontokit-settings** - Configuration loading, validation and persistence
//! 3. **odontokit-odontogram** - The editor engine: stores, tools, gestures, rendering
//! 4. **odontokit** - Command-line driver that replays interaction scripts
//!
//! ## Features
//!
//! - **Region Painting**: Condition and fill tools color diagram regions per view
//! - **Markers**: Arrows, circles, lines and dental glyphs toggled by click
//! - **Freehand and Incisors**: Drag gestures with move and rotate editing
//! - **Navigation**: Cached per-view diagrams loaded asynchronously
//! - **Rendering**: Pure scene projection with SVG output

pub mod script;

pub use odontokit_core::{Color, Error, Result};
pub use odontokit_odontogram as odontogram;
pub use odontokit_settings::{Config, DiagramSettings, EditorConfig};

pub use odontokit_odontogram::{
    DiagramSource, DiagramView, EditorSession, EditorSnapshot, EditorUpdate, FsDiagramSource,
    PointerInput, PointerTarget, Projection, Scene, ToolId, ToolbarAction,
};

pub use script::{Script, ScriptStep};

/// Build date stamped by the build script
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize the logging system.
///
/// `RUST_LOG` filters as usual; INFO is always enabled. With `json` the
/// output is one JSON object per event, suitable for log collectors.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?;
    }

    Ok(())
}
