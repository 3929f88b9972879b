//! Error handling for Odontokit
//!
//! Provides error types for every layer of the odontogram editor:
//! - Diagram errors (parsing vector sources into regions)
//! - Fetch errors (resolving a view's diagram source)
//! - Input errors (colors, tool ids and view names coming from a host or script)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Diagram error type
///
/// Raised while turning a diagram's vector markup into drawable regions.
#[derive(Error, Debug, Clone)]
pub enum DiagramError {
    /// The source has no root `<svg>` element
    #[error("Invalid diagram: missing <svg> root element")]
    MissingRoot,

    /// The markup could not be tokenised
    #[error("Malformed diagram markup at byte {position}: {reason}")]
    Malformed {
        /// Byte offset where the reader stopped.
        position: u64,
        /// The reason reported by the reader.
        reason: String,
    },

    /// The `viewBox` attribute is present but unusable
    #[error("Invalid viewBox '{value}'")]
    InvalidViewBox {
        /// The raw attribute value.
        value: String,
    },
}

/// Fetch error type
///
/// Raised when a view's diagram source cannot be retrieved.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    /// The named diagram does not exist in the source
    #[error("Diagram '{name}' not found")]
    NotFound {
        /// The diagram name or path.
        name: String,
    },

    /// The diagram exists but could not be read
    #[error("Failed to read diagram '{name}': {reason}")]
    Unreadable {
        /// The diagram name or path.
        name: String,
        /// The underlying failure.
        reason: String,
    },
}

/// Input error type
///
/// Raised when a textual value from a host, script or config is not one the
/// editor understands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Color is not a `#rgb` / `#rrggbb` hex string
    #[error("Invalid color '{value}'")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },

    /// Unknown tool id
    #[error("Unknown tool '{value}'")]
    UnknownTool {
        /// The rejected value.
        value: String,
    },

    /// Unknown diagram view
    #[error("Unknown view '{value}'")]
    UnknownView {
        /// The rejected value.
        value: String,
    },

    /// Two overlays share an id
    #[error("Duplicate overlay id {id}")]
    DuplicateOverlayId {
        /// The repeated id.
        id: u64,
    },

    /// Overlay id beyond the range the editor allocates from
    #[error("Overlay id {id} exceeds the maximum of {max}")]
    OverlayIdOutOfRange {
        /// The rejected id.
        id: u64,
        /// Largest accepted id.
        max: u64,
    },
}

/// Main error type for Odontokit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Diagram error
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    /// Fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Input error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error from a string message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a diagram error
    pub fn is_diagram_error(&self) -> bool {
        matches!(self, Error::Diagram(_))
    }

    /// Check if this is a fetch error
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Error::Fetch(_))
    }

    /// Check if this is an input error
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Input(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
