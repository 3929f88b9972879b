//! # Odontokit Core
//!
//! Core types and utilities shared by the Odontokit crates.
//! Provides the unified error type, the hex color value type, engine
//! defaults and callback aliases.

pub mod color;
pub mod constants;
pub mod error;
pub mod types;

pub use color::Color;

pub use error::{DiagramError, Error, FetchError, InputError, Result};

pub use types::{shared, DataCallback, Shared};
