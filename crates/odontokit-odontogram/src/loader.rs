//! Diagram sources
//!
//! Defines where a view's vector markup comes from. The editor only needs the
//! raw markup for a name; parsing happens in the navigator.

use async_trait::async_trait;
use odontokit_core::FetchError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Source of diagram markup, keyed by diagram name.
#[async_trait]
pub trait DiagramSource: Send + Sync {
    /// Fetches the raw markup of the named diagram.
    async fn fetch(&self, name: &str) -> Result<String, FetchError>;
}

/// Reads diagrams from files in a directory.
#[derive(Debug, Clone)]
pub struct FsDiagramSource {
    root: PathBuf,
}

impl FsDiagramSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl DiagramSource for FsDiagramSource {
    async fn fetch(&self, name: &str) -> Result<String, FetchError> {
        let path = self.root.join(name);
        tracing::debug!("Fetching diagram {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FetchError::NotFound {
                    name: path.display().to_string(),
                },
                _ => FetchError::Unreadable {
                    name: path.display().to_string(),
                    reason: e.to_string(),
                },
            })
    }
}

/// In-memory diagrams, used by tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagramSource {
    diagrams: HashMap<String, String>,
}

impl MemoryDiagramSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.insert(name, markup);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        self.diagrams.insert(name.into(), markup.into());
    }
}

#[async_trait]
impl DiagramSource for MemoryDiagramSource {
    async fn fetch(&self, name: &str) -> Result<String, FetchError> {
        self.diagrams
            .get(name)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                name: name.to_string(),
            })
    }
}
