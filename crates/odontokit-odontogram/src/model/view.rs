use odontokit_core::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three fixed diagram views, ordered left, center, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramView {
    Left,
    Center,
    Right,
}

impl DiagramView {
    /// All views in navigation order.
    pub const ALL: [DiagramView; 3] = [DiagramView::Left, DiagramView::Center, DiagramView::Right];

    /// Position in navigation order.
    pub fn index(self) -> usize {
        match self {
            DiagramView::Left => 0,
            DiagramView::Center => 1,
            DiagramView::Right => 2,
        }
    }

    /// The view to the left, or `None` at the left end.
    pub fn previous(self) -> Option<DiagramView> {
        match self {
            DiagramView::Left => None,
            DiagramView::Center => Some(DiagramView::Left),
            DiagramView::Right => Some(DiagramView::Center),
        }
    }

    /// The view to the right, or `None` at the right end.
    pub fn next(self) -> Option<DiagramView> {
        match self {
            DiagramView::Left => Some(DiagramView::Center),
            DiagramView::Center => Some(DiagramView::Right),
            DiagramView::Right => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiagramView::Left => "left",
            DiagramView::Center => "center",
            DiagramView::Right => "right",
        }
    }
}

impl Default for DiagramView {
    fn default() -> Self {
        DiagramView::Center
    }
}

impl fmt::Display for DiagramView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramView {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(DiagramView::Left),
            "center" => Ok(DiagramView::Center),
            "right" => Ok(DiagramView::Right),
            _ => Err(InputError::UnknownView {
                value: s.to_string(),
            }),
        }
    }
}
