//! Navigation between the three diagram views and their load state.
//!
//! Each view's diagram is fetched once and cached. A fetch is split into
//! `begin_fetch` / `complete_fetch` so hosts can drive it from their own
//! executor; `load` does both against a [`DiagramSource`].

use odontokit_core::{Error, FetchError, Result};

use crate::diagram::Diagram;
use crate::loader::DiagramSource;
use crate::model::DiagramView;

/// Load state of one view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(Diagram),
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Identifies an in-flight fetch. A completion whose ticket is stale is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub view: DiagramView,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct ViewNavigator {
    active: DiagramView,
    names: [String; 3],
    states: [LoadState; 3],
    generations: [u64; 3],
}

impl ViewNavigator {
    /// `names` are the diagram names of the left, center and right views.
    pub fn new(names: [String; 3], initial: DiagramView) -> Self {
        Self {
            active: initial,
            names,
            states: Default::default(),
            generations: [0; 3],
        }
    }

    pub fn active(&self) -> DiagramView {
        self.active
    }

    pub fn diagram_name(&self, view: DiagramView) -> &str {
        &self.names[view.index()]
    }

    pub fn can_go_previous(&self) -> bool {
        self.active.previous().is_some()
    }

    pub fn can_go_next(&self) -> bool {
        self.active.next().is_some()
    }

    /// Moves one view left. Returns the new view, or `None` at the left end.
    pub fn go_previous(&mut self) -> Option<DiagramView> {
        let view = self.active.previous()?;
        self.active = view;
        Some(view)
    }

    /// Moves one view right. Returns the new view, or `None` at the right end.
    pub fn go_next(&mut self) -> Option<DiagramView> {
        let view = self.active.next()?;
        self.active = view;
        Some(view)
    }

    /// Activates `view`. Returns true if the active view changed.
    pub fn select(&mut self, view: DiagramView) -> bool {
        let changed = self.active != view;
        self.active = view;
        changed
    }

    pub fn state(&self, view: DiagramView) -> &LoadState {
        &self.states[view.index()]
    }

    pub fn active_state(&self) -> &LoadState {
        self.state(self.active)
    }

    /// The active view's diagram, once loaded.
    pub fn active_diagram(&self) -> Option<&Diagram> {
        match self.active_state() {
            LoadState::Ready(diagram) => Some(diagram),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.active_state().is_ready()
    }

    /// True when `view` has never loaded or its last load failed.
    pub fn needs_fetch(&self, view: DiagramView) -> bool {
        matches!(self.state(view), LoadState::Idle | LoadState::Failed(_))
    }

    /// Marks `view` as loading. Returns `None` if it is already loading or ready.
    pub fn begin_fetch(&mut self, view: DiagramView) -> Option<FetchTicket> {
        if !self.needs_fetch(view) {
            return None;
        }
        let index = view.index();
        self.generations[index] += 1;
        self.states[index] = LoadState::Loading;
        Some(FetchTicket {
            view,
            generation: self.generations[index],
        })
    }

    /// Stores the outcome of a fetch. Returns false when the ticket is stale.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        fetched: std::result::Result<String, FetchError>,
    ) -> Result<bool> {
        let index = ticket.view.index();
        if self.generations[index] != ticket.generation {
            tracing::debug!("Dropping stale fetch for {} view", ticket.view);
            return Ok(false);
        }

        let parsed = fetched
            .map_err(Error::from)
            .and_then(|markup| Diagram::parse(&markup).map_err(Error::from));

        match parsed {
            Ok(diagram) => {
                tracing::info!(
                    "Loaded {} view ({} regions)",
                    ticket.view,
                    diagram.regions.len()
                );
                self.states[index] = LoadState::Ready(diagram);
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("Failed to load {} view: {}", ticket.view, e);
                self.states[index] = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetches and parses `view` if it is not loaded yet.
    pub async fn load(&mut self, view: DiagramView, source: &dyn DiagramSource) -> Result<()> {
        let Some(ticket) = self.begin_fetch(view) else {
            return Ok(());
        };
        let name = self.diagram_name(view).to_string();
        let fetched = source.fetch(&name).await;
        self.complete_fetch(ticket, fetched).map(|_| ())
    }

    pub async fn load_active(&mut self, source: &dyn DiagramSource) -> Result<()> {
        self.load(self.active, source).await
    }
}
