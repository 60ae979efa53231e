//! Spotlight search overlay state.
//!
//! Matching and ranking belong to an injected [`SearchProvider`]; this module only tracks the
//! query, the provider's last answer, and a selection index clamped to the result list.

use zos_app_contract::ApplicationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    App,
    File,
    Setting,
    Web,
}

impl ResultKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::File => "file",
            Self::Setting => "setting",
            Self::Web => "web",
        }
    }
}

/// What committing a result does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotlightAction {
    OpenApp(ApplicationId),
    OpenExternalUrl(String),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightResult {
    pub id: String,
    pub kind: ResultKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub action: SpotlightAction,
}

/// Search collaborator queried on every query change.
pub trait SearchProvider {
    fn query(&self, text: &str) -> Vec<SpotlightResult>;
}

/// Provider used when the host wires none: never returns results.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearch;

impl SearchProvider for NoSearch {
    fn query(&self, _text: &str) -> Vec<SpotlightResult> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpotlightState {
    pub is_open: bool,
    pub query: String,
    pub results: Vec<SpotlightResult>,
    pub selected: usize,
}

impl SpotlightState {
    /// Opens with a fresh query and no results.
    pub fn open(&mut self) {
        *self = Self {
            is_open: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replaces the query and re-runs the search; an empty query clears the results.
    pub fn set_query(&mut self, query: impl Into<String>, provider: &dyn SearchProvider) {
        self.query = query.into();
        self.results = if self.query.is_empty() {
            Vec::new()
        } else {
            provider.query(&self.query)
        };
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.results.len().saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        if index < self.results.len() {
            self.selected = index;
        }
    }

    pub fn selected_result(&self) -> Option<&SpotlightResult> {
        self.results.get(self.selected)
    }

    /// Commits the selected result, closing the overlay. Nothing happens without a selection.
    pub fn confirm(&mut self) -> Option<SpotlightAction> {
        let action = self.selected_result()?.action.clone();
        self.close();
        Some(action)
    }

    /// Whether the "no results" notice should be shown.
    pub fn shows_empty_state(&self) -> bool {
        !self.query.is_empty() && self.results.is_empty()
    }
}
