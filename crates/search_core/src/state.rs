use crate::navigation::NavigationUrlBuilder;
use crate::view_model::SearchViewModel;

/// Identifies one issued suggestion fetch. Ids are never reused within a state.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatorState {
    #[default]
    Empty,
    EnteringText,
    ResultShown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    phase: CoordinatorState,
    navigation: NavigationUrlBuilder,
    last_request_id: RequestId,
    active_request: Option<RequestId>,
    suggestions: Vec<String>,
    suggestion_panel_visible: bool,
    search_field_text: String,
    current_url: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_navigation(navigation: NavigationUrlBuilder) -> Self {
        Self {
            navigation,
            ..Self::default()
        }
    }

    pub fn view(&self) -> SearchViewModel {
        SearchViewModel {
            phase: self.phase,
            suggestions: self.suggestions.clone(),
            suggestion_panel_visible: self.suggestion_panel_visible,
            search_field_text: self.search_field_text.clone(),
            current_url: self.current_url.clone(),
            active_request: self.active_request,
        }
    }

    pub(crate) fn phase(&self) -> CoordinatorState {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: CoordinatorState) {
        self.phase = phase;
    }

    pub(crate) fn navigation(&self) -> &NavigationUrlBuilder {
        &self.navigation
    }

    /// Allocates a fresh id and makes it the only active request.
    pub(crate) fn issue_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.active_request = Some(self.last_request_id);
        self.last_request_id
    }

    pub(crate) fn take_active_request(&mut self) -> Option<RequestId> {
        self.active_request.take()
    }

    pub(crate) fn is_active(&self, request_id: RequestId) -> bool {
        self.active_request == Some(request_id)
    }

    pub(crate) fn set_search_field_text(&mut self, text: &str) {
        text.clone_into(&mut self.search_field_text);
    }

    pub(crate) fn show_suggestions(&mut self, suggestions: Vec<String>, visible: bool) {
        self.suggestions = suggestions;
        self.suggestion_panel_visible = visible;
    }

    pub(crate) fn record_navigation(&mut self, query: &str, url: String) {
        self.set_search_field_text(query);
        self.current_url = Some(url);
        self.suggestion_panel_visible = false;
        self.phase = CoordinatorState::ResultShown;
    }
}
