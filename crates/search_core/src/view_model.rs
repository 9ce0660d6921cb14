use crate::{CoordinatorState, RequestId};

/// Read-only snapshot of the coordinator, handed to renderers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchViewModel {
    pub phase: CoordinatorState,
    pub suggestions: Vec<String>,
    pub suggestion_panel_visible: bool,
    pub search_field_text: String,
    pub current_url: Option<String>,
    pub active_request: Option<RequestId>,
}
