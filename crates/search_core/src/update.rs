use search_logging::{preview, search_debug, search_info, search_warn};

use crate::{CoordinatorState, Effect, Msg, SearchState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Effects must be executed in the returned order; UI outputs rely on it.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    use CoordinatorState::{Empty, EnteringText, ResultShown};

    let effects = match (state.phase(), msg) {
        (Empty | EnteringText | ResultShown, Msg::TextChanged(text)) => {
            fetch_or_clear(&mut state, text)
        }
        (
            EnteringText,
            Msg::SuggestionsReady {
                request_id,
                query,
                suggestions,
            },
        ) => {
            if state.is_active(request_id) {
                show_suggestions(&mut state, suggestions)
            } else {
                search_debug!(
                    "Discarding stale suggestions request_id={} query={:?}",
                    request_id,
                    preview(&query)
                );
                Vec::new()
            }
        }
        (_, Msg::SuggestionsFailed { request_id, message }) => {
            if state.is_active(request_id) {
                search_warn!("Suggestion fetch failed request_id={}: {}", request_id, message);
                vec![Effect::ShowError { message }]
            } else {
                search_debug!("Discarding stale failure request_id={}", request_id);
                Vec::new()
            }
        }
        (EnteringText, Msg::SubmitQuery(query) | Msg::SuggestionRowSelected(query)) => {
            navigate(&mut state, query)
        }
        (
            Empty | ResultShown,
            Msg::SuggestionsReady { .. } | Msg::SubmitQuery(_) | Msg::SuggestionRowSelected(_),
        ) => Vec::new(),
    };

    (state, effects)
}

fn fetch_or_clear(state: &mut SearchState, text: String) -> Vec<Effect> {
    state.set_phase(CoordinatorState::EnteringText);
    state.set_search_field_text(&text);

    let mut effects = Vec::with_capacity(3);
    if let Some(previous) = state.take_active_request() {
        effects.push(Effect::CancelFetch {
            request_id: previous,
        });
    }

    if text.is_empty() {
        state.show_suggestions(Vec::new(), false);
        effects.push(Effect::SetSuggestionPanelVisible(false));
        effects.push(Effect::PublishSuggestions(Vec::new()));
    } else {
        let request_id = state.issue_request();
        effects.push(Effect::FetchSuggestions { request_id, text });
    }
    effects
}

fn show_suggestions(state: &mut SearchState, suggestions: Vec<String>) -> Vec<Effect> {
    let visible = !suggestions.is_empty();
    state.show_suggestions(suggestions.clone(), visible);
    vec![
        Effect::PublishSuggestions(suggestions),
        Effect::SetSuggestionPanelVisible(visible),
    ]
}

fn navigate(state: &mut SearchState, query: String) -> Vec<Effect> {
    if query.is_empty() {
        return Vec::new();
    }

    let url = match state.navigation().build_search_url(&query) {
        Ok(url) => url.to_string(),
        Err(err) => {
            search_warn!("Could not build search url for {:?}: {}", preview(&query), err);
            return vec![Effect::ShowError {
                message: err.to_string(),
            }];
        }
    };

    search_info!("Navigating to {}", url);
    state.record_navigation(&query, url.clone());

    let mut effects = vec![
        Effect::LoadUrl(url),
        Effect::SetSearchFieldText(query),
        Effect::SetSuggestionPanelVisible(false),
    ];
    // The results page supersedes whatever fetch was still running.
    if let Some(request_id) = state.take_active_request() {
        effects.push(Effect::CancelFetch { request_id });
    }
    effects
}
