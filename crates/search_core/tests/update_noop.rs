use search_core::{update, CoordinatorState, Msg, SearchState};

#[test]
fn suggestions_after_navigation_are_ignored() {
    let (state, _) = update(SearchState::new(), Msg::TextChanged("par".to_string()));
    let (state, _) = update(state, Msg::SubmitQuery("par".to_string()));
    assert_eq!(state.view().phase, CoordinatorState::ResultShown);

    let (next, effects) = update(
        state.clone(),
        Msg::SuggestionsReady {
            request_id: 1,
            query: "par".to_string(),
            suggestions: vec!["paris".to_string()],
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn submit_before_typing_is_ignored() {
    let state = SearchState::new();
    let (next, effects) = update(state.clone(), Msg::SubmitQuery("weather".to_string()));

    assert_eq!(state, next);
    assert_eq!(next.view().phase, CoordinatorState::Empty);
    assert!(effects.is_empty());
}

#[test]
fn suggestions_before_typing_are_ignored() {
    let state = SearchState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::SuggestionsReady {
            request_id: 1,
            query: "par".to_string(),
            suggestions: vec!["paris".to_string()],
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
