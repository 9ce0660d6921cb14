use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search field.
    TextChanged(String),
    /// User pressed the search button with the given field text.
    SubmitQuery(String),
    /// User tapped a row in the suggestion list.
    SuggestionRowSelected(String),
    /// A suggestion fetch finished successfully.
    SuggestionsReady {
        request_id: RequestId,
        query: String,
        suggestions: Vec<String>,
    },
    /// A suggestion fetch failed. Cancellation is never reported here.
    SuggestionsFailed {
        request_id: RequestId,
        message: String,
    },
}
