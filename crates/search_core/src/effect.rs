use crate::RequestId;

/// Work requested by [`crate::update`], executed in order by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSuggestions { request_id: RequestId, text: String },
    CancelFetch { request_id: RequestId },
    ShowError { message: String },
    SetSuggestionPanelVisible(bool),
    PublishSuggestions(Vec<String>),
    SetSearchFieldText(String),
    LoadUrl(String),
}
