use thiserror::Error;

/// Normalized provider response for one suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionResult {
    /// The query text as echoed back by the provider.
    pub query: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("invalid suggestion url: {url}")]
    InvalidQueryUrl { url: String },
    #[error("server error with status code {status_code}")]
    ServerError { status_code: u16 },
    #[error("unexpected content type: {actual}")]
    UnexpectedContentType { actual: String },
    #[error("malformed suggestion payload")]
    MalformedSuggestionPayload,
    #[error("suggestion response exceeds {max_bytes} bytes")]
    ResponseTooLarge { max_bytes: u64 },
    #[error("suggestion request timed out")]
    Timeout,
    #[error("transport failure: {message}")]
    TransportFailure { message: String },
}

/// Outcome handed to a [`crate::SuggestionCallback`], exactly once per fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCompletion {
    Ready(SuggestionResult),
    Failed(SuggestionError),
    /// The caller cancelled the request. Not an error.
    Cancelled,
}
