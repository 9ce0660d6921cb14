//! Search engine: suggestion fetching, cancellation and payload parsing.
mod client;
mod fetch;
mod parse;
mod types;

pub use client::{
    HttpSuggestionClient, PendingRequestHandle, RuntimeSuggestionClient, SuggestionCallback,
    SuggestionClient,
};
pub use fetch::{
    FetchSettings, HttpSuggestionSource, SuggestionSource, DEFAULT_SUGGESTION_ENDPOINT,
};
pub use parse::parse_suggestion_payload;
pub use types::{FetchCompletion, SuggestionError, SuggestionResult};
