use search_logging::search_debug;

use crate::{SuggestionError, SuggestionResult};

/// Parses the OpenSearch-style `[query, [suggestion, ...]]` body.
///
/// Exactly two elements are accepted; extra description or URL arrays some
/// providers append are rejected along with any other shape.
pub fn parse_suggestion_payload(body: &[u8]) -> Result<SuggestionResult, SuggestionError> {
    let (query, suggestions): (String, Vec<String>) =
        serde_json::from_slice(body).map_err(|err| {
            search_debug!("Rejecting suggestion payload: {}", err);
            SuggestionError::MalformedSuggestionPayload
        })?;
    Ok(SuggestionResult { query, suggestions })
}
