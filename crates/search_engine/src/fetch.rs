use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use search_logging::search_trace;
use url::Url;

use crate::parse::parse_suggestion_payload;
use crate::{SuggestionError, SuggestionResult};

/// Suggestion service queried when no endpoint is configured.
pub const DEFAULT_SUGGESTION_ENDPOINT: &str = "https://api.bing.com/osjson.aspx";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub query_param: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUGGESTION_ENDPOINT.to_string(),
            query_param: "query".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            max_bytes: 256 * 1024,
            allowed_content_types: vec![
                "application/json".to_string(),
                "application/x-suggestions+json".to_string(),
            ],
        }
    }
}

/// One suggestion request against a provider, without cancellation or
/// callback plumbing. [`crate::RuntimeSuggestionClient`] adds those.
#[async_trait::async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Builds the request URL for `text`. Called synchronously at fetch time.
    fn request_url(&self, text: &str) -> Result<Url, SuggestionError>;

    async fn fetch(&self, url: Url) -> Result<SuggestionResult, SuggestionError>;
}

#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl HttpSuggestionSource {
    pub fn new(settings: FetchSettings) -> Result<Self, SuggestionError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { settings, client })
    }

    fn is_content_type_allowed(&self, essence: &str) -> bool {
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(essence))
    }
}

#[async_trait::async_trait]
impl SuggestionSource for HttpSuggestionSource {
    fn request_url(&self, text: &str) -> Result<Url, SuggestionError> {
        let invalid = || SuggestionError::InvalidQueryUrl {
            url: self.settings.endpoint.clone(),
        };

        let mut url = Url::parse(&self.settings.endpoint).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }
        url.query_pairs_mut()
            .append_pair(&self.settings.query_param, text);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<SuggestionResult, SuggestionError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionError::ServerError {
                status_code: status.as_u16(),
            });
        }

        let essence = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(content_type_essence)
            .unwrap_or_default();
        if !self.is_content_type_allowed(&essence) {
            return Err(SuggestionError::UnexpectedContentType { actual: essence });
        }

        let max_bytes = self.settings.max_bytes;
        if response
            .content_length()
            .is_some_and(|content_len| content_len > max_bytes)
        {
            return Err(SuggestionError::ResponseTooLarge { max_bytes });
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if body.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(SuggestionError::ResponseTooLarge { max_bytes });
            }
            body.extend_from_slice(&chunk);
        }
        search_trace!("Suggestion body received ({} bytes)", body.len());

        parse_suggestion_payload(&body)
    }
}

fn content_type_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase()
}

fn map_reqwest_error(err: reqwest::Error) -> SuggestionError {
    if err.is_timeout() {
        return SuggestionError::Timeout;
    }
    SuggestionError::TransportFailure {
        message: err.to_string(),
    }
}
