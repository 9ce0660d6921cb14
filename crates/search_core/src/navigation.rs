use thiserror::Error;
use url::Url;

/// Results page used when no endpoint is configured.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.bing.com/search";
const DEFAULT_QUERY_PARAM: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("invalid search url: {url}")]
    InvalidQueryUrl { url: String },
}

/// Builds the results-page URL for a free-text query.
///
/// The endpoint is kept as text and only parsed when a URL is built, so a
/// misconfigured endpoint shows up as a [`NavigationError`] on submit rather
/// than at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationUrlBuilder {
    endpoint: String,
    query_param: String,
}

impl NavigationUrlBuilder {
    pub fn new(endpoint: impl Into<String>, query_param: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query_param: query_param.into(),
        }
    }

    /// Appends `query` as a single form-encoded parameter, keeping any query
    /// pairs already present on the endpoint.
    pub fn build_search_url(&self, query: &str) -> Result<Url, NavigationError> {
        let invalid = || NavigationError::InvalidQueryUrl {
            url: self.endpoint.clone(),
        };

        let mut url = Url::parse(&self.endpoint).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https")
            || url.host_str().is_none()
            || self.query_param.is_empty()
        {
            return Err(invalid());
        }

        url.query_pairs_mut().append_pair(&self.query_param, query);
        Ok(url)
    }
}

impl Default for NavigationUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_ENDPOINT, DEFAULT_QUERY_PARAM)
    }
}
