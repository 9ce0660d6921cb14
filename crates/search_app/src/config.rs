use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use search_core::{NavigationUrlBuilder, DEFAULT_SEARCH_ENDPOINT};
use search_engine::{FetchSettings, DEFAULT_SUGGESTION_ENDPOINT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::logging::LogDestination;

/// Looked up in the working directory when no path is given.
pub const CONFIG_FILENAME: &str = "search.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub suggestion_endpoint: String,
    pub suggestion_param: String,
    pub search_endpoint: String,
    pub search_param: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_endpoint: DEFAULT_SUGGESTION_ENDPOINT.to_string(),
            suggestion_param: "query".to_string(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            search_param: "q".to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 10_000,
            max_response_bytes: 256 * 1024,
            log_destination: LogDestination::File,
        }
    }
}

impl SearchConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            endpoint: self.suggestion_endpoint.clone(),
            query_param: self.suggestion_param.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
            ..FetchSettings::default()
        }
    }

    pub fn navigation(&self) -> NavigationUrlBuilder {
        NavigationUrlBuilder::new(self.search_endpoint.clone(), self.search_param.clone())
    }
}

/// Loads the RON config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<SearchConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(SearchConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
