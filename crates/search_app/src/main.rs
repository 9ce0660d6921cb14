use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use search_app::platform::{console, logging};
use search_app::{load_config, SearchConfig, SearchCoordinator, CONFIG_FILENAME};
use search_core::SearchState;
use search_engine::{HttpSuggestionClient, HttpSuggestionSource};
use search_logging::{search_info, search_warn};

const SETTLE_TIMEOUT: Duration = Duration::from_millis(1500);

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    let config = match load_config(&config_path) {
        Ok(config) => {
            logging::initialize(config.log_destination);
            config
        }
        Err(err) => {
            let config = SearchConfig::default();
            logging::initialize(config.log_destination);
            search_warn!("Using default configuration: {}", err);
            config
        }
    };
    search_info!(
        "Starting search console suggestions={} results={}",
        config.suggestion_endpoint,
        config.search_endpoint
    );

    let source = HttpSuggestionSource::new(config.fetch_settings())
        .context("failed to build suggestion http client")?;
    let client = HttpSuggestionClient::new(source).context("failed to start fetch runtime")?;
    let mut coordinator = SearchCoordinator::new(
        SearchState::with_navigation(config.navigation()),
        client,
        Vec::new(),
    );

    console::run(
        &mut coordinator,
        io::stdin().lock(),
        io::stdout().lock(),
        SETTLE_TIMEOUT,
    )
    .context("console session failed")
}
