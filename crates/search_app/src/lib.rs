//! Search app: coordinator driver, output channels, configuration and the
//! console front end.
mod config;
mod coordinator;
mod output;
pub mod platform;

pub use config::{load_config, ConfigError, SearchConfig, CONFIG_FILENAME};
pub use coordinator::SearchCoordinator;
pub use output::{OutputCallbacks, OutputSink, SearchOutput};
pub use platform::logging::LogDestination;
