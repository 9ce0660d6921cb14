//! Logger setup for the search console.
//!
//! Stdout carries the console session, so log lines go to `search.log` unless
//! the config asks for the terminal. Terminal output is written to stderr.

use std::fs::File;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILENAME: &str = "search.log";

const LEVEL: LevelFilter = LevelFilter::Info;

/// Where log lines are written. Selected by `log_destination` in `search.ron`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    #[default]
    File,
    /// Stderr only. Lines interleave with the console prompt.
    Terminal,
    Both,
}

impl LogDestination {
    pub fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }

    pub fn writes_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }
}

/// Installs the global logger. A log file that cannot be created is reported
/// on stderr and skipped; the session runs without it.
pub fn initialize(destination: LogDestination) {
    let config = logger_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::with_capacity(2);

    if destination.writes_terminal() {
        loggers.push(TermLogger::new(
            LEVEL,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.writes_file() {
        match File::create(LOG_FILENAME) {
            Ok(file) => loggers.push(WriteLogger::new(LEVEL, config, file)),
            Err(err) => eprintln!("search: cannot open {LOG_FILENAME}: {err}"),
        }
    }

    if loggers.is_empty() {
        return;
    }
    if let Err(err) = CombinedLogger::init(loggers) {
        eprintln!("search: logger already installed: {err}");
    }
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
