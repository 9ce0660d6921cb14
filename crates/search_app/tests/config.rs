use std::fs;
use std::time::Duration;

use search_app::{load_config, ConfigError, LogDestination, SearchConfig};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = load_config(&dir.path().join("search.ron")).expect("defaults");
    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.suggestion_endpoint, "https://api.bing.com/osjson.aspx");
    assert_eq!(config.search_endpoint, "https://www.bing.com/search");
}

#[test]
fn partial_file_overrides_only_given_fields() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("search.ron");
    fs::write(
        &path,
        r#"(
            suggestion_endpoint: "https://suggest.example.com/complete",
            request_timeout_ms: 750,
            log_destination: Both,
        )"#,
    )
    .expect("write config");

    let config = load_config(&path).expect("config");

    assert_eq!(config.suggestion_endpoint, "https://suggest.example.com/complete");
    assert_eq!(config.suggestion_param, "query");
    assert_eq!(config.log_destination, LogDestination::Both);

    let settings = config.fetch_settings();
    assert_eq!(settings.endpoint, "https://suggest.example.com/complete");
    assert_eq!(settings.request_timeout, Duration::from_millis(750));
    assert_eq!(settings.connect_timeout, Duration::from_millis(5_000));
    assert!(settings
        .allowed_content_types
        .iter()
        .any(|ct| ct == "application/json"));
}

#[test]
fn navigation_follows_configured_endpoint() {
    let config = SearchConfig {
        search_endpoint: "https://duckduckgo.com/".to_string(),
        ..SearchConfig::default()
    };
    let url = config
        .navigation()
        .build_search_url("rust lang")
        .expect("valid url");
    assert_eq!(url.as_str(), "https://duckduckgo.com/?q=rust+lang");
}

#[test]
fn unparsable_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("search.ron");
    fs::write(&path, "(suggestion_endpoint: 42").expect("write config");

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn directory_path_is_a_read_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_config(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }), "{err}");
}
