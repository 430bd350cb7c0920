//! Configuration file loading.

mod support;

use std::fs;
use std::time::Duration;

use support::fixtures::BotDir;
use tarotbot::error::{ConfigError, Error};
use tarotbot::infrastructure::config::Config;

#[test]
fn loads_a_deployment_config() {
    let dir = BotDir::new();
    let path = dir.write_config(120);

    let config = Config::load(&path).unwrap();

    assert_eq!(config.cache_duration(), Duration::from_secs(120));
    assert_eq!(config.assets.cards_dir, dir.path().join("images/open"));
    assert_eq!(config.predictions.path, dir.path().join("predictions.json"));
}

#[test]
fn missing_file_is_an_error_for_load() {
    let dir = BotDir::new();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = BotDir::new();
    let (config, found) = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert!(!found);
    assert_eq!(config.cache_duration(), Duration::from_secs(3600));
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = BotDir::new();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[history\ncache_duration_secs = 5").unwrap();

    let result = Config::load(&path);
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn unknown_log_format_is_rejected() {
    let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
    ));
}
