use std::fs;

use tempfile::TempDir;
use wxa::core::config::{Config, DEFAULT_API_URL};

#[test]
fn test_config_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_value("default-state", "ok").unwrap();
    config.set_value("error-timeout", "8000").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.default_state.as_deref(), Some("OK"));
    assert_eq!(loaded.error_timeout_ms, 8000);
    assert_eq!(loaded.api_url, DEFAULT_API_URL);
}

#[test]
fn test_config_corrupted_or_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    fs::write(&path, "   \n").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}
