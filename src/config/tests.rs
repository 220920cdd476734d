//! Unit tests for configuration loading.

use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config_template_matches_defaults() {
    let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_partial_config_fills_defaults() {
    let parsed: Config = toml::from_str(
        r#"
        [voice]
        wake_phrase = "hey computer"

        [desktop]
        width = 1280
        "#,
    )
    .unwrap();

    assert_eq!(parsed.voice.wake_phrase, "hey computer");
    assert_eq!(parsed.voice.capture_window_ms, 6000);
    assert_eq!(parsed.desktop.width, 1280);
    assert_eq!(parsed.desktop.height, 600);
    assert_eq!(parsed.transcript.history_limit, 5);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.transcript.history_limit = 9;
    config.history.api_base_url = "http://127.0.0.1:9".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load(Some(&path)).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[desktop]\nwidth = \"wide\"\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}
