//! Integration tests for configuration serialization.

use pitchdeck::config::{Config, ThemeMode};
use std::fs;

#[test]
fn test_config_round_trips_through_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::new();
    config.content.enabled = true;
    config.content.api_url = "https://cms.example.com/wp-json/wp/v2".to_string();
    config.ui.theme_mode = ThemeMode::Dark;

    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
    let parsed: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_default_config_has_content_disabled() {
    let config = Config::default();
    assert!(!config.content.enabled);
    assert!(config.ui.mouse);
}

#[test]
fn test_config_parses_from_toml_text() {
    let parsed: Config = toml::from_str(
        r#"
        [content]
        api_url = "https://cms.example.com/wp-json/wp/v2"
        enabled = true

        [ui]
        theme_mode = "Dark"
        mouse = false
        "#,
    )
    .unwrap();
    assert!(parsed.content.enabled);
    assert_eq!(parsed.ui.theme_mode, ThemeMode::Dark);
    assert!(!parsed.ui.mouse);
}
