//! Configuration loading tests

use moodtune_cli::{AppConfig, CliError};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moodtune.toml");
    std::fs::write(
        &path,
        r#"
[storage]
data_dir = "/var/lib/moodtune"

[playback]
tick_interval_ms = 250
"#,
    )
    .unwrap();

    let config = AppConfig::load(Some(path.as_path())).unwrap();
    config.validate().unwrap();

    assert_eq!(
        config.store_path(),
        PathBuf::from("/var/lib/moodtune/moodtune.json")
    );
    assert_eq!(config.tick_interval(), Duration::from_millis(250));
    // Untouched keys keep their defaults
    assert_eq!(config.playback.fallback_duration_secs, 30);
    assert_eq!(config.artwork.cache_size, 64);
}

#[test]
fn invalid_file_values_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moodtune.toml");
    std::fs::write(&path, "[artwork]\ncache_size = 0\n").unwrap();

    let config = AppConfig::load(Some(path.as_path())).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, CliError::Config(ref msg) if msg.contains("cache_size")));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
