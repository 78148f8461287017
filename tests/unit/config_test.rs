//! Unit tests for sync configuration.

use peaksync::storage::config::SyncConfig;
use peaksync::sync::RepetitionEncoding;

#[test]
fn test_default_config() {
    let config = SyncConfig::default();
    assert_eq!(config.repetition_encoding, RepetitionEncoding::EncodeOnce);
    assert_eq!(config.workout_type, "Bike");
}

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sync.toml");

    let config = SyncConfig {
        repetition_encoding: RepetitionEncoding::Expand,
        workout_type: "Run".to_string(),
    };
    config.save(&path).unwrap();

    let loaded = SyncConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_keys_fall_back_to_defaults() {
    let config: SyncConfig = toml::from_str("").unwrap();
    assert_eq!(config, SyncConfig::default());

    let config: SyncConfig = toml::from_str("workout_type = \"Row\"\n").unwrap();
    assert_eq!(config.workout_type, "Row");
    assert_eq!(config.repetition_encoding, RepetitionEncoding::EncodeOnce);
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(SyncConfig::load(&dir.path().join("absent.toml")).is_err());
}
