use std::fs;

use focus_pilot::config::PilotConfig;
use focus_pilot::error::PilotError;

#[test]
fn test_default_config() {
    let config = PilotConfig::default();

    assert_eq!(config.budget.daily_minutes, 480);
    assert_eq!(config.budget.used_minutes, 0);
    assert_eq!(config.missions.id_prefix, "m");
    assert!(config.display.show_rationale);
    assert!(!config.display.show_history);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PilotConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, PilotConfig::default());
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        PilotConfig::load_or_default(Some(&path)),
        Err(PilotError::Config(_))
    ));
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focus-pilot.toml");

    let mut config = PilotConfig::default();
    config.budget.daily_minutes = 360;
    config.missions.id_prefix = "task".to_string();
    config.display.show_history = true;
    config.save(&path).unwrap();

    let loaded = PilotConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focus-pilot.toml");
    fs::write(&path, "[budget]\ndaily_minutes = 0\n").unwrap();

    let err = PilotConfig::load(&path).unwrap_err();
    assert!(matches!(err, PilotError::Config(ref msg) if msg.contains("daily_minutes")));
}

#[test]
fn test_malformed_toml_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focus-pilot.toml");
    fs::write(&path, "[budget\ndaily_minutes = 10\n").unwrap();

    assert!(matches!(PilotConfig::load(&path), Err(PilotError::Toml(_))));
}
