use std::fs;

use fluxcell::config::{Config, ConfigError};

/// Config::default() produces the documented startup values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.counter.initial, 1);
    assert_eq!(config.counter.step, 1.0);
    assert_eq!(config.ui.tick_ms, 250);
    assert!(config.validate().is_ok());
}

/// Config::config_path() returns a path ending with the expected
/// filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("fluxcell/config.toml"));
}

#[test]
fn test_load_from_round_trips_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[counter]\ninitial = -4\nstep = 3.5\n\n[ui]\ntick_ms = 50\n")
        .expect("write config");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.counter.initial, -4);
    assert_eq!(config.counter.step, 3.5);
    assert_eq!(config.ui.tick_ms, 50);
}

#[test]
fn test_validation_rejects_out_of_range_step() {
    let mut config = Config::default();
    config.counter.step = 0.5;

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("counter.step"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_zero_tick() {
    let mut config = Config::default();
    config.ui.tick_ms = 0;
    assert!(config.validate().is_err());
}
