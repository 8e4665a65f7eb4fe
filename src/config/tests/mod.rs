//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]

use std::time::Duration;

use crate::IslandError;
use crate::config::{Config, LogLevel, PlayerObservation, PollingConfig};

#[test]
fn config_default_is_valid() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(config.behavior.auto_expand_on_play);
    assert!(config.behavior.ignore_pointer_when_idle);
    assert!(!config.behavior.hover_to_expand);
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[behavior]"));
    assert!(toml_str.contains("[polling]"));
    assert!(toml_str.contains("[overlay]"));
}

#[test]
fn config_deserialize_partial_toml_fills_defaults() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [behavior]
        hover_to_expand = true
    "#;

    let config = Config::from_toml_str(toml_str, None).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert!(config.behavior.hover_to_expand);
    assert!(config.behavior.auto_expand_on_play);
    assert_eq!(config.polling, PollingConfig::default());
}

#[test]
fn config_rejects_malformed_toml() {
    let result = Config::from_toml_str("[behavior\nhover_to_expand = true", None);

    assert!(matches!(result, Err(IslandError::TomlParseError { .. })));
}

#[test]
fn interval_ordering_holds_for_defaults() {
    let polling = PollingConfig::default();

    let playing = polling.interval_for(PlayerObservation::Playing);
    let paused = polling.interval_for(PlayerObservation::Paused);
    let stopped = polling.interval_for(PlayerObservation::Stopped);
    let absent = polling.interval_for(PlayerObservation::Absent);

    assert_eq!(playing, Duration::from_secs(1));
    assert!(playing < paused);
    assert!(paused <= stopped);
    assert!(paused <= absent);
}

#[test]
fn validation_rejects_inverted_intervals() {
    let toml_str = r#"
        [polling]
        playing_interval_ms = 5000
        paused_interval_ms = 1000
    "#;

    let result = Config::from_toml_str(toml_str, None);

    assert!(matches!(
        result,
        Err(IslandError::ConfigValidation { ref component, .. }) if component == "polling"
    ));
}

#[test]
fn validation_rejects_paused_slower_than_absent() {
    let mut config = Config::default();
    config.polling.paused_interval_ms = 9_000;

    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_zero_cache_capacity() {
    let mut config = Config::default();
    config.polling.artwork_cache_capacity = 0;

    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_degenerate_overlay_sizes() {
    let mut config = Config::default();
    config.overlay.compact_size.width = 0.0;

    assert!(matches!(
        config.validate(),
        Err(IslandError::ConfigValidation { ref component, .. }) if component == "overlay"
    ));
}

#[test]
fn animation_intensity_is_clamped() {
    let mut config = Config::default();

    config.behavior.animation_intensity = 5.0;
    assert_eq!(config.behavior.animation_intensity(), 1.0);

    config.behavior.animation_intensity = 0.0;
    assert_eq!(config.behavior.animation_intensity(), 0.2);
}
