//! Unit tests for config_store module
//! No filesystem, timing, or external dependencies.

#![allow(clippy::panic)]


use futures::StreamExt;
use toml::Value;

use crate::config::Config;
use crate::config_store::{ChangeSource, ConfigError, ConfigStore};

#[test]
fn get_by_path_reads_nested_values() {
    let store = ConfigStore::with_defaults();

    let flag = store.get_by_path("behavior.ignore_pointer_when_idle").unwrap();
    assert_eq!(flag, Value::Boolean(true));

    let width = store.get_by_path("overlay.expanded_size.width").unwrap();
    assert_eq!(width.as_float(), Some(420.0));
}

#[test]
fn get_by_path_rejects_unknown_keys() {
    let store = ConfigStore::with_defaults();

    let result = store.get_by_path("behavior.does_not_exist");

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

#[test]
fn set_by_path_updates_typed_accessors() {
    let store = ConfigStore::with_defaults();

    store
        .set_by_path("behavior.hover_to_expand", Value::Boolean(true), ChangeSource::Runtime)
        .unwrap();

    assert!(store.behavior().hover_to_expand);
    assert!(store.get_current().behavior.hover_to_expand);
}

#[test]
fn clones_share_state() {
    let store = ConfigStore::with_defaults();
    let handle = store.clone();

    store
        .set_by_path("behavior.auto_expand_on_play", Value::Boolean(false), ChangeSource::Runtime)
        .unwrap();

    assert!(!handle.behavior().auto_expand_on_play);
}

#[test]
fn set_by_path_rejects_wrong_type() {
    let store = ConfigStore::with_defaults();

    let result = store.set_by_path(
        "behavior.hover_to_expand",
        Value::String("yes".to_string()),
        ChangeSource::Runtime,
    );

    assert!(matches!(result, Err(ConfigError::DeserializationError { .. })));
    assert!(!store.behavior().hover_to_expand);
}

#[test]
fn set_by_path_rejects_invalid_configuration() {
    let store = ConfigStore::with_defaults();

    let result = store.set_by_path(
        "polling.playing_interval_ms",
        Value::Integer(10_000),
        ChangeSource::Runtime,
    );

    assert!(matches!(result, Err(ConfigError::DeserializationError { .. })));
    assert_eq!(store.polling().playing_interval_ms, 1_000);
}

#[test]
fn save_without_backing_file_fails() {
    let store = ConfigStore::with_defaults();

    assert!(matches!(store.save(), Err(ConfigError::PersistenceError { .. })));
}

#[tokio::test]
async fn subscribers_receive_matching_changes_only() {
    let store = ConfigStore::with_defaults();
    let mut behavior_changes = Box::pin(store.subscribe_to_path("behavior.*"));

    store
        .set_by_path("overlay.top_inset", Value::Float(20.0), ChangeSource::Runtime)
        .unwrap();
    store
        .set_by_path("behavior.hover_to_expand", Value::Boolean(true), ChangeSource::Runtime)
        .unwrap();

    let change = behavior_changes.next().await.unwrap();
    assert_eq!(change.path, "behavior.hover_to_expand");
    assert_eq!(change.old_value, Some(Value::Boolean(false)));
    assert_eq!(change.as_bool(), Some(true));
}

#[tokio::test]
async fn replace_broadcasts_each_changed_field() {
    let store = ConfigStore::with_defaults();
    let mut all_changes = Box::pin(store.subscribe_to_path("*"));

    let mut updated = Config::default();
    updated.behavior.ignore_pointer_when_idle = false;
    updated.behavior.glow_enabled = false;
    store.replace(updated, ChangeSource::FileReload).unwrap();

    let first = all_changes.next().await.unwrap();
    let second = all_changes.next().await.unwrap();

    assert_eq!(first.path, "behavior.glow_enabled");
    assert_eq!(second.path, "behavior.ignore_pointer_when_idle");
    assert_eq!(second.source, ChangeSource::FileReload);
    assert!(!store.behavior().ignore_pointer_when_idle);
}

#[test]
fn unchanged_value_is_not_broadcast() {
    let store = ConfigStore::with_defaults();
    let mut receiver = store.change_sender_for_tests();

    store
        .set_by_path("behavior.blur_enabled", Value::Boolean(true), ChangeSource::Runtime)
        .unwrap();

    assert!(receiver.try_recv().is_err());
}
