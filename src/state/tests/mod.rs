use std::time::Duration;

use toml::Value;

use crate::config::BehaviorConfig;
use crate::config_store::{ChangeSource, ConfigStore};
use crate::services::media::PlaybackSnapshot;
use crate::state::{
    ContentPresence, DisplayInput, DisplayMode, DisplayState, DisplayStateStore, ModeTransition,
};

fn snapshot(title: &str, playing: bool) -> PlaybackSnapshot {
    PlaybackSnapshot::new(
        title,
        "Artist",
        "Album",
        Duration::from_secs(180),
        Duration::from_secs(30),
        playing,
        None,
    )
}

fn store_with(auto_expand: bool, hover: bool) -> DisplayStateStore {
    let config = ConfigStore::with_defaults();
    config
        .set_by_path(
            "behavior.auto_expand_on_play",
            Value::Boolean(auto_expand),
            ChangeSource::Runtime,
        )
        .unwrap();
    config
        .set_by_path(
            "behavior.hover_to_expand",
            Value::Boolean(hover),
            ChangeSource::Runtime,
        )
        .unwrap();
    DisplayStateStore::new(config)
}

fn inputs() -> Vec<DisplayInput> {
    vec![
        DisplayInput::SnapshotArrived(Some(snapshot("A", true))),
        DisplayInput::SnapshotArrived(None),
        DisplayInput::ToggleExpansion,
        DisplayInput::CollapseRequest,
        DisplayInput::HoverEnter,
    ]
}

fn behavior(auto_expand: bool, hover: bool) -> BehaviorConfig {
    BehaviorConfig {
        auto_expand_on_play: auto_expand,
        hover_to_expand: hover,
        ..BehaviorConfig::default()
    }
}

#[test]
fn idle_iff_no_content_for_every_input_sequence() {
    for auto_expand in [false, true] {
        for hover in [false, true] {
            let behavior = behavior(auto_expand, hover);
            let mut frontier = vec![DisplayState::idle(&behavior)];

            for _depth in 0..4 {
                let mut next = Vec::new();
                for state in &frontier {
                    for input in inputs() {
                        let mut state = state.clone();
                        state.apply(input.clone(), &behavior);

                        assert_eq!(
                            state.mode == DisplayMode::Idle,
                            state.content == ContentPresence::None,
                            "auto_expand={auto_expand} hover={hover} input={input:?} -> {state:?}"
                        );
                        assert_eq!(state.snapshot.is_some(), state.has_content());
                        next.push(state);
                    }
                }
                frontier = next;
            }
        }
    }
}

#[test]
fn no_snapshot_keeps_idle_until_content_arrives() {
    let mut store = store_with(true, true);
    store.snapshot_arrived(Some(snapshot("A", true)));

    store.snapshot_arrived(None);
    assert_eq!(store.mode(), DisplayMode::Idle);

    for input in [
        DisplayInput::ToggleExpansion,
        DisplayInput::CollapseRequest,
        DisplayInput::HoverEnter,
        DisplayInput::SnapshotArrived(None),
    ] {
        store.apply(input);
        assert_eq!(store.mode(), DisplayMode::Idle);
    }

    store.snapshot_arrived(Some(snapshot("B", true)));
    assert_eq!(store.mode(), DisplayMode::Expanded);
}

#[test]
fn toggle_on_fresh_store_is_a_no_op() {
    let mut store = store_with(true, false);

    assert_eq!(store.toggle_expansion(), None);
    assert_eq!(store.mode(), DisplayMode::Idle);
    assert_eq!(store.content(), ContentPresence::None);
}

#[test]
fn collapse_from_expanded_with_content_is_compact() {
    let mut store = store_with(true, false);
    store.snapshot_arrived(Some(snapshot("A", true)));
    assert_eq!(store.mode(), DisplayMode::Expanded);

    let transition = store.collapse();

    assert_eq!(
        transition,
        Some(ModeTransition {
            from: DisplayMode::Expanded,
            to: DisplayMode::Compact
        })
    );
    assert_eq!(store.collapse(), None);
    assert_eq!(store.mode(), DisplayMode::Compact);
}

#[test]
fn toggle_cycles_through_compact_and_expanded() {
    let mut store = store_with(false, false);
    store.snapshot_arrived(Some(snapshot("A", false)));
    assert_eq!(store.mode(), DisplayMode::Compact);

    store.toggle_expansion();
    assert_eq!(store.mode(), DisplayMode::Expanded);

    store.toggle_expansion();
    assert_eq!(store.mode(), DisplayMode::Compact);

    store.toggle_expansion();
    assert_eq!(store.mode(), DisplayMode::Expanded);
}

#[test]
fn updates_without_auto_expand_never_demote() {
    let mut store = store_with(false, false);
    store.snapshot_arrived(Some(snapshot("A", true)));
    store.toggle_expansion();
    assert_eq!(store.mode(), DisplayMode::Expanded);

    assert_eq!(store.snapshot_arrived(Some(snapshot("A", false))), None);
    assert_eq!(store.mode(), DisplayMode::Expanded);
    assert!(!store.current().snapshot.as_ref().unwrap().is_playing());
}

#[test]
fn auto_expand_expands_on_every_snapshot() {
    let mut store = store_with(true, false);
    store.snapshot_arrived(Some(snapshot("A", true)));
    store.collapse();
    assert_eq!(store.mode(), DisplayMode::Compact);

    store.snapshot_arrived(Some(snapshot("A", true)));

    assert_eq!(store.mode(), DisplayMode::Expanded);
}

#[test]
fn hover_only_expands_when_enabled() {
    let mut disabled = store_with(false, false);
    disabled.snapshot_arrived(Some(snapshot("A", true)));
    assert_eq!(disabled.hover_enter(), None);
    assert_eq!(disabled.mode(), DisplayMode::Compact);

    let mut enabled = store_with(false, true);
    enabled.snapshot_arrived(Some(snapshot("A", true)));
    assert_eq!(
        enabled.hover_enter(),
        Some(ModeTransition {
            from: DisplayMode::Compact,
            to: DisplayMode::Expanded
        })
    );

    let mut empty = store_with(false, true);
    assert_eq!(empty.hover_enter(), None);
    assert_eq!(empty.mode(), DisplayMode::Idle);
}

#[test]
fn behavior_edits_apply_to_the_next_input() {
    let mut store = store_with(true, false);
    store.snapshot_arrived(Some(snapshot("A", true)));
    store.collapse();

    store
        .config()
        .set_by_path(
            "behavior.auto_expand_on_play",
            Value::Boolean(false),
            ChangeSource::Runtime,
        )
        .unwrap();
    store.snapshot_arrived(Some(snapshot("A", true)));

    assert_eq!(store.mode(), DisplayMode::Compact);
}

#[test]
fn published_state_follows_inputs() {
    let mut store = store_with(true, false);
    let mut rx = store.subscribe();
    rx.borrow_and_update();

    store.snapshot_arrived(Some(snapshot("A", true)));

    assert!(rx.has_changed().unwrap());
    let published = rx.borrow_and_update().clone();
    assert_eq!(published.mode, DisplayMode::Expanded);
    assert_eq!(published.snapshot.unwrap().title(), "A");
}

#[test]
fn refresh_visuals_publishes_clamped_intensity() {
    let mut store = store_with(true, false);
    store
        .config()
        .set_by_path(
            "behavior.animation_intensity",
            Value::Float(5.0),
            ChangeSource::Runtime,
        )
        .unwrap();

    store.refresh_visuals();

    assert_eq!(store.current().visuals.animation_intensity, 1.0);
}
