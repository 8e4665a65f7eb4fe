use std::time::Duration;

use toml::Value;

use crate::config_store::{ChangeSource, ConfigStore};
use crate::overlay::testing::{RecordingWindow, WindowCall};
use crate::overlay::{
    HeadlessWindow, OverlayError, OverlayPositioningController, Point, Size, WindowEvent,
    WindowTraits, passthrough_enabled,
};
use crate::services::media::PlaybackSnapshot;
use crate::state::{DisplayMode, DisplayStateStore};

fn config_with_ignore(ignore: bool) -> ConfigStore {
    let config = ConfigStore::with_defaults();
    config
        .set_by_path(
            "behavior.ignore_pointer_when_idle",
            Value::Boolean(ignore),
            ChangeSource::Runtime,
        )
        .unwrap();
    config
}

fn controller(config: &ConfigStore) -> OverlayPositioningController<RecordingWindow> {
    OverlayPositioningController::new(RecordingWindow::new(), config.clone()).unwrap()
}

fn snapshot() -> PlaybackSnapshot {
    PlaybackSnapshot::new(
        "A",
        "Artist",
        "Album",
        Duration::from_secs(100),
        Duration::ZERO,
        true,
        None,
    )
}

#[test]
fn passthrough_truth_table() {
    for mode in DisplayMode::ALL {
        for flag in [false, true] {
            let expected = mode == DisplayMode::Idle && flag;
            assert_eq!(passthrough_enabled(mode, flag), expected, "{mode} {flag}");
        }
    }
}

#[test]
fn window_passthrough_for_every_mode_and_flag() {
    for flag in [false, true] {
        for mode in DisplayMode::ALL {
            let config = config_with_ignore(flag);
            let mut controller = controller(&config);

            controller.on_mode_change(mode).unwrap();

            let expected = mode == DisplayMode::Idle && flag;
            assert_eq!(controller.window().last_ignores_pointer(), Some(expected));
            assert_eq!(controller.ignores_pointer(), expected);
        }
    }
}

#[test]
fn new_configures_overlay_and_lays_out_idle() {
    let config = ConfigStore::with_defaults();
    let controller = controller(&config);

    let calls = &controller.window().calls;
    assert_eq!(calls[0], WindowCall::Configure(WindowTraits::OVERLAY));
    assert!(calls.contains(&WindowCall::ContentSize(Size::new(56.0, 48.0))));
    assert_eq!(
        controller.window().last_origin(),
        Some((Point::new(692.0, 37.0), None))
    );
    assert!(controller.ignores_pointer());
    assert!(!controller.is_visible());
}

#[test]
fn mode_change_animates_scaled_by_intensity() {
    let config = ConfigStore::with_defaults();
    let mut controller = controller(&config);

    controller.on_mode_change(DisplayMode::Expanded).unwrap();

    let expected = Duration::from_millis(200).div_f64(0.65);
    let (origin, animation) = controller.window().last_origin().unwrap();
    assert_eq!(animation, Some(expected));
    assert_eq!(origin, Point::new(502.0, 37.0));
    assert_eq!(controller.frame().unwrap().size, Size::new(436.0, 86.0));
}

#[test]
fn unchanged_mode_does_not_move_the_window() {
    let config = ConfigStore::with_defaults();
    let mut controller = controller(&config);
    controller.on_mode_change(DisplayMode::Compact).unwrap();
    let calls_before = controller.window().calls.len();

    controller.on_mode_change(DisplayMode::Compact).unwrap();

    assert_eq!(controller.window().calls.len(), calls_before);
}

#[test]
fn screen_change_repositions_without_animation() {
    let config = ConfigStore::with_defaults();
    let mut controller = controller(&config);
    controller.on_mode_change(DisplayMode::Compact).unwrap();

    controller.window_mut().screen = Some(HeadlessWindow::screen_of(2560.0, 1440.0));
    controller.on_screen_change().unwrap();

    assert_eq!(
        controller.window().last_origin(),
        Some((Point::new(1142.0, 37.0), None))
    );
}

#[test]
fn missing_screen_is_reported() {
    let config = ConfigStore::with_defaults();
    let mut controller = controller(&config);
    controller.window_mut().screen = None;

    let result = controller.on_screen_change();

    assert!(matches!(result, Err(OverlayError::NoScreen)));
}

#[test]
fn flag_edit_reevaluates_passthrough() {
    let config = config_with_ignore(true);
    let mut controller = controller(&config);
    assert!(controller.ignores_pointer());

    config
        .set_by_path(
            "behavior.ignore_pointer_when_idle",
            Value::Boolean(false),
            ChangeSource::Runtime,
        )
        .unwrap();
    controller.on_config_change().unwrap();

    assert_eq!(controller.window().last_ignores_pointer(), Some(false));
}

#[test]
fn focus_loss_collapses_expanded_island() {
    let config = ConfigStore::with_defaults();
    let mut store = DisplayStateStore::new(config.clone());
    let mut controller = controller(&config);
    store.snapshot_arrived(Some(snapshot()));
    controller.on_mode_change(store.mode()).unwrap();
    assert_eq!(controller.mode(), DisplayMode::Expanded);

    let transition = controller
        .handle_window_event(WindowEvent::FocusLost, &mut store)
        .unwrap();

    assert_eq!(transition.unwrap().to, DisplayMode::Compact);
    assert_eq!(controller.mode(), DisplayMode::Compact);
    assert!(!controller.ignores_pointer());
}

#[test]
fn clicks_toggle_and_screen_events_do_not_touch_the_store() {
    let config = ConfigStore::with_defaults();
    let mut store = DisplayStateStore::new(config.clone());
    let mut controller = controller(&config);
    store.snapshot_arrived(Some(snapshot()));
    controller.on_mode_change(store.mode()).unwrap();

    controller
        .handle_window_event(WindowEvent::Clicked, &mut store)
        .unwrap();
    assert_eq!(controller.mode(), DisplayMode::Compact);

    let transition = controller
        .handle_window_event(WindowEvent::ScreenParametersChanged, &mut store)
        .unwrap();
    assert_eq!(transition, None);
    assert_eq!(store.mode(), DisplayMode::Compact);
}

#[test]
fn show_and_hide_toggle_visibility() {
    let config = ConfigStore::with_defaults();
    let mut controller = controller(&config);

    controller.show().unwrap();
    assert!(controller.is_visible());

    controller.hide().unwrap();
    assert!(!controller.is_visible());
    assert_eq!(controller.window().calls.last(), Some(&WindowCall::Visible(false)));
}

#[test]
fn headless_window_tracks_geometry() {
    let config = ConfigStore::with_defaults();
    let mut controller =
        OverlayPositioningController::new(HeadlessWindow::default(), config).unwrap();

    controller.on_mode_change(DisplayMode::Compact).unwrap();

    let frame = controller.window().frame();
    assert_eq!(frame.size, Size::new(276.0, 52.0));
    assert_eq!(frame.origin, Point::new(822.0, 37.0));
    assert!(!controller.window().ignores_pointer());
}
