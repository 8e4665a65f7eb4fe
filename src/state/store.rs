use futures::Stream;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::{ContentPresence, DisplayInput, DisplayMode, DisplayState, ModeTransition, VisualSettings};
use crate::config_store::ConfigStore;
use crate::services::common::Property;
use crate::services::media::PlaybackSnapshot;

/// Single source of truth for what the overlay shows.
///
/// Owned by the foreground context and mutated only there, so it holds no
/// locks. Behavior flags are read from the [`ConfigStore`] at the moment an
/// input is applied, which makes configuration edits effective on the next
/// input. Every change is published to watchers.
pub struct DisplayStateStore {
    config: ConfigStore,
    state: DisplayState,
    published: Property<DisplayState>,
}

impl DisplayStateStore {
    /// Create an idle store reading behavior flags from `config`
    pub fn new(config: ConfigStore) -> Self {
        let state = DisplayState::idle(&config.behavior());
        Self {
            published: Property::new(state.clone()),
            config,
            state,
        }
    }

    /// Apply an input and publish the result
    #[instrument(skip(self, input), fields(input = input_name(&input)))]
    pub fn apply(&mut self, input: DisplayInput) -> Option<ModeTransition> {
        let behavior = self.config.behavior();
        let transition = self.state.apply(input, &behavior);
        self.state.visuals = VisualSettings::from(&behavior);

        if let Some(transition) = transition {
            debug!(from = %transition.from, to = %transition.to, "Display mode changed");
        }

        self.published.set(self.state.clone());
        transition
    }

    /// A new observation from the polling service
    pub fn snapshot_arrived(&mut self, snapshot: Option<PlaybackSnapshot>) -> Option<ModeTransition> {
        self.apply(DisplayInput::SnapshotArrived(snapshot))
    }

    /// Cycle Idle → Compact → Expanded → Compact, honouring content presence
    pub fn toggle_expansion(&mut self) -> Option<ModeTransition> {
        self.apply(DisplayInput::ToggleExpansion)
    }

    /// Collapse to Compact, or to Idle when nothing is playing
    pub fn collapse(&mut self) -> Option<ModeTransition> {
        self.apply(DisplayInput::CollapseRequest)
    }

    /// Expand on hover, when hover-to-expand is enabled
    pub fn hover_enter(&mut self) -> Option<ModeTransition> {
        self.apply(DisplayInput::HoverEnter)
    }

    /// Re-read the visual knobs from configuration and publish them
    pub fn refresh_visuals(&mut self) {
        self.state.visuals = VisualSettings::from(&self.config.behavior());
        self.published.set(self.state.clone());
    }

    /// Current state
    pub fn current(&self) -> &DisplayState {
        &self.state
    }

    /// Current display mode
    pub fn mode(&self) -> DisplayMode {
        self.state.mode
    }

    /// Current content presence
    pub fn content(&self) -> ContentPresence {
        self.state.content
    }

    /// Configuration the store reads behavior flags from
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Stream of published states, starting with the current one
    pub fn watch(&self) -> impl Stream<Item = DisplayState> + Send + use<> {
        self.published.watch()
    }

    /// Receiver for published states
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.published.subscribe()
    }
}

fn input_name(input: &DisplayInput) -> &'static str {
    match input {
        DisplayInput::SnapshotArrived(Some(_)) => "snapshot",
        DisplayInput::SnapshotArrived(None) => "no_snapshot",
        DisplayInput::ToggleExpansion => "toggle",
        DisplayInput::CollapseRequest => "collapse",
        DisplayInput::HoverEnter => "hover",
    }
}
