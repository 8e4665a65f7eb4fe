use std::fmt;

use serde::Serialize;

use crate::config::BehaviorConfig;
use crate::services::media::PlaybackSnapshot;

/// Which presentation the island currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Nothing to show; a small transparent hit target
    Idle,

    /// The compact pill
    Compact,

    /// The full island with artwork and controls
    Expanded,
}

impl DisplayMode {
    /// All modes, for exhaustive iteration
    pub const ALL: [DisplayMode; 3] = [Self::Idle, Self::Compact, Self::Expanded];
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            Self::Idle => "idle",
            Self::Compact => "compact",
            Self::Expanded => "expanded",
        };
        write!(f, "{mode}")
    }
}

/// Whether there is anything to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentPresence {
    /// Nothing is playing
    None,

    /// A media snapshot is available
    Media,
}

/// Inputs accepted by the display state machine
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayInput {
    /// The polling service published a new observation
    SnapshotArrived(Option<PlaybackSnapshot>),

    /// The user clicked the island
    ToggleExpansion,

    /// The overlay lost focus or the user asked it to collapse
    CollapseRequest,

    /// The pointer entered the island
    HoverEnter,
}

/// A mode change produced by an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    /// Mode before the input
    pub from: DisplayMode,

    /// Mode after the input
    pub to: DisplayMode,
}

/// Visual knobs handed to the renderer alongside the mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualSettings {
    /// Transition speed multiplier in 0.2..=1.0
    pub animation_intensity: f64,

    /// Blurred material behind the pill
    pub blur_enabled: bool,

    /// Soft glow around the pill
    pub glow_enabled: bool,
}

impl From<&BehaviorConfig> for VisualSettings {
    fn from(behavior: &BehaviorConfig) -> Self {
        Self {
            animation_intensity: behavior.animation_intensity(),
            blur_enabled: behavior.blur_enabled,
            glow_enabled: behavior.glow_enabled,
        }
    }
}

/// Everything the renderer needs to draw the island
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// Current display mode
    pub mode: DisplayMode,

    /// Whether content is present
    pub content: ContentPresence,

    /// The snapshot being shown, if any
    pub snapshot: Option<PlaybackSnapshot>,

    /// Renderer knobs
    pub visuals: VisualSettings,
}

impl DisplayState {
    /// An idle state with nothing to show
    pub fn idle(behavior: &BehaviorConfig) -> Self {
        Self {
            mode: DisplayMode::Idle,
            content: ContentPresence::None,
            snapshot: None,
            visuals: VisualSettings::from(behavior),
        }
    }

    /// Whether a snapshot is being shown
    pub fn has_content(&self) -> bool {
        self.content == ContentPresence::Media
    }

    /// Apply one input under the given behavior flags, returning the mode
    /// change it caused, if any.
    ///
    /// Content absence always forces `Idle`; no input can leave the island
    /// in another mode without content.
    pub fn apply(&mut self, input: DisplayInput, behavior: &BehaviorConfig) -> Option<ModeTransition> {
        let from = self.mode;

        let to = match input {
            DisplayInput::SnapshotArrived(Some(snapshot)) => {
                self.snapshot = Some(snapshot);
                self.content = ContentPresence::Media;
                if behavior.auto_expand_on_play {
                    DisplayMode::Expanded
                } else if from == DisplayMode::Idle {
                    DisplayMode::Compact
                } else {
                    from
                }
            }
            DisplayInput::SnapshotArrived(None) => {
                self.snapshot = None;
                self.content = ContentPresence::None;
                DisplayMode::Idle
            }
            DisplayInput::ToggleExpansion => match from {
                DisplayMode::Idle if self.has_content() => DisplayMode::Compact,
                DisplayMode::Idle => DisplayMode::Idle,
                DisplayMode::Compact => DisplayMode::Expanded,
                DisplayMode::Expanded => settle(self.content),
            },
            DisplayInput::CollapseRequest => settle(self.content),
            DisplayInput::HoverEnter => {
                if behavior.hover_to_expand && self.has_content() {
                    DisplayMode::Expanded
                } else {
                    from
                }
            }
        };

        let to = match self.content {
            ContentPresence::None => DisplayMode::Idle,
            ContentPresence::Media => to,
        };
        self.mode = to;

        (from != to).then_some(ModeTransition { from, to })
    }
}

fn settle(content: ContentPresence) -> DisplayMode {
    match content {
        ContentPresence::None => DisplayMode::Idle,
        ContentPresence::Media => DisplayMode::Compact,
    }
}
