use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const MIN_ANIMATION_INTENSITY: f64 = 0.2;
const MAX_ANIMATION_INTENSITY: f64 = 1.0;

/// Behavior toggles consumed by the display state machine and the overlay.
///
/// These are owned by the configuration file, not by the components that
/// read them. Components look them up at the moment they need them, so an
/// edit to the file takes effect on the next input without a reload call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Expand the island whenever a snapshot arrives.
    pub auto_expand_on_play: bool,

    /// Let pointer input pass through the overlay while it is idle.
    pub ignore_pointer_when_idle: bool,

    /// Expand the island when the pointer enters it.
    pub hover_to_expand: bool,

    /// Speed multiplier for transitions, clamped to 0.2..=1.0.
    pub animation_intensity: f64,

    /// Render a blurred material behind the pill.
    pub blur_enabled: bool,

    /// Render a soft glow around the pill.
    pub glow_enabled: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            auto_expand_on_play: true,
            ignore_pointer_when_idle: true,
            hover_to_expand: false,
            animation_intensity: 0.65,
            blur_enabled: true,
            glow_enabled: true,
        }
    }
}

impl BehaviorConfig {
    /// Animation intensity clamped into its supported range.
    pub fn animation_intensity(&self) -> f64 {
        if self.animation_intensity.is_nan() {
            return MAX_ANIMATION_INTENSITY;
        }
        self.animation_intensity
            .clamp(MIN_ANIMATION_INTENSITY, MAX_ANIMATION_INTENSITY)
    }
}
