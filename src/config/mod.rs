//! Configuration schema definitions and validation.
//!
//! Defines the complete configuration structure for the media island:
//! general settings, the behavior toggles read live by the display state
//! machine and overlay controller, polling cadence, and overlay geometry.
//! All configurations are serializable to/from TOML format.

mod behavior;
mod general;
mod loading;
mod overlay;
mod paths;
mod polling;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

pub use behavior::BehaviorConfig;
pub use general::{GeneralConfig, LogLevel};
pub use overlay::{OverlayConfig, OverlaySize};
pub use paths::ConfigPaths;
pub use polling::{PlayerObservation, PollingConfig};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the media island.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// User-facing behavior toggles and visual knobs.
    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// Media player polling settings.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Overlay window geometry.
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Checks cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns `IslandError::ConfigValidation` naming the offending section.
    pub fn validate(&self) -> crate::Result<()> {
        self.polling.validate()?;
        self.overlay.validate()?;
        Ok(())
    }
}
