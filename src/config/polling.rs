use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{IslandError, Result};

/// Media player polling configuration.
///
/// Interval ordering must hold: playing < paused <= absent. Querying the
/// player costs real time, so the loop backs off in the states that change
/// rarely.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PollingConfig {
    /// Name the player answers to in scripts (`tell application "<name>"`).
    pub player_app_name: String,

    /// Bundle identifier of the player, used for display and diagnostics.
    pub player_bundle_id: String,

    /// Process name matched against the OS process list.
    pub process_name: String,

    /// Tick interval while the player is playing.
    pub playing_interval_ms: u64,

    /// Tick interval while the player is paused or stopped.
    pub paused_interval_ms: u64,

    /// Tick interval while the player is not running.
    pub absent_interval_ms: u64,

    /// Upper bound for a single bridge query.
    pub query_timeout_ms: u64,

    /// Number of tracks whose artwork is kept in memory.
    pub artwork_cache_capacity: usize,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            player_app_name: "Music".to_string(),
            player_bundle_id: "com.apple.Music".to_string(),
            process_name: "Music".to_string(),
            playing_interval_ms: 1_000,
            paused_interval_ms: 4_000,
            absent_interval_ms: 5_000,
            query_timeout_ms: 3_000,
            artwork_cache_capacity: 64,
        }
    }
}

/// What a single tick learned about the player, for interval selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerObservation {
    /// The player process is not running.
    Absent,
    /// Running, but nothing is loaded.
    Stopped,
    /// A track is loaded and paused.
    Paused,
    /// A track is playing.
    Playing,
}

impl PollingConfig {
    /// Delay before the next tick after observing `observation`.
    pub fn interval_for(&self, observation: PlayerObservation) -> Duration {
        let millis = match observation {
            PlayerObservation::Playing => self.playing_interval_ms,
            PlayerObservation::Paused | PlayerObservation::Stopped => self.paused_interval_ms,
            PlayerObservation::Absent => self.absent_interval_ms,
        };
        Duration::from_millis(millis)
    }

    /// Timeout applied to every bridge query.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub(super) fn validate(&self) -> Result<()> {
        if self.playing_interval_ms == 0 {
            return Err(IslandError::validation(
                "polling",
                "playing_interval_ms must be greater than zero",
            ));
        }

        if self.playing_interval_ms >= self.paused_interval_ms {
            return Err(IslandError::validation(
                "polling",
                format!(
                    "playing_interval_ms ({}) must be shorter than paused_interval_ms ({})",
                    self.playing_interval_ms, self.paused_interval_ms
                ),
            ));
        }

        if self.paused_interval_ms > self.absent_interval_ms {
            return Err(IslandError::validation(
                "polling",
                format!(
                    "paused_interval_ms ({}) must not exceed absent_interval_ms ({})",
                    self.paused_interval_ms, self.absent_interval_ms
                ),
            ));
        }

        if self.query_timeout_ms == 0 {
            return Err(IslandError::validation(
                "polling",
                "query_timeout_ms must be greater than zero",
            ));
        }

        if self.artwork_cache_capacity == 0 {
            return Err(IslandError::validation(
                "polling",
                "artwork_cache_capacity must be at least 1",
            ));
        }

        Ok(())
    }
}
