use async_trait::async_trait;

use super::{MediaError, PlayerState};

/// One-way transport commands understood by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    /// Toggle between playing and paused
    PlayPause,

    /// Skip to the next track
    NextTrack,

    /// Go back to the previous track
    PreviousTrack,
}

/// Capability interface over the external player.
///
/// The polling loop and transport control only talk to the player through
/// this trait, so they can be driven by a fake in tests.
#[async_trait]
pub trait PlayerBridge: Send + Sync {
    /// Whether the player process is currently running
    ///
    /// # Errors
    /// Returns error if the process list cannot be queried
    async fn is_running(&self) -> Result<bool, MediaError>;

    /// Current player state
    ///
    /// # Errors
    /// Returns error if the bridge query fails
    async fn player_state(&self) -> Result<PlayerState, MediaError>;

    /// Raw now-playing response: six `|`-joined fields (title, artist,
    /// album, duration seconds, position seconds, track id), or an empty
    /// string when no track is loaded
    ///
    /// # Errors
    /// Returns error if the bridge query fails
    async fn now_playing(&self) -> Result<String, MediaError>;

    /// Encoded artwork bytes for the current track, empty when it has none
    ///
    /// # Errors
    /// Returns error if the bridge query fails
    async fn artwork(&self) -> Result<Vec<u8>, MediaError>;

    /// Send a transport command, without waiting for any response
    ///
    /// # Errors
    /// Returns error if the command could not be delivered
    async fn send(&self, command: TransportCommand) -> Result<(), MediaError>;
}
