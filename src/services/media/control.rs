use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{MediaError, PlayerBridge, TransportCommand};

/// Transport commands for the external player.
///
/// The shorthand methods are fire-and-forget: the command runs on a
/// background task and a failure is only logged. Use [`send`](Self::send)
/// to await the outcome.
#[derive(Clone)]
pub struct TransportControl {
    bridge: Arc<dyn PlayerBridge>,
}

impl TransportControl {
    /// Create a transport control over `bridge`
    pub fn new(bridge: Arc<dyn PlayerBridge>) -> Self {
        Self { bridge }
    }

    /// Toggle between playing and paused
    pub fn play_pause(&self) {
        self.dispatch(TransportCommand::PlayPause);
    }

    /// Skip to the next track
    pub fn next_track(&self) {
        self.dispatch(TransportCommand::NextTrack);
    }

    /// Go back to the previous track
    pub fn previous_track(&self) {
        self.dispatch(TransportCommand::PreviousTrack);
    }

    /// Send a command and wait for the bridge to accept it
    ///
    /// # Errors
    /// Returns error if the bridge fails to deliver the command
    #[instrument(skip(self))]
    pub async fn send(&self, command: TransportCommand) -> Result<(), MediaError> {
        self.bridge.send(command).await?;
        debug!("Transport command sent");
        Ok(())
    }

    /// Spawn `command` without waiting for it; must be called within a
    /// Tokio runtime
    pub fn dispatch(&self, command: TransportCommand) {
        let control = self.clone();
        tokio::spawn(async move {
            if let Err(e) = control.send(command).await {
                warn!(?command, error = %e, "Transport command failed");
            }
        });
    }
}
