//! Media player polling and control.
//!
//! [`MediaPollingService`] mirrors the external player's state into a
//! latest-value [`PlaybackSnapshot`] slot; [`TransportControl`] sends
//! play/pause and skip commands. Both talk to the player only through the
//! [`PlayerBridge`] trait.

mod applescript;
mod artwork;
mod bridge;
mod control;
mod error;
mod metadata;
mod polling;
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing;
mod types;

pub use applescript::AppleScriptBridge;
pub use artwork::{ArtworkCache, decode_artwork};
pub use bridge::{PlayerBridge, TransportCommand};
pub use control::TransportControl;
pub use error::MediaError;
pub use metadata::TrackMetadata;
pub use polling::{MediaPollingService, Poller, TickOutcome};
pub use types::{Artwork, PlaybackSnapshot, PlayerState, TrackId};
