use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use image::RgbaImage;
use serde::{Serialize, Serializer};

/// Stable identifier of a track as reported by the player.
///
/// Artwork is cached by this id rather than by title/artist, which can
/// collide across tracks or change mid-session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    /// Create a TrackId from the player's persistent id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player state as reported by the scripting bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,
}

impl From<&str> for PlayerState {
    fn from(state: &str) -> Self {
        match state.trim().to_ascii_lowercase().as_str() {
            "playing" => Self::Playing,
            "paused" => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        };
        write!(f, "{state}")
    }
}

/// Decoded cover art, shared cheaply between snapshots of the same track.
#[derive(Clone)]
pub struct Artwork {
    image: Arc<RgbaImage>,
}

impl Artwork {
    /// Wrap a decoded image
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// The decoded RGBA pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl PartialEq for Artwork {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image) || *self.image == *other.image
    }
}

impl fmt::Debug for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artwork")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// One immutable observation of what the player is doing.
///
/// Snapshots are never mutated; each successful poll produces a new one.
/// The absence of playback is represented by `Option::None` at the call
/// site, never by a zeroed snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    /// Track title
    title: String,

    /// Track artist
    artist: String,

    /// Album name
    album: String,

    /// Track length
    #[serde(serialize_with = "as_secs")]
    duration: Duration,

    /// Playback position, always within `0..=duration`
    #[serde(serialize_with = "as_secs")]
    position: Duration,

    /// Whether the player is actively playing
    is_playing: bool,

    /// Cover art, if the player provided any
    #[serde(skip)]
    artwork: Option<Artwork>,
}

impl PlaybackSnapshot {
    /// Build a snapshot, clamping the position into the track length.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: Duration,
        position: Duration,
        is_playing: bool,
        artwork: Option<Artwork>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration,
            position: position.min(duration),
            is_playing,
            artwork,
        }
    }

    /// Track title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Track artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Album name
    pub fn album(&self) -> &str {
        &self.album
    }

    /// Track length
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Playback position, never past [`duration`](Self::duration)
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Whether the player is actively playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Cover art, if the player provided any
    pub fn artwork(&self) -> Option<&Artwork> {
        self.artwork.as_ref()
    }

    /// Fraction of the track already played, in `0.0..=1.0`.
    ///
    /// Zero-length tracks report no progress.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }

        (self.position.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
