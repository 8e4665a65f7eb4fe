use std::fmt;

use moka::policy::EvictionPolicy;
use moka::sync::Cache;

use super::{Artwork, MediaError, TrackId};

/// Bounded, least-recently-used cache of artwork, keyed by track id.
///
/// An entry is only written once the player has answered an artwork query.
/// Tracks that answered with no usable image are stored as `None`, so the
/// player is asked at most once per track id while it stays cached.
#[derive(Clone)]
pub struct ArtworkCache {
    entries: Cache<TrackId, Option<Artwork>>,
}

impl ArtworkCache {
    /// Create a cache holding at most `capacity` tracks (minimum one)
    pub fn new(capacity: usize) -> Self {
        let capacity = u64::try_from(capacity.max(1)).unwrap_or(u64::MAX);
        let entries = Cache::builder()
            .max_capacity(capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self { entries }
    }

    /// Look up a track, marking it most recently used.
    ///
    /// The outer `None` is a cache miss; `Some(None)` means the track is
    /// known to have no usable artwork.
    pub fn get(&self, track_id: &TrackId) -> Option<Option<Artwork>> {
        self.entries.get(track_id)
    }

    /// Remember the artwork outcome for a track, evicting the least
    /// recently used entry when full.
    pub fn insert(&self, track_id: TrackId, artwork: Option<Artwork>) {
        self.entries.insert(track_id, artwork);
    }

    /// Whether a track is cached, without affecting recency
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.entries.contains_key(track_id)
    }

    /// Number of cached tracks, after pending evictions have been applied
    pub fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        usize::try_from(self.entries.entry_count()).unwrap_or(usize::MAX)
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ArtworkCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtworkCache")
            .field("capacity", &self.entries.policy().max_capacity())
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

/// Decode artwork bytes returned by the bridge.
///
/// Empty input means the track has no artwork.
///
/// # Errors
/// Returns error if the bytes are not a supported image format
pub fn decode_artwork(bytes: &[u8]) -> Result<Option<Artwork>, MediaError> {
    if bytes.is_empty() {
        return Ok(None);
    }

    let image = image::load_from_memory(bytes)?;
    Ok(Some(Artwork::new(image.into_rgba8())))
}
