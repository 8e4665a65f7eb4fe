use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use futures::Stream;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use super::{
    Artwork, ArtworkCache, MediaError, PlaybackSnapshot, PlayerBridge, PlayerState, TrackId,
    TrackMetadata, decode_artwork,
};
use crate::config::{PlayerObservation, PollingConfig};
use crate::services::common::Property;

/// Result of one polling tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// What to publish: `None` when the tick failed and nothing should be
    /// emitted, `Some(None)` when nothing is playing
    pub emission: Option<Option<PlaybackSnapshot>>,

    /// Delay before the next tick
    pub next_interval: Duration,
}

/// One sequential polling loop's worth of state: the bridge, the artwork
/// cache, and the currently scheduled interval.
pub struct Poller {
    bridge: Arc<dyn PlayerBridge>,
    config: PollingConfig,
    artwork: ArtworkCache,
    current_track: Option<TrackId>,
    interval: Duration,
}

impl Poller {
    /// Create a poller over `bridge`
    pub fn new(bridge: Arc<dyn PlayerBridge>, config: PollingConfig) -> Self {
        Self {
            artwork: ArtworkCache::new(config.artwork_cache_capacity),
            interval: config.interval_for(PlayerObservation::Paused),
            bridge,
            config,
            current_track: None,
        }
    }

    /// Track id of the most recently observed track, if any
    pub fn current_track(&self) -> Option<&TrackId> {
        self.current_track.as_ref()
    }

    /// Run one tick: probe the player, pick the next interval, and build a
    /// snapshot when something is loaded.
    ///
    /// Failures never escape; a failed tick emits nothing and keeps the
    /// currently scheduled interval.
    pub async fn tick(&mut self) -> TickOutcome {
        let emission = match self.observe().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "Polling tick failed");
                None
            }
        };

        TickOutcome {
            emission,
            next_interval: self.interval,
        }
    }

    async fn observe(&mut self) -> Result<Option<PlaybackSnapshot>, MediaError> {
        if !self.query("is_running", self.bridge.is_running()).await? {
            self.schedule(PlayerObservation::Absent);
            self.forget_track();
            return Ok(None);
        }

        let state = self.query("player_state", self.bridge.player_state()).await?;
        let observation = match state {
            PlayerState::Playing => PlayerObservation::Playing,
            PlayerState::Paused => PlayerObservation::Paused,
            PlayerState::Stopped => PlayerObservation::Stopped,
        };
        self.schedule(observation);

        if state == PlayerState::Stopped {
            self.forget_track();
            return Ok(None);
        }

        let response = self.query("now_playing", self.bridge.now_playing()).await?;
        let Some(metadata) = TrackMetadata::parse(&response)? else {
            self.forget_track();
            return Ok(None);
        };

        let artwork = self.resolve_artwork(&metadata.track_id).await;

        if self.current_track.as_ref() != Some(&metadata.track_id) {
            info!(track_id = %metadata.track_id, title = %metadata.title, "Now playing");
            self.current_track = Some(metadata.track_id.clone());
        }

        Ok(Some(PlaybackSnapshot::new(
            metadata.title,
            metadata.artist,
            metadata.album,
            metadata.duration,
            metadata.position,
            state == PlayerState::Playing,
            artwork,
        )))
    }

    async fn resolve_artwork(&self, track_id: &TrackId) -> Option<Artwork> {
        if let Some(cached) = self.artwork.get(track_id) {
            return cached;
        }

        let bytes = match self.query("artwork", self.bridge.artwork()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%track_id, error = %e, "Artwork query failed, retrying next tick");
                return None;
            }
        };

        let artwork = decode_artwork(&bytes).unwrap_or_else(|e| {
            warn!(%track_id, error = %e, "Artwork could not be decoded");
            None
        });

        self.artwork.insert(track_id.clone(), artwork.clone());
        artwork
    }

    async fn query<T>(
        &self,
        operation: &'static str,
        request: impl Future<Output = Result<T, MediaError>>,
    ) -> Result<T, MediaError> {
        let limit = self.config.query_timeout();
        timeout(limit, request)
            .await
            .map_err(|_| MediaError::Timeout {
                operation,
                timeout: limit,
            })?
    }

    fn schedule(&mut self, observation: PlayerObservation) {
        let interval = self.config.interval_for(observation);
        if interval != self.interval {
            debug!(?observation, ?interval, "Polling interval changed");
        }
        self.interval = interval;
    }

    fn forget_track(&mut self) {
        if let Some(track_id) = self.current_track.take() {
            debug!(%track_id, "Track no longer current");
        }
    }
}

/// Background service mirroring the external player's playback state.
///
/// The loop runs on its own task so bridge queries never block the
/// foreground. The latest observation is published through a single-slot
/// [`Property`]; slow consumers only ever see the newest value. Every
/// successful tick publishes, even if the value is unchanged.
pub struct MediaPollingService {
    bridge: Arc<dyn PlayerBridge>,
    config: PollingConfig,
    snapshot: Property<Option<PlaybackSnapshot>>,
    started: AtomicBool,
    task: OnceLock<JoinHandle<()>>,
}

impl MediaPollingService {
    /// Create a stopped service; call [`start`](Self::start) to begin polling
    pub fn new(bridge: Arc<dyn PlayerBridge>, config: PollingConfig) -> Self {
        Self {
            bridge,
            config,
            snapshot: Property::new(None),
            started: AtomicBool::new(false),
            task: OnceLock::new(),
        }
    }

    /// Begin the polling loop. Calling this more than once has no effect.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self))]
    pub fn start(&self) {
        if self
            .started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Polling already started");
            return;
        }

        let poller = Poller::new(Arc::clone(&self.bridge), self.config.clone());
        let snapshot = self.snapshot.clone();
        let handle = tokio::spawn(run_loop(poller, snapshot));
        let _ = self.task.set(handle);

        info!("Media polling started");
    }

    /// Whether the loop has been started
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Latest known snapshot, `None` when nothing is playing
    pub fn current_snapshot(&self) -> Option<PlaybackSnapshot> {
        self.snapshot.get()
    }

    /// Stream of published snapshots, starting with the current one
    pub fn watch(&self) -> impl Stream<Item = Option<PlaybackSnapshot>> + Send + use<> {
        self.snapshot.watch()
    }

    /// Receiver for the snapshot slot, for `select!`-style consumers
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<Option<PlaybackSnapshot>> {
        self.snapshot.subscribe()
    }

    /// Run a single tick outside the loop, without publishing.
    pub async fn poll_once(&self) -> TickOutcome {
        let mut poller = Poller::new(Arc::clone(&self.bridge), self.config.clone());
        poller.tick().await
    }
}

impl Drop for MediaPollingService {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get() {
            handle.abort();
        }
    }
}

async fn run_loop(mut poller: Poller, snapshot: Property<Option<PlaybackSnapshot>>) {
    loop {
        let outcome = poller.tick().await;

        if let Some(emission) = outcome.emission {
            snapshot.replace(emission);
        }

        tokio::time::sleep(outcome.next_interval).await;
    }
}
