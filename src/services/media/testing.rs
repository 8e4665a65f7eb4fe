use std::io::Cursor;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use super::{MediaError, PlayerBridge, PlayerState, TransportCommand};

/// Encode a solid-colour PNG of the given size
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 40, 90, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

struct Script {
    running: bool,
    state: PlayerState,
    now_playing: String,
    artwork: Vec<u8>,
    fail_state: bool,
    fail_artwork: bool,
    delay: Duration,
    artwork_delay: Duration,
    sent: Vec<TransportCommand>,
}

/// Scripted player bridge with call counters
pub(crate) struct FakeBridge {
    script: Mutex<Script>,
    running_calls: AtomicUsize,
    state_calls: AtomicUsize,
    now_playing_calls: AtomicUsize,
    artwork_calls: AtomicUsize,
}

impl FakeBridge {
    /// A running, playing player on track `T1` with PNG artwork
    pub(crate) fn playing() -> Self {
        Self {
            script: Mutex::new(Script {
                running: true,
                state: PlayerState::Playing,
                now_playing: track("A", "T1"),
                artwork: png_bytes(4, 4),
                fail_state: false,
                fail_artwork: false,
                delay: Duration::ZERO,
                artwork_delay: Duration::ZERO,
                sent: Vec::new(),
            }),
            running_calls: AtomicUsize::new(0),
            state_calls: AtomicUsize::new(0),
            now_playing_calls: AtomicUsize::new(0),
            artwork_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.script.lock().unwrap().running = running;
    }

    pub(crate) fn set_state(&self, state: PlayerState) {
        self.script.lock().unwrap().state = state;
    }

    pub(crate) fn set_now_playing(&self, response: impl Into<String>) {
        self.script.lock().unwrap().now_playing = response.into();
    }

    pub(crate) fn set_artwork(&self, bytes: Vec<u8>) {
        self.script.lock().unwrap().artwork = bytes;
    }

    pub(crate) fn fail_state(&self, fail: bool) {
        self.script.lock().unwrap().fail_state = fail;
    }

    pub(crate) fn fail_artwork(&self, fail: bool) {
        self.script.lock().unwrap().fail_artwork = fail;
    }

    pub(crate) fn set_delay(&self, delay: Duration) {
        self.script.lock().unwrap().delay = delay;
    }

    pub(crate) fn set_artwork_delay(&self, delay: Duration) {
        self.script.lock().unwrap().artwork_delay = delay;
    }

    pub(crate) fn running_calls(&self) -> usize {
        self.running_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn state_calls(&self) -> usize {
        self.state_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn now_playing_calls(&self) -> usize {
        self.now_playing_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn artwork_calls(&self) -> usize {
        self.artwork_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn sent(&self) -> Vec<TransportCommand> {
        self.script.lock().unwrap().sent.clone()
    }

    async fn pause(&self) {
        let delay = self.script.lock().unwrap().delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// A well-formed now-playing response for `title` with the given track id
pub(crate) fn track(title: &str, track_id: &str) -> String {
    format!("{title}|Artist|Album|200|42|{track_id}")
}

#[async_trait]
impl PlayerBridge for FakeBridge {
    async fn is_running(&self) -> Result<bool, MediaError> {
        self.running_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Ok(self.script.lock().unwrap().running)
    }

    async fn player_state(&self) -> Result<PlayerState, MediaError> {
        self.state_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.script.lock().unwrap();
        if script.fail_state {
            return Err(MediaError::ScriptFailed {
                operation: "player_state",
                details: "scripted failure".to_string(),
            });
        }
        Ok(script.state)
    }

    async fn now_playing(&self) -> Result<String, MediaError> {
        self.now_playing_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.script.lock().unwrap().now_playing.clone())
    }

    async fn artwork(&self) -> Result<Vec<u8>, MediaError> {
        self.artwork_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.script.lock().unwrap().artwork_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let script = self.script.lock().unwrap();
        if script.fail_artwork {
            return Err(MediaError::ScriptFailed {
                operation: "artwork",
                details: "scripted failure".to_string(),
            });
        }
        Ok(script.artwork.clone())
    }

    async fn send(&self, command: TransportCommand) -> Result<(), MediaError> {
        self.script.lock().unwrap().sent.push(command);
        Ok(())
    }
}
