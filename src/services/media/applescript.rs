use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use super::{MediaError, PlayerBridge, PlayerState, TransportCommand};
use crate::config::PollingConfig;

const OSASCRIPT: &str = "osascript";
const PGREP: &str = "pgrep";

/// Scripting bridge backed by `osascript` and the OS process list.
///
/// Every query spawns a short-lived child process. Children are killed when
/// the query future is dropped, so a caller-side timeout never leaves
/// stragglers behind.
#[derive(Debug, Clone)]
pub struct AppleScriptBridge {
    app_name: String,
    bundle_id: String,
    process_name: String,
}

impl AppleScriptBridge {
    /// Create a bridge targeting the player described by `config`
    pub fn new(config: &PollingConfig) -> Self {
        Self {
            app_name: config.player_app_name.clone(),
            bundle_id: config.player_bundle_id.clone(),
            process_name: config.process_name.clone(),
        }
    }

    fn tell(&self, body: &str) -> String {
        format!(
            "tell application \"{}\"\n{body}\nend tell",
            escape(&self.app_name)
        )
    }

    async fn run_script(&self, operation: &'static str, source: &str) -> Result<String, MediaError> {
        let output = Command::new(OSASCRIPT)
            .arg("-e")
            .arg(source)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(MediaError::ScriptFailed {
                operation,
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[async_trait]
impl PlayerBridge for AppleScriptBridge {
    #[instrument(skip(self), fields(player = %self.bundle_id))]
    async fn is_running(&self) -> Result<bool, MediaError> {
        let output = Command::new(PGREP)
            .arg("-x")
            .arg(&self.process_name)
            .kill_on_drop(true)
            .output()
            .await?;

        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(MediaError::ScriptFailed {
                operation: "is_running",
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }

    #[instrument(skip(self), fields(player = %self.bundle_id))]
    async fn player_state(&self) -> Result<PlayerState, MediaError> {
        let script = self.tell("return player state as string");
        let state = self.run_script("player_state", &script).await?;
        Ok(PlayerState::from(state.as_str()))
    }

    #[instrument(skip(self), fields(player = %self.bundle_id))]
    async fn now_playing(&self) -> Result<String, MediaError> {
        let script = self.tell(
            r#"if not (exists current track) then return ""
set trackName to name of current track
set artistName to artist of current track
set albumName to album of current track
set durationSeconds to duration of current track
set playerPos to player position
set trackID to persistent ID of current track
return trackName & "|" & artistName & "|" & albumName & "|" & (durationSeconds as string) & "|" & (playerPos as string) & "|" & trackID"#,
        );
        self.run_script("now_playing", &script).await
    }

    #[instrument(skip(self), fields(player = %self.bundle_id))]
    async fn artwork(&self) -> Result<Vec<u8>, MediaError> {
        let script = self.tell(
            r#"if not (exists current track) then return ""
if (count of artworks of current track) is 0 then return ""
return data of artwork 1 of current track"#,
        );
        let raw = self.run_script("artwork", &script).await?;
        let bytes = decode_data_literal(&raw)?;
        debug!(bytes = bytes.len(), "Fetched artwork");
        Ok(bytes)
    }

    #[instrument(skip(self), fields(player = %self.bundle_id))]
    async fn send(&self, command: TransportCommand) -> Result<(), MediaError> {
        let verb = match command {
            TransportCommand::PlayPause => "playpause",
            TransportCommand::NextTrack => "next track",
            TransportCommand::PreviousTrack => "previous track",
        };
        let script = format!("tell application \"{}\" to {verb}", escape(&self.app_name));
        self.run_script("transport", &script).await.map(|_| ())
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Decode osascript's `«data XXXX<hex>»` rendering of raw bytes.
///
/// An empty response means the track has no artwork.
fn decode_data_literal(raw: &str) -> Result<Vec<u8>, MediaError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "missing value" {
        return Ok(Vec::new());
    }

    let body = raw
        .strip_prefix("«data ")
        .and_then(|rest| rest.strip_suffix('»'))
        .ok_or_else(|| MediaError::ArtworkData(format!("unexpected literal: {:.32}", raw)))?;

    let payload = body
        .get(4..)
        .ok_or_else(|| MediaError::ArtworkData("missing type code".to_string()))?;

    hex::decode(payload).map_err(|e| MediaError::ArtworkData(e.to_string()))
}
