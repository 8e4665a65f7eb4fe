use std::time::Duration;

use super::{MediaError, TrackId};

const FIELD_DELIMITER: char = '|';
const FIELD_COUNT: usize = 6;

/// Parsed now-playing response for the current track
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    /// Track title
    pub title: String,

    /// Track artist
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track length
    pub duration: Duration,

    /// Playback position
    pub position: Duration,

    /// Stable per-track identifier
    pub track_id: TrackId,
}

impl TrackMetadata {
    /// Parse a `|`-joined now-playing response.
    ///
    /// An empty response means no track is loaded and yields `Ok(None)`.
    /// Numeric fields accept a comma decimal separator, as some locales
    /// render them that way.
    ///
    /// # Errors
    /// Returns error if the response has other than six fields, or if the
    /// duration, position, or track id cannot be interpreted
    pub fn parse(response: &str) -> Result<Option<Self>, MediaError> {
        let response = response.trim_end_matches(['\r', '\n']);
        if response.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = response.split(FIELD_DELIMITER).collect();
        let [title, artist, album, duration, position, track_id] = fields[..] else {
            return Err(MediaError::MalformedResponse {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        let track_id = track_id.trim();
        if track_id.is_empty() {
            return Err(MediaError::InvalidField {
                field: "track_id",
                value: track_id.to_string(),
            });
        }

        Ok(Some(Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            duration: parse_seconds("duration", duration)?,
            position: parse_seconds("position", position)?,
            track_id: TrackId::new(track_id),
        }))
    }
}

fn parse_seconds(field: &'static str, raw: &str) -> Result<Duration, MediaError> {
    let invalid = || MediaError::InvalidField {
        field,
        value: raw.to_string(),
    };

    let seconds: f64 = raw.trim().replace(',', ".").parse().map_err(|_| invalid())?;
    Duration::try_from_secs_f64(seconds).map_err(|_| invalid())
}
