use std::time::Duration;

/// Errors that can occur while talking to the media player
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// The scripting bridge ran but reported a failure
    #[error("Script for {operation} failed: {details}")]
    ScriptFailed {
        /// Bridge operation that failed
        operation: &'static str,
        /// stderr or status reported by the bridge
        details: String,
    },

    /// The scripting bridge did not answer in time
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        /// Bridge operation that timed out
        operation: &'static str,
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// The metadata response did not have the expected number of fields
    #[error("Malformed metadata response: expected {expected} fields, found {found}")]
    MalformedResponse {
        /// Expected field count
        expected: usize,
        /// Field count actually received
        found: usize,
    },

    /// A metadata field could not be interpreted
    #[error("Invalid {field} in metadata response: {value:?}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Raw field text
        value: String,
    },

    /// The bridge returned artwork data in an unexpected encoding
    #[error("Invalid artwork data: {0}")]
    ArtworkData(String),

    /// Artwork bytes could not be decoded as an image
    #[error("Failed to decode artwork: {0}")]
    ArtworkDecode(#[from] image::ImageError),

    /// The bridge process could not be spawned
    #[error("Failed to run bridge process: {0}")]
    Io(#[from] std::io::Error),
}
