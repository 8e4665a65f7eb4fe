/// Common utilities shared by services
pub mod common;
/// Media player polling and transport control
pub mod media;

pub use media::{MediaPollingService, PlaybackSnapshot, TransportControl};
