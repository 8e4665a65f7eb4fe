//! Display state machine.
//!
//! [`DisplayStateStore`] decides the island's [`DisplayMode`] from
//! snapshots and user gestures and publishes every change.

mod store;
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
mod types;

pub use store::DisplayStateStore;
pub use types::{
    ContentPresence, DisplayInput, DisplayMode, DisplayState, ModeTransition, VisualSettings,
};
