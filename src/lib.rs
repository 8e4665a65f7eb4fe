//! Media island - a now-playing overlay for an external media player.
//!
//! The crate polls a media player through a scripting bridge, decides
//! which presentation the island should show, and keeps an overlay window
//! sized, centred, and pointer-transparent to match:
//!
//! - [`services::media`] polls the player with adaptive backoff and caches
//!   artwork per track
//! - [`state`] holds the display state machine
//! - [`overlay`] positions the window for the current mode
//! - [`app`] joins them on a single foreground loop
//! - [`config_store`] provides live, file-backed configuration
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use media_island::config_store::ConfigStore;
//! use media_island::state::DisplayStateStore;
//!
//! let config = ConfigStore::with_defaults();
//! let mut store = DisplayStateStore::new(config);
//!
//! // Nothing is playing, so toggling stays idle.
//! store.toggle_expansion();
//! println!("Mode: {}", store.mode());
//! ```

/// Foreground event loop joining polling, state, and overlay.
pub mod app;

/// Command-line interface.
pub mod cli;

/// Configuration schema definitions and validation.
pub mod config;

/// Reactive configuration store with change tracking.
pub mod config_store;

/// Core error types and result aliases.
pub mod core;

/// Overlay window positioning.
pub mod overlay;

/// Background services talking to the outside world.
pub mod services;

/// Display state machine.
pub mod state;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{IslandError, Result};
