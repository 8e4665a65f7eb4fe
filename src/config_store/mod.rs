//! Reactive configuration store with change tracking.
//!
//! Provides a thread-safe configuration store that can load TOML files,
//! track changes, and notify subscribers of configuration updates. The
//! display state machine and overlay controller read behavior flags from
//! here at the moment they need them, which makes file edits effective
//! immediately.

mod changes;
mod diff;
mod file_watcher;
mod file_watching;
mod path_ops;
mod store;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

pub use changes::{ChangeSource, ConfigChange, ConfigError};
pub use file_watcher::{FileEvent, FileEventKind, FileWatcher};
pub use store::ConfigStore;
