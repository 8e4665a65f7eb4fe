use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;

/// Represents a file system event for the watched file.
#[derive(Debug, Clone)]
pub struct FileEvent {
    /// The path of the file that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: FileEventKind,
}

/// The type of file system change that occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum FileEventKind {
    /// File was modified
    Modified,
    /// File was created
    Created,
    /// File was removed
    Removed,
}

/// File system watcher for the configuration file.
///
/// Watches the file's parent directory rather than the file itself: editors
/// that save by writing a temporary file and renaming it over the original
/// would otherwise silently end the watch. Events for other files in the
/// directory are filtered out before they reach the channel.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    target: PathBuf,
}

impl FileWatcher {
    /// Starts watching `path` and returns the watcher and event receiver.
    ///
    /// The watcher stops when the returned `FileWatcher` is dropped. Uses an
    /// unbounded channel since file events are infrequent but bursty.
    ///
    /// # Errors
    /// Returns error if the path has no parent directory or the underlying
    /// file system watcher cannot be initialized.
    pub fn watch(path: &Path) -> Result<(Self, mpsc::UnboundedReceiver<FileEvent>), notify::Error> {
        let target = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let directory = target
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| notify::Error::generic("config path has no parent directory"))?;
        let file_name = target.file_name().map(|name| name.to_os_string());

        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };

            let kind = match event.kind {
                EventKind::Create(_) => FileEventKind::Created,
                EventKind::Modify(_) => FileEventKind::Modified,
                EventKind::Remove(_) => FileEventKind::Removed,
                _ => return,
            };

            for path in event.paths {
                if path.file_name().map(|name| name.to_os_string()) != file_name {
                    continue;
                }

                let _ = event_tx.send(FileEvent {
                    path,
                    kind: kind.clone(),
                });
            }
        })?;

        watcher.watch(&directory, RecursiveMode::NonRecursive)?;

        Ok((
            Self {
                _watcher: watcher,
                target,
            },
            event_rx,
        ))
    }

    /// The file being watched.
    pub fn target(&self) -> &Path {
        &self.target
    }
}
