use std::ops::ControlFlow;

use futures::StreamExt;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::config_store::ConfigStore;
use crate::overlay::{OverlayPositioningController, OverlayWindow, WindowEvent};
use crate::services::media::{
    MediaPollingService, PlaybackSnapshot, TransportCommand, TransportControl,
};
use crate::state::DisplayStateStore;

/// Requests delivered to the foreground loop from window backends and
/// user gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// An event reported by the window backend
    Window(WindowEvent),
    /// A transport control pressed in the island
    Transport(TransportCommand),
    /// Show the island
    Show,
    /// Hide the island
    Hide,
    /// Stop the foreground loop
    Quit,
}

/// The foreground context: owns the display state and the overlay
/// controller and is the only place either is mutated.
///
/// Snapshots arrive from the polling service through a single-slot watch,
/// so a busy foreground only ever sees the latest one.
pub struct IslandApp<W: OverlayWindow> {
    config: ConfigStore,
    store: DisplayStateStore,
    controller: OverlayPositioningController<W>,
    transport: TransportControl,
    snapshots: watch::Receiver<Option<PlaybackSnapshot>>,
}

impl<W: OverlayWindow> IslandApp<W> {
    /// Wire the display store and overlay controller to `polling` and show
    /// the overlay.
    ///
    /// # Errors
    /// Returns error if the window cannot be configured or shown
    pub fn new(
        config: ConfigStore,
        window: W,
        polling: &MediaPollingService,
        transport: TransportControl,
    ) -> Result<Self> {
        let store = DisplayStateStore::new(config.clone());
        let mut controller = OverlayPositioningController::new(window, config.clone())?;
        controller.show()?;

        Ok(Self {
            config,
            store,
            controller,
            transport,
            snapshots: polling.subscribe(),
        })
    }

    /// Display state store
    pub fn store(&self) -> &DisplayStateStore {
        &self.store
    }

    /// Overlay controller
    pub fn controller(&self) -> &OverlayPositioningController<W> {
        &self.controller
    }

    /// Run until [`AppCommand::Quit`] arrives or every command sender is
    /// dropped.
    ///
    /// # Errors
    /// Currently infallible once started; window failures are logged
    #[instrument(skip_all)]
    pub async fn run(&mut self, mut commands: mpsc::Receiver<AppCommand>) -> Result<()> {
        let mut config_changes = Box::pin(futures::stream::select(
            self.config.subscribe_to_path("behavior.*"),
            self.config.subscribe_to_path("overlay.*"),
        ));

        let initial = self.snapshots.borrow_and_update().clone();
        self.on_snapshot(initial);

        info!("Island running");

        loop {
            tokio::select! {
                Ok(()) = self.snapshots.changed() => {
                    let snapshot = self.snapshots.borrow_and_update().clone();
                    self.on_snapshot(snapshot);
                }
                Some(change) = config_changes.next() => {
                    debug!(path = %change.path, "Configuration changed");
                    self.on_config_change();
                }
                command = commands.recv() => {
                    let Some(command) = command else {
                        debug!("Command channel closed");
                        break;
                    };
                    if self.handle_command(command).is_break() {
                        break;
                    }
                }
            }
        }

        info!("Island stopped");
        Ok(())
    }

    /// Feed one observation into the store and let the window follow
    pub fn on_snapshot(&mut self, snapshot: Option<PlaybackSnapshot>) {
        self.store.snapshot_arrived(snapshot);
        if let Err(e) = self.controller.on_mode_change(self.store.mode()) {
            warn!(error = %e, "Overlay failed to follow mode change");
        }
    }

    /// Re-read live configuration into the store and the window
    pub fn on_config_change(&mut self) {
        self.store.refresh_visuals();
        if let Err(e) = self.controller.on_config_change() {
            warn!(error = %e, "Overlay failed to apply configuration");
        }
    }

    /// Apply one command; `Break` means the loop should stop
    pub fn handle_command(&mut self, command: AppCommand) -> ControlFlow<()> {
        let result = match command {
            AppCommand::Window(event) => self
                .controller
                .handle_window_event(event, &mut self.store)
                .map(|_| ()),
            AppCommand::Transport(command) => {
                self.transport.dispatch(command);
                Ok(())
            }
            AppCommand::Show => self.controller.show(),
            AppCommand::Hide => self.controller.hide(),
            AppCommand::Quit => return ControlFlow::Break(()),
        };

        if let Err(e) = result {
            warn!(?command, error = %e, "Command failed");
        }
        ControlFlow::Continue(())
    }
}
