use std::time::Duration;

use tracing::{debug, instrument, warn};

use super::{OverlayError, OverlayWindow, Rect, WindowEvent, WindowTraits, layout};
use crate::config_store::ConfigStore;
use crate::state::{DisplayMode, DisplayStateStore, ModeTransition};

/// Whether pointer input should pass through the overlay.
///
/// True exactly when the island is idle and the ignore-pointer-when-idle
/// flag is set.
pub fn passthrough_enabled(mode: DisplayMode, ignore_pointer_when_idle: bool) -> bool {
    mode == DisplayMode::Idle && ignore_pointer_when_idle
}

/// Keeps the overlay window sized, centred at the top of the primary
/// screen, and transparent to the pointer when appropriate.
///
/// Driven purely by the display mode and configuration; it never decides
/// modes itself, it forwards window gestures to the [`DisplayStateStore`].
pub struct OverlayPositioningController<W: OverlayWindow> {
    window: W,
    config: ConfigStore,
    mode: DisplayMode,
    frame: Option<Rect>,
    ignores_pointer: Option<bool>,
    visible: bool,
}

impl<W: OverlayWindow> OverlayPositioningController<W> {
    /// Take ownership of `window`, configure it as an overlay, and lay it
    /// out for the idle mode.
    ///
    /// # Errors
    /// Returns error if the backend cannot configure the window
    pub fn new(mut window: W, config: ConfigStore) -> Result<Self, OverlayError> {
        window.configure(WindowTraits::OVERLAY)?;

        let mut controller = Self {
            window,
            config,
            mode: DisplayMode::Idle,
            frame: None,
            ignores_pointer: None,
            visible: false,
        };

        if let Err(e) = controller.relayout(None) {
            warn!(error = %e, "Initial overlay layout failed");
        }
        controller.update_passthrough()?;

        Ok(controller)
    }

    /// React to the store's mode, animating the reposition when the mode
    /// actually changed.
    ///
    /// # Errors
    /// Returns error if the backend rejects the new geometry
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn on_mode_change(&mut self, mode: DisplayMode) -> Result<(), OverlayError> {
        let changed = mode != self.mode;
        self.mode = mode;

        let layout = if changed {
            self.relayout(Some(self.transition_duration()))
        } else {
            Ok(())
        };

        self.update_passthrough()?;
        layout
    }

    /// Re-place the window after a display configuration change, without
    /// animation
    ///
    /// # Errors
    /// Returns error if there is no screen or the backend rejects the move
    #[instrument(skip(self))]
    pub fn on_screen_change(&mut self) -> Result<(), OverlayError> {
        self.relayout(None)
    }

    /// Re-evaluate geometry and pointer policy after a configuration edit
    ///
    /// # Errors
    /// Returns error if the backend rejects the new geometry or policy
    pub fn on_config_change(&mut self) -> Result<(), OverlayError> {
        self.update_passthrough()?;
        self.relayout(None)
    }

    /// Translate a window event into a store input and follow the
    /// resulting mode.
    ///
    /// Losing focus always collapses, so the island is never left stuck
    /// expanded.
    ///
    /// # Errors
    /// Returns error if the window could not follow the mode change
    pub fn handle_window_event(
        &mut self,
        event: WindowEvent,
        store: &mut DisplayStateStore,
    ) -> Result<Option<ModeTransition>, OverlayError> {
        let transition = match event {
            WindowEvent::FocusLost => store.collapse(),
            WindowEvent::Clicked => store.toggle_expansion(),
            WindowEvent::PointerEntered => store.hover_enter(),
            WindowEvent::ScreenParametersChanged => {
                self.on_screen_change()?;
                return Ok(None);
            }
        };

        self.on_mode_change(store.mode())?;
        Ok(transition)
    }

    /// Bring the overlay on screen
    ///
    /// # Errors
    /// Returns error if the backend cannot show the window
    pub fn show(&mut self) -> Result<(), OverlayError> {
        self.window.set_visible(true)?;
        self.visible = true;
        debug!("Overlay shown");
        Ok(())
    }

    /// Take the overlay off screen; mode and geometry keep being tracked
    ///
    /// # Errors
    /// Returns error if the backend cannot hide the window
    pub fn hide(&mut self) -> Result<(), OverlayError> {
        self.window.set_visible(false)?;
        self.visible = false;
        debug!("Overlay hidden");
        Ok(())
    }

    /// Mode the window is currently laid out for
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Last frame applied to the window
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Whether pointer input currently passes through
    pub fn ignores_pointer(&self) -> bool {
        self.ignores_pointer.unwrap_or(false)
    }

    /// Whether the overlay is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The window backend
    pub fn window(&self) -> &W {
        &self.window
    }

    /// The window backend, mutably
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    fn transition_duration(&self) -> Duration {
        let base = self.config.overlay().animation_duration();
        base.div_f64(self.config.behavior().animation_intensity())
    }

    fn relayout(&mut self, animation: Option<Duration>) -> Result<(), OverlayError> {
        let overlay = self.config.overlay();
        let size = layout::window_size(self.mode, &overlay);
        self.window.set_content_size(size)?;

        let screen = self.window.primary_screen().ok_or(OverlayError::NoScreen)?;
        let origin = layout::window_origin(size, &screen, overlay.top_inset);
        self.window.set_origin(origin, animation)?;

        self.frame = Some(Rect { origin, size });
        Ok(())
    }

    fn update_passthrough(&mut self) -> Result<(), OverlayError> {
        let ignore = passthrough_enabled(self.mode, self.config.behavior().ignore_pointer_when_idle);
        if self.ignores_pointer != Some(ignore) {
            self.window.set_ignores_pointer(ignore)?;
            self.ignores_pointer = Some(ignore);
        }
        Ok(())
    }
}
