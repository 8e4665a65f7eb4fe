use std::time::Duration;

use tracing::info;

use super::{OverlayError, OverlayWindow, Point, Rect, ScreenGeometry, Size, WindowTraits};

const MENU_BAR_HEIGHT: f64 = 25.0;

/// Window backend with no on-screen surface.
///
/// Tracks the geometry and input policy it is given and logs every change,
/// which makes the whole pipeline observable without a window toolkit.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    screen: Option<ScreenGeometry>,
    traits: Option<WindowTraits>,
    size: Size,
    origin: Point,
    ignores_pointer: bool,
    visible: bool,
}

impl HeadlessWindow {
    /// A window on a screen with the given geometry
    pub fn new(screen: Option<ScreenGeometry>) -> Self {
        Self {
            screen,
            traits: None,
            size: Size::default(),
            origin: Point::default(),
            ignores_pointer: false,
            visible: false,
        }
    }

    /// Screen geometry of a `width`×`height` display with a menu bar
    pub fn screen_of(width: f64, height: f64) -> ScreenGeometry {
        ScreenGeometry {
            frame: Rect::new(0.0, 0.0, width, height),
            visible_frame: Rect::new(0.0, MENU_BAR_HEIGHT, width, height - MENU_BAR_HEIGHT),
        }
    }

    /// Simulate a display reconfiguration
    pub fn set_screen(&mut self, screen: Option<ScreenGeometry>) {
        info!(?screen, "Screen parameters changed");
        self.screen = screen;
    }

    /// Current window frame
    pub fn frame(&self) -> Rect {
        Rect {
            origin: self.origin,
            size: self.size,
        }
    }

    /// Whether pointer input passes through
    pub fn ignores_pointer(&self) -> bool {
        self.ignores_pointer
    }

    /// Whether the window is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new(Some(Self::screen_of(1920.0, 1080.0)))
    }
}

impl OverlayWindow for HeadlessWindow {
    fn configure(&mut self, traits: WindowTraits) -> Result<(), OverlayError> {
        info!(?traits, "Overlay window configured");
        self.traits = Some(traits);
        Ok(())
    }

    fn primary_screen(&self) -> Option<ScreenGeometry> {
        self.screen
    }

    fn set_content_size(&mut self, size: Size) -> Result<(), OverlayError> {
        self.size = size;
        Ok(())
    }

    fn set_origin(&mut self, origin: Point, animation: Option<Duration>) -> Result<(), OverlayError> {
        self.origin = origin;
        info!(
            x = origin.x,
            y = origin.y,
            width = self.size.width,
            height = self.size.height,
            animation_ms = animation.map(|d| d.as_millis() as u64),
            "Overlay frame"
        );
        Ok(())
    }

    fn set_ignores_pointer(&mut self, ignore: bool) -> Result<(), OverlayError> {
        self.ignores_pointer = ignore;
        info!(ignore, "Pointer pass-through");
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), OverlayError> {
        self.visible = visible;
        info!(visible, "Overlay visibility");
        Ok(())
    }
}
