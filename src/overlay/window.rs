use std::time::Duration;

use super::OverlayError;

/// Width and height in logical points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in points
    pub width: f64,
    /// Height in points
    pub height: f64,
}

impl Size {
    /// Creates a size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point in screen coordinates, origin at the top-left of the primary
/// screen, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Extent
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Horizontal centre
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Top edge
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }
}

/// Geometry of the primary screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    /// Full screen bounds
    pub frame: Rect,

    /// Bounds excluding system bars (menu bar, docks, notches)
    pub visible_frame: Rect,
}

/// Window traits the overlay requires from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTraits {
    /// No title bar or decorations
    pub borderless: bool,
    /// Never takes activation away from the frontmost application
    pub non_activating: bool,
    /// Floats above normal application windows
    pub always_on_top: bool,
    /// Fully transparent background
    pub transparent: bool,
    /// Visible on every workspace, including full-screen spaces
    pub all_workspaces: bool,
}

impl WindowTraits {
    /// The traits an island overlay needs
    pub const OVERLAY: Self = Self {
        borderless: true,
        non_activating: true,
        always_on_top: true,
        transparent: true,
        all_workspaces: true,
    };
}

/// Events a window backend reports to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The overlay lost input focus
    FocusLost,
    /// Display configuration changed (resolution, arrangement)
    ScreenParametersChanged,
    /// The pointer entered the overlay
    PointerEntered,
    /// The user clicked the overlay
    Clicked,
}

/// Window-system surface the positioning controller drives.
///
/// Implementations are used from the foreground context only.
pub trait OverlayWindow {
    /// Apply the overlay window traits
    ///
    /// # Errors
    /// Returns error if the backend cannot create such a window
    fn configure(&mut self, traits: WindowTraits) -> Result<(), OverlayError>;

    /// Geometry of the primary screen, if one is attached
    fn primary_screen(&self) -> Option<ScreenGeometry>;

    /// Resize the window's content area
    ///
    /// # Errors
    /// Returns error if the backend rejects the size
    fn set_content_size(&mut self, size: Size) -> Result<(), OverlayError>;

    /// Move the window, animating over `animation` when given
    ///
    /// # Errors
    /// Returns error if the backend rejects the move
    fn set_origin(&mut self, origin: Point, animation: Option<Duration>) -> Result<(), OverlayError>;

    /// Let pointer input pass through the window
    ///
    /// # Errors
    /// Returns error if the backend cannot change the input policy
    fn set_ignores_pointer(&mut self, ignore: bool) -> Result<(), OverlayError>;

    /// Show or hide the window
    ///
    /// # Errors
    /// Returns error if the backend cannot change visibility
    fn set_visible(&mut self, visible: bool) -> Result<(), OverlayError>;
}
