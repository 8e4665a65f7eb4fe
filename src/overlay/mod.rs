//! Overlay window positioning.
//!
//! [`OverlayPositioningController`] follows the display mode: it sizes the
//! window for the mode, centres it at the top of the primary screen, and
//! toggles pointer pass-through. The window system itself sits behind the
//! [`OverlayWindow`] trait.

mod controller;
mod error;
mod headless;
mod layout;
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod testing;
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
mod window;

pub use controller::{OverlayPositioningController, passthrough_enabled};
pub use error::OverlayError;
pub use headless::HeadlessWindow;
pub use layout::{window_origin, window_size};
pub use window::{OverlayWindow, Point, Rect, ScreenGeometry, Size, WindowEvent, WindowTraits};
