use std::time::Duration;

use super::{OverlayError, OverlayWindow, Point, ScreenGeometry, Size, WindowTraits};
use crate::overlay::HeadlessWindow;

/// A call made on a [`RecordingWindow`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WindowCall {
    Configure(WindowTraits),
    ContentSize(Size),
    Origin(Point, Option<Duration>),
    IgnoresPointer(bool),
    Visible(bool),
}

/// Window backend that records every call
pub(crate) struct RecordingWindow {
    pub(crate) screen: Option<ScreenGeometry>,
    pub(crate) calls: Vec<WindowCall>,
}

impl RecordingWindow {
    pub(crate) fn new() -> Self {
        Self {
            screen: Some(HeadlessWindow::screen_of(1440.0, 900.0)),
            calls: Vec::new(),
        }
    }

    pub(crate) fn last_origin(&self) -> Option<(Point, Option<Duration>)> {
        self.calls.iter().rev().find_map(|call| match call {
            WindowCall::Origin(point, animation) => Some((*point, *animation)),
            _ => None,
        })
    }

    pub(crate) fn last_ignores_pointer(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            WindowCall::IgnoresPointer(ignore) => Some(*ignore),
            _ => None,
        })
    }
}

impl OverlayWindow for RecordingWindow {
    fn configure(&mut self, traits: WindowTraits) -> Result<(), OverlayError> {
        self.calls.push(WindowCall::Configure(traits));
        Ok(())
    }

    fn primary_screen(&self) -> Option<ScreenGeometry> {
        self.screen
    }

    fn set_content_size(&mut self, size: Size) -> Result<(), OverlayError> {
        self.calls.push(WindowCall::ContentSize(size));
        Ok(())
    }

    fn set_origin(&mut self, origin: Point, animation: Option<Duration>) -> Result<(), OverlayError> {
        self.calls.push(WindowCall::Origin(origin, animation));
        Ok(())
    }

    fn set_ignores_pointer(&mut self, ignore: bool) -> Result<(), OverlayError> {
        self.calls.push(WindowCall::IgnoresPointer(ignore));
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), OverlayError> {
        self.calls.push(WindowCall::Visible(visible));
        Ok(())
    }
}
