use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{IslandError, Result};

/// Width and height in logical points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OverlaySize {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl OverlaySize {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Overlay window geometry.
///
/// The content sizes are the natural sizes of the rendered island in each
/// display mode; the controller adds `content_padding` on the top and both
/// sides before sizing the window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Gap between the top of the usable screen area and the window.
    pub top_inset: f64,

    /// Base duration of the reposition animation on mode changes.
    pub animation_duration_ms: u64,

    /// Padding around the island content.
    pub content_padding: f64,

    /// Content size while idle (an invisible hit target).
    pub idle_size: OverlaySize,

    /// Content size of the compact pill.
    pub compact_size: OverlaySize,

    /// Content size of the expanded island.
    pub expanded_size: OverlaySize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            top_inset: 12.0,
            animation_duration_ms: 200,
            content_padding: 8.0,
            idle_size: OverlaySize::new(40.0, 40.0),
            compact_size: OverlaySize::new(260.0, 44.0),
            expanded_size: OverlaySize::new(420.0, 78.0),
        }
    }
}

impl OverlayConfig {
    /// Base reposition animation duration.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub(super) fn validate(&self) -> Result<()> {
        let sizes = [
            ("idle_size", self.idle_size),
            ("compact_size", self.compact_size),
            ("expanded_size", self.expanded_size),
        ];

        for (name, size) in sizes {
            let valid = size.width.is_finite()
                && size.height.is_finite()
                && size.width > 0.0
                && size.height > 0.0;
            if !valid {
                return Err(IslandError::validation(
                    "overlay",
                    format!("{name} must have positive, finite dimensions"),
                ));
            }
        }

        if !self.content_padding.is_finite() || self.content_padding < 0.0 {
            return Err(IslandError::validation(
                "overlay",
                "content_padding must be a non-negative number",
            ));
        }

        if !self.top_inset.is_finite() {
            return Err(IslandError::validation(
                "overlay",
                "top_inset must be a finite number",
            ));
        }

        Ok(())
    }
}
