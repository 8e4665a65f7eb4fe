use super::{Point, ScreenGeometry, Size};
use crate::config::{OverlayConfig, OverlaySize};
use crate::state::DisplayMode;

/// Natural window size for `mode`: the content size plus padding on the
/// top and both sides.
pub fn window_size(mode: DisplayMode, config: &OverlayConfig) -> Size {
    let OverlaySize { width, height } = match mode {
        DisplayMode::Idle => config.idle_size,
        DisplayMode::Compact => config.compact_size,
        DisplayMode::Expanded => config.expanded_size,
    };
    let padding = config.content_padding;

    Size::new(width + padding * 2.0, height + padding)
}

/// Window origin keeping a window of `size` horizontally centred on the
/// screen and pinned `top_inset` below the top of the usable area.
pub fn window_origin(size: Size, screen: &ScreenGeometry, top_inset: f64) -> Point {
    Point::new(
        screen.frame.mid_x() - size.width / 2.0,
        screen.visible_frame.min_y() + top_inset,
    )
}
