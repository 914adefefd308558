//! Coordinate conversion between window space and label space.
//!
//! Label coordinates are relative to the top-left of the canvas area, which
//! moves as the palette slides open and closed.

use gpui::{Pixels, Point, point, px};

/// Convert a window position to label coordinates
#[inline]
pub fn window_to_label(window_pos: Point<Pixels>, origin: Point<Pixels>) -> (f32, f32) {
    (
        f32::from(window_pos.x - origin.x),
        f32::from(window_pos.y - origin.y),
    )
}

/// Convert label coordinates to a window position
#[inline]
pub fn label_to_window(label_pos: (f32, f32), origin: Point<Pixels>) -> Point<Pixels> {
    point(px(label_pos.0) + origin.x, px(label_pos.1) + origin.y)
}
