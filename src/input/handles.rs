//! Corner resize handles.
//!
//! A selected item shows four handles, one per corner. Dragging a handle
//! grows or shrinks the item from that corner while the opposite corner
//! stays put. Neither dimension drops below `MIN_ITEM_SIZE`.

use crate::constants::{MIN_ITEM_SIZE, RESIZE_HANDLE_SIZE, RESIZE_HANDLE_TOLERANCE};

/// One of the four corner handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeCorner {
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl ResizeCorner {
    pub fn all() -> [ResizeCorner; 4] {
        [
            ResizeCorner::LeftTop,
            ResizeCorner::RightTop,
            ResizeCorner::LeftBottom,
            ResizeCorner::RightBottom,
        ]
    }

    /// Whether dragging this handle moves the left edge
    pub fn moves_left_edge(self) -> bool {
        matches!(self, ResizeCorner::LeftTop | ResizeCorner::LeftBottom)
    }

    /// Whether dragging this handle moves the top edge
    pub fn moves_top_edge(self) -> bool {
        matches!(self, ResizeCorner::LeftTop | ResizeCorner::RightTop)
    }

    /// Center of this handle for an item at `position` with `size`.
    pub fn anchor(self, position: (f32, f32), size: (f32, f32)) -> (f32, f32) {
        let x = if self.moves_left_edge() { position.0 } else { position.0 + size.0 };
        let y = if self.moves_top_edge() { position.1 } else { position.1 + size.1 };
        (x, y)
    }

    /// Handle square (x, y, w, h) in the same space as `position`.
    pub fn handle_rect(self, position: (f32, f32), size: (f32, f32)) -> (f32, f32, f32, f32) {
        let (cx, cy) = self.anchor(position, size);
        let half = RESIZE_HANDLE_SIZE / 2.0;
        (cx - half, cy - half, RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE)
    }
}

/// Find the handle under a point, if any.
///
/// Bottom handles win over top ones and right over left when a tiny item
/// makes handles overlap.
pub fn corner_at(point: (f32, f32), position: (f32, f32), size: (f32, f32)) -> Option<ResizeCorner> {
    let reach = RESIZE_HANDLE_SIZE / 2.0 + RESIZE_HANDLE_TOLERANCE;
    [
        ResizeCorner::RightBottom,
        ResizeCorner::LeftBottom,
        ResizeCorner::RightTop,
        ResizeCorner::LeftTop,
    ]
    .into_iter()
    .find(|corner| {
        let (cx, cy) = corner.anchor(position, size);
        (point.0 - cx).abs() <= reach && (point.1 - cy).abs() <= reach
    })
}

/// Apply a handle drag delta to an item's geometry.
///
/// Returns the new `(position, size)`. When a left or top edge moves, the
/// position shifts by exactly the amount the size shrank, so clamping at the
/// minimum never drags the opposite edge along.
pub fn apply_resize(
    position: (f32, f32),
    size: (f32, f32),
    corner: ResizeCorner,
    dx: f32,
    dy: f32,
) -> ((f32, f32), (f32, f32)) {
    let (mut x, mut y) = position;
    let (old_w, old_h) = size;

    let new_w = if corner.moves_left_edge() {
        let w = (old_w - dx).max(MIN_ITEM_SIZE);
        x += old_w - w;
        w
    } else {
        (old_w + dx).max(MIN_ITEM_SIZE)
    };

    let new_h = if corner.moves_top_edge() {
        let h = (old_h - dy).max(MIN_ITEM_SIZE);
        y += old_h - h;
        h
    } else {
        (old_h + dy).max(MIN_ITEM_SIZE)
    };

    ((x, y), (new_w, new_h))
}
