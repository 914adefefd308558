//! Input state machine - unified state management for pointer interactions.
//!
//! A single explicit state replaces separate "is dragging" / "is resizing"
//! flags, so an item can never be dragged and resized at the same time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingItem   (left mouse down on an item, not on a handle)
//! Idle -> ResizingItem   (left mouse down on a handle of the selected item)
//!
//! Any -> Idle            (mouse up - finalizes operation)
//! ```
//!
//! Positions are canvas coordinates.

use super::handles::ResizeCorner;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No active pointer operation
    #[default]
    Idle,

    /// Moving an item with the pointer
    DraggingItem {
        item_id: u64,
        /// Pointer position at the previous move event
        last_pos: (f32, f32),
    },

    /// Resizing an item from one corner
    ResizingItem {
        item_id: u64,
        corner: ResizeCorner,
        /// Pointer position at the previous move event
        last_pos: (f32, f32),
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingItem { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    /// The item being dragged or resized
    pub fn active_item(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { item_id, .. } | Self::ResizingItem { item_id, .. } => Some(*item_id),
        }
    }

    pub fn start_dragging(&mut self, item_id: u64, pos: (f32, f32)) {
        tracing::debug!(item_id, "drag started");
        *self = Self::DraggingItem {
            item_id,
            last_pos: pos,
        };
    }

    pub fn start_resizing(&mut self, item_id: u64, corner: ResizeCorner, pos: (f32, f32)) {
        tracing::debug!(item_id, ?corner, "resize started");
        *self = Self::ResizingItem {
            item_id,
            corner,
            last_pos: pos,
        };
    }

    /// Record a pointer move and return the delta since the previous one.
    ///
    /// Returns `None` when idle.
    pub fn advance(&mut self, pos: (f32, f32)) -> Option<(f32, f32)> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { last_pos, .. } | Self::ResizingItem { last_pos, .. } => {
                let delta = (pos.0 - last_pos.0, pos.1 - last_pos.1);
                *last_pos = pos;
                Some(delta)
            }
        }
    }

    /// Reset to Idle, returning the item that was active
    pub fn finish(&mut self) -> Option<u64> {
        let item = self.active_item();
        *self = Self::Idle;
        item
    }
}
