//! Mouse move handling - item dragging, corner resizing, drop tracking.
//!
//! ## Performance Notes
//!
//! Mouse move fires 60+ times per second during a drag. Non-drag states
//! exit early, and each move touches only the active item and its R-tree
//! entry.

use crate::app::LabelEditor;
use crate::input::InputState;
use crate::input::coords::window_to_label;
use crate::palette::TilePayload;
use crate::profile_scope;
use gpui::*;

impl LabelEditor {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.canvas.input_state.is_idle() {
            return;
        }
        profile_scope!("handle_mouse_move");

        // Button released outside the window
        if event.pressed_button != Some(MouseButton::Left) {
            self.canvas.input_state.finish();
            cx.notify();
            return;
        }

        let pos = window_to_label(event.position, self.canvas.origin);
        let state = self.canvas.input_state;
        let Some((dx, dy)) = self.canvas.input_state.advance(pos) else {
            return;
        };

        match state {
            InputState::DraggingItem { item_id, .. } => {
                self.canvas.label.move_item_by(item_id, dx, dy);
            }
            InputState::ResizingItem {
                item_id, corner, ..
            } => {
                profile_scope!("item_resize");
                self.canvas.label.resize_item(item_id, corner, dx, dy);
            }
            InputState::Idle => {}
        }
        cx.notify();
    }

    /// Remember where a dragged tile is so the drop lands under the pointer.
    pub fn handle_tile_drag_move(
        &mut self,
        event: &DragMoveEvent<TilePayload>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        if event.bounds.contains(&event.event.position) {
            self.canvas.last_drop_pos = Some(event.event.position);
        }
    }
}
