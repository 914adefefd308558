//! Mouse down event handling - selection, double-click editing, drag/resize initiation.
//!
//! ## Performance Notes
//!
//! Hit testing goes through the label's R-tree, so a click costs
//! O(log n) regardless of how many items are on the label.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::LabelEditor;
use crate::input::coords::window_to_label;
use crate::input::handles::corner_at;
use crate::profile_scope;
use gpui::*;

impl LabelEditor {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        // The barcode dialog is modal
        if self.ui.barcode_dialog.is_some() {
            return;
        }

        let pos = window_to_label(event.position, self.canvas.origin);
        let editing_id = self.textbox.session.as_ref().map(|s| s.item_id());

        // Handles of the selected item sit partly outside it, check them first
        let handle_hit = self.canvas.selection.selected().and_then(|id| {
            let item = self.canvas.label.get_item(id)?;
            corner_at(pos, item.position, item.size).map(|corner| (id, corner))
        });
        if let Some((item_id, corner)) = handle_hit {
            if editing_id.is_some() {
                self.finish_textbox_editing(cx);
            }
            self.canvas.input_state.start_resizing(item_id, corner, pos);
            window.focus(&self.focus_handle);
            cx.notify();
            return;
        }

        match self.canvas.label.item_at(pos.0, pos.1) {
            // Clicks inside the box being edited belong to its input
            Some(item_id) if editing_id == Some(item_id) => return,
            Some(item_id) => {
                if editing_id.is_some() {
                    self.finish_textbox_editing(cx);
                }
                self.select_item(item_id);

                let is_textbox = self
                    .canvas
                    .label
                    .get_item(item_id)
                    .is_some_and(|item| item.content.is_text_box());
                if event.click_count == 2 && is_textbox {
                    self.start_textbox_editing(item_id, window, cx);
                    return;
                }

                self.canvas.input_state.start_dragging(item_id, pos);
            }
            None => {
                // Clicked on empty canvas
                if editing_id.is_some() {
                    self.finish_textbox_editing(cx);
                }
                self.clear_selection();
            }
        }

        window.focus(&self.focus_handle);
        cx.notify();
    }
}
