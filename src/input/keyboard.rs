//! Keyboard handling - Delete removes the selection, Escape leaves modes.

use crate::app::LabelEditor;
use crate::text_edit::EditKey;
use gpui::*;

/// Canvas actions reachable from the keyboard outside text editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasKey {
    DeleteSelected,
    ClearSelection,
}

impl CanvasKey {
    /// Map a gpui key name. Only Delete removes items; Backspace does not.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "delete" => Some(Self::DeleteSelected),
            "escape" => Some(Self::ClearSelection),
            _ => None,
        }
    }
}

impl LabelEditor {
    pub fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let key = event.keystroke.key.as_str();

        if self.is_editing_text() {
            // Enter variants arrive through the input's own events
            if key == "escape" {
                self.handle_textbox_key(EditKey::Escape, cx);
                cx.stop_propagation();
            }
            return;
        }

        if self.ui.barcode_dialog.is_some() {
            if key == "escape" {
                self.cancel_barcode_dialog(cx);
                cx.stop_propagation();
            }
            return;
        }

        match CanvasKey::from_key(key) {
            Some(CanvasKey::DeleteSelected) => self.delete_selected(cx),
            Some(CanvasKey::ClearSelection) => {
                self.clear_selection();
                cx.notify();
            }
            None => {}
        }
    }
}
