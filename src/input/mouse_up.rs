//! Mouse up event handling - finalize drag and resize.

use crate::app::LabelEditor;
use gpui::*;

impl LabelEditor {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let was_resizing = self.canvas.input_state.is_resizing();
        let Some(item_id) = self.canvas.input_state.finish() else {
            return;
        };

        if let Some(item) = self.canvas.label.get_item(item_id) {
            tracing::debug!(
                item_id,
                x = item.position.0,
                y = item.position.1,
                w = item.size.0,
                h = item.size.1,
                resized = was_resizing,
                "item released"
            );
        }
        cx.notify();
    }
}
