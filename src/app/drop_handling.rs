//! Tile drops on the canvas and the barcode dialog they can open.

use super::LabelEditor;
use super::state::BarcodeDialog;
use crate::barcode_dialog::BarcodeInput;
use crate::drop::{DropPrompts, PendingDrop, build_content, pick_image_file};
use crate::input::coords::window_to_label;
use crate::palette::TilePayload;
use crate::types::{ElementType, ItemContent};
use gpui::*;
use gpui_component::input::{InputEvent, InputState};
use std::path::PathBuf;

/// Prompts backed by the barcode dialog (already answered) and the native
/// file picker.
struct EditorPrompts {
    barcode: Option<String>,
}

impl DropPrompts for EditorPrompts {
    fn barcode_text(&mut self) -> Option<String> {
        self.barcode.take()
    }

    fn pick_image(&mut self) -> Option<PathBuf> {
        pick_image_file()
    }
}

impl LabelEditor {
    /// Handle a palette tile released over the canvas.
    pub fn handle_tile_drop(&mut self, payload: &TilePayload, window: &mut Window, cx: &mut Context<Self>) {
        if !payload.is_tile() || self.ui.pending_drop.is_waiting() {
            return;
        }
        let Some(drop_pos) = self.canvas.last_drop_pos.take() else {
            tracing::debug!("tile dropped without a known position");
            return;
        };
        let position = window_to_label(drop_pos, self.canvas.origin);
        let pending = PendingDrop {
            element_type: payload.element_type,
            position,
        };

        if payload.element_type == ElementType::Barcode {
            self.open_barcode_dialog(pending, window, cx);
        } else {
            self.place_dropped(pending, EditorPrompts { barcode: None });
            cx.notify();
        }
    }

    fn place_dropped(&mut self, pending: PendingDrop, mut prompts: EditorPrompts) {
        let item_width = self.settings.item_size.0;
        match build_content(
            pending.element_type,
            &mut prompts,
            self.settings.barcode_size,
            item_width,
        ) {
            Ok(Some(content)) => self.place_content(pending.position, content),
            Ok(None) => tracing::debug!(kind = %pending.element_type, "drop cancelled"),
            Err(e) => self.report_error("Failed to create element", e),
        }
    }

    fn place_content(&mut self, position: (f32, f32), content: ItemContent) {
        let is_barcode = matches!(content, ItemContent::Barcode { .. });
        let item_id = self
            .canvas
            .label
            .add_item(position, self.settings.item_size, content);
        if is_barcode {
            self.cache_barcode_image(item_id);
        }
    }

    pub fn open_barcode_dialog(&mut self, pending: PendingDrop, window: &mut Window, cx: &mut Context<Self>) {
        if !self.ui.pending_drop.hold(pending) {
            return;
        }
        let field = cx.new(|cx| InputState::new(window, cx).placeholder("Barcode text"));

        let field_clone = field.clone();
        window.defer(cx, move |window, cx| {
            field_clone.update(cx, |state, cx| {
                state.focus(window, cx);
            });
        });

        cx.subscribe(&field, |this, _field, event: &InputEvent, cx| {
            if let InputEvent::PressEnter { .. } = event {
                this.submit_barcode_dialog(cx);
            }
        })
        .detach();

        self.ui.barcode_dialog = Some(BarcodeDialog {
            input: BarcodeInput::new(),
            field,
        });
        self.ui.backdrop_clicked = false;
        cx.notify();
    }

    /// Accept the entered code; a blank one keeps the dialog open.
    pub fn submit_barcode_dialog(&mut self, cx: &mut Context<Self>) {
        let Some(ref mut dialog) = self.ui.barcode_dialog else {
            return;
        };

        let text = dialog.field.read(cx).value().to_string();
        dialog.input.set_text(text);
        let code = match dialog.input.submit() {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!("barcode dialog: {}", e);
                cx.notify();
                return;
            }
        };

        self.ui.barcode_dialog = None;
        let Some(pending) = self.ui.pending_drop.release() else {
            return;
        };
        self.place_dropped(pending, EditorPrompts {
            barcode: Some(code),
        });
        cx.notify();
    }

    pub fn cancel_barcode_dialog(&mut self, cx: &mut Context<Self>) {
        if let Some(mut dialog) = self.ui.barcode_dialog.take() {
            dialog.input.cancel();
        }
        let pending = self.ui.pending_drop.release();
        tracing::debug!(?pending, "barcode dialog cancelled");
        cx.notify();
    }
}
