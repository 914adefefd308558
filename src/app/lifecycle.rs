//! Application lifecycle - initialization, selection and deletion, error surfacing.

use super::state::{CanvasState, LabelEditor, TextboxState, UiState};
use crate::barcode::encode_png;
use crate::drop::PendingSlot;
use crate::input::InputState;
use crate::label::Label;
use crate::notifications::{Toast, ToastManager};
use crate::palette::PaletteAnimation;
use crate::printer::Printer;
use crate::selection::{Selection, delete_selected};
use crate::settings::Settings;
use crate::types::ItemContent;
use gpui::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

impl LabelEditor {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            canvas: CanvasState {
                label: Label::new(),
                selection: Selection::new(),
                input_state: InputState::default(),
                origin: point(px(0.0), px(0.0)),
                last_drop_pos: None,
                barcode_images: HashMap::new(),
            },
            textbox: TextboxState {
                session: None,
                input: None,
            },
            ui: UiState {
                palette: PaletteAnimation::new(),
                barcode_dialog: None,
                pending_drop: PendingSlot::new(),
                backdrop_clicked: false,
                toast_manager: ToastManager::new(),
            },
            settings: Settings::load(),
            printer: None,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Attach the printer used by the Print action.
    pub fn set_printer(&mut self, printer: Box<dyn Printer>, cx: &mut Context<Self>) {
        tracing::info!(printer = printer.name(), model = printer.model(), "printer attached");
        self.printer = Some(printer);
        cx.notify();
    }

    /// Log a swallowed failure and show it to the user.
    pub fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        tracing::warn!("{}: {}", context, error);
        self.ui
            .toast_manager
            .push(Toast::failure(context, error));
    }

    pub fn select_item(&mut self, item_id: u64) {
        if let Some(previous) = self.canvas.selection.select(item_id) {
            tracing::debug!(previous, item_id, "selection changed");
        }
    }

    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.canvas.selection.clear() {
            tracing::debug!(previous, "selection cleared");
        }
    }

    /// Remove the selected item from the label.
    pub fn delete_selected(&mut self, cx: &mut Context<Self>) {
        let Some(item_id) = self.canvas.selection.selected() else {
            return;
        };
        if self.textbox.session.as_ref().map(|s| s.item_id()) == Some(item_id) {
            self.cancel_textbox_editing(cx);
        }

        if let Some(item) = delete_selected(&mut self.canvas.label, &mut self.canvas.selection) {
            self.canvas.barcode_images.remove(&item.id);
        }
        cx.notify();
    }

    /// Cache the GPU-side image for a barcode item.
    pub fn cache_barcode_image(&mut self, item_id: u64) {
        let Some(ItemContent::Barcode { image, .. }) =
            self.canvas.label.get_item(item_id).map(|i| &i.content)
        else {
            return;
        };
        match encode_png(image) {
            Ok(bytes) => {
                self.canvas
                    .barcode_images
                    .insert(item_id, Arc::new(Image::from_bytes(ImageFormat::Png, bytes)));
            }
            Err(e) => self.report_error("Failed to encode barcode", e),
        }
    }

    /// Slide the tile palette open or closed.
    pub fn toggle_palette(&mut self, cx: &mut Context<Self>) {
        self.ui.palette.toggle(Instant::now());
        cx.notify();
    }

    /// Drop expired toasts; true if the view needs a repaint.
    pub fn prune_toasts(&mut self) -> bool {
        self.ui.toast_manager.remove_expired(Instant::now())
    }
}
