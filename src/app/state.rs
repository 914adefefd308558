//! Application state - the LabelEditor struct definition and sub-structs.

use crate::barcode_dialog::BarcodeInput;
use crate::drop::PendingSlot;
use crate::input::InputState as CanvasInputState;
use crate::label::Label;
use crate::notifications::ToastManager;
use crate::palette::PaletteAnimation;
use crate::printer::Printer;
use crate::selection::Selection;
use crate::settings::Settings;
use crate::text_edit::TextEditSession;
use gpui::*;
use gpui_component::input::InputState;
use std::collections::HashMap;
use std::sync::Arc;

/// Canvas interaction state - the label, selection, drag/resize
pub struct CanvasState {
    /// Items on the label
    pub label: Label,
    /// The single selected item
    pub selection: Selection,
    /// Input state machine for drag and resize
    pub input_state: CanvasInputState,
    /// Window position of the label origin, refreshed every frame
    pub origin: Point<Pixels>,
    /// Last pointer position seen while a tile was dragged over the canvas
    pub last_drop_pos: Option<Point<Pixels>>,
    /// PNG-encoded barcode rasters keyed by item ID
    pub barcode_images: HashMap<u64, Arc<Image>>,
}

/// Textbox editing state
pub struct TextboxState {
    /// Open edit session, if any
    pub session: Option<TextEditSession>,
    /// Input for editing the textbox
    pub input: Option<Entity<InputState>>,
}

/// Barcode dialog opened by a barcode tile drop
pub struct BarcodeDialog {
    pub input: BarcodeInput,
    pub field: Entity<InputState>,
}

/// UI state - palette slide, modals, toasts
pub struct UiState {
    pub palette: PaletteAnimation,
    pub barcode_dialog: Option<BarcodeDialog>,
    /// Where the barcode goes once a code is accepted
    pub pending_drop: PendingSlot,
    /// Mouse went down on the dialog backdrop (close on matching mouse up)
    pub backdrop_clicked: bool,
    /// Toast notification manager
    pub toast_manager: ToastManager,
}

/// Main application state - composed of focused sub-structs
pub struct LabelEditor {
    pub canvas: CanvasState,
    pub textbox: TextboxState,
    pub ui: UiState,
    pub settings: Settings,
    /// Printer the Print action submits to
    pub printer: Option<Box<dyn Printer>>,
    pub focus_handle: FocusHandle,
}
