//! Overlays drawn above the canvas - the barcode dialog and toasts.

mod barcode_dialog;
mod modal_base;
mod toasts;

pub use barcode_dialog::render_barcode_dialog;
pub use toasts::render_toasts;
