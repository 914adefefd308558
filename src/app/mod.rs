//! Application module - the main LabelEditor state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The LabelEditor struct definition and sub-structs
//! - `lifecycle` - Initialization, selection, deletion and error surfacing
//! - `drop_handling` - Tile drops and the barcode dialog
//! - `textbox` - Textbox editing
//! - `printing` - The Print action

mod drop_handling;
mod lifecycle;
mod printing;
mod state;
mod textbox;

pub use state::LabelEditor;

// Re-export sub-structs for use in other modules
pub use state::{BarcodeDialog, CanvasState, TextboxState, UiState};
