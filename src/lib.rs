//! Labelboard - a label designer.
//!
//! Elements are dragged from a tile palette onto a label surface, then
//! moved, resized, edited and finally rasterized for a printer. The core
//! (`label`, `selection`, `input::handles`, `text_edit`, `drop`, `barcode`,
//! `printer`, `raster`) has no GUI dependency; `app`, `input` and `render`
//! wire it into a gpui window.

pub mod app;
pub mod barcode;
pub mod barcode_dialog;
pub mod constants;
pub mod drop;
pub mod error;
pub mod fonts;
pub mod input;
pub mod label;
pub mod notifications;
pub mod palette;
pub mod perf;
pub mod printer;
pub mod raster;
pub mod render;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod text_edit;
pub mod types;
