//! Canvas drop handling.
//!
//! A tile dropped on the canvas is turned into item content according to
//! its element type. Barcodes ask for the text to encode and images ask for
//! a file; either prompt can be cancelled, and either content can fail to
//! build. A drop therefore places exactly one item or none.

use crate::barcode::generate_barcode_image;
use crate::constants::{
    DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH, IMAGE_DIALOG_TITLE, IMAGE_EXTENSIONS,
    IMAGE_FILTER_NAME,
};
use crate::error::{LabelError, LabelResult};
use crate::label::Label;
use crate::types::{ElementType, ItemContent};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// User prompts needed to build barcode and image content.
pub trait DropPrompts {
    /// Text to encode, or `None` if the user cancelled
    fn barcode_text(&mut self) -> Option<String>;

    /// Image file to place, or `None` if the user cancelled
    fn pick_image(&mut self) -> Option<PathBuf>;
}

/// A drop waiting on the barcode dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDrop {
    pub element_type: ElementType,
    pub position: (f32, f32),
}

/// Holds at most one drop waiting on the barcode dialog.
///
/// While a drop waits, the dialog is modal: further drops are refused so the
/// waiting one is never replaced.
#[derive(Debug, Default)]
pub struct PendingSlot {
    waiting: Option<PendingDrop>,
}

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting.is_some()
    }

    pub fn waiting(&self) -> Option<&PendingDrop> {
        self.waiting.as_ref()
    }

    /// Hold `pending` until the dialog closes. Returns `false` and keeps the
    /// current drop if one is already waiting.
    pub fn hold(&mut self, pending: PendingDrop) -> bool {
        if let Some(current) = &self.waiting {
            tracing::debug!(?current, refused = ?pending, "drop refused while dialog is open");
            return false;
        }
        self.waiting = Some(pending);
        true
    }

    /// Take the waiting drop, leaving the slot free.
    pub fn release(&mut self) -> Option<PendingDrop> {
        self.waiting.take()
    }
}

/// Show the native image picker, filtered to supported formats.
pub fn pick_image_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter(IMAGE_FILTER_NAME, IMAGE_EXTENSIONS)
        .set_title(IMAGE_DIALOG_TITLE)
        .pick_file()
}

/// Generate barcode content at the given pixel size.
pub fn barcode_content(data: &str, pixel_size: (u32, u32)) -> LabelResult<ItemContent> {
    let image = generate_barcode_image(data, pixel_size.0, pixel_size.1)?;
    Ok(ItemContent::Barcode {
        data: data.to_string(),
        image: Arc::new(image),
    })
}

/// Load an image file into item content.
pub fn image_content(path: &Path) -> LabelResult<ItemContent> {
    let image = image::open(path).map_err(|source| LabelError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ItemContent::Image {
        path: path.to_path_buf(),
        image: Arc::new(image.to_rgba8()),
    })
}

/// Fixed-style content for types that need no prompt.
pub fn placeholder_content(element_type: ElementType, item_width: f32) -> Option<ItemContent> {
    match element_type {
        ElementType::Ellipse => Some(ItemContent::default_ellipse()),
        ElementType::Line => Some(ItemContent::default_line(item_width)),
        ElementType::Rectangle => Some(ItemContent::default_rectangle()),
        ElementType::RichTextbox => Some(ItemContent::default_text_box()),
        ElementType::Barcode | ElementType::Image => None,
    }
}

/// Build content for a dropped tile.
///
/// `Ok(None)` means the user cancelled a prompt.
pub fn build_content(
    element_type: ElementType,
    prompts: &mut dyn DropPrompts,
    barcode_size: (u32, u32),
    item_width: f32,
) -> LabelResult<Option<ItemContent>> {
    match element_type {
        ElementType::Barcode => prompts
            .barcode_text()
            .map(|text| barcode_content(&text, barcode_size))
            .transpose(),
        ElementType::Image => prompts
            .pick_image()
            .map(|path| image_content(&path))
            .transpose(),
        other => Ok(placeholder_content(other, item_width)),
    }
}

/// Place a dropped tile on the label at `position` with the default size.
///
/// Returns the new item's id, or `None` if a prompt was cancelled or the
/// content could not be built.
pub fn place_tile(
    label: &mut Label,
    element_type: ElementType,
    position: (f32, f32),
    prompts: &mut dyn DropPrompts,
) -> Option<u64> {
    let barcode_size = (DEFAULT_ITEM_WIDTH as u32, DEFAULT_ITEM_HEIGHT as u32);
    match build_content(element_type, prompts, barcode_size, DEFAULT_ITEM_WIDTH) {
        Ok(Some(content)) => Some(label.place(position, content)),
        Ok(None) => {
            tracing::debug!(kind = %element_type, "drop cancelled");
            None
        }
        Err(e) => {
            tracing::warn!(kind = %element_type, "failed to create element: {}", e);
            None
        }
    }
}
