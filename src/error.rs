//! Error types for label editing operations
//!
//! Covers content creation on drop (image loading, barcode generation),
//! item lookups, and settings IO.

use crate::barcode::BarcodeError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or editing label content
#[derive(Error, Debug)]
pub enum LabelError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image file could not be decoded
    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Barcode generation failed
    #[error("Barcode error: {0}")]
    Barcode(#[from] BarcodeError),

    /// No item with this id on the label
    #[error("Item {0} not found")]
    ItemNotFound(u64),

    /// Item exists but has no editable text
    #[error("Item {0} is not a text box")]
    NotEditable(u64),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for label operations
pub type LabelResult<T> = Result<T, LabelError>;

impl From<String> for LabelError {
    fn from(s: String) -> Self {
        LabelError::Other(s)
    }
}
