//! Error types for barcode generation

use thiserror::Error;

/// Errors that can occur while encoding or rendering a barcode
#[derive(Error, Debug)]
pub enum BarcodeError {
    /// Nothing to encode
    #[error("Barcode data is empty")]
    Empty,

    /// CODE128 covers ASCII 0-127 only
    #[error("Character {ch:?} at position {position} cannot be encoded in CODE128")]
    UnsupportedCharacter { ch: char, position: usize },

    /// Zero-width target image
    #[error("Barcode width must be greater than zero")]
    ZeroWidth,

    /// Zero-height target image
    #[error("Barcode height must be greater than zero")]
    ZeroHeight,

    /// PNG encoding failed
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for barcode operations
pub type BarcodeResult<T> = Result<T, BarcodeError>;
