//! CODE128 barcode generation.
//!
//! - `code128`: text to symbol values and modules
//! - `render`: modules to a centred black-on-white image
//! - `error`: error types

pub mod code128;
pub mod error;
pub mod render;

pub use code128::Code128;
pub use error::{BarcodeError, BarcodeResult};

use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Encode `data` as CODE128 and draw it into a `width` x `height` image.
pub fn generate_barcode_image(data: &str, width: u32, height: u32) -> BarcodeResult<RgbaImage> {
    let code = Code128::encode(data)?;
    let image = render::render_symbol(&code, width, height)?;
    tracing::debug!(
        data,
        width,
        height,
        modules = code.module_count(),
        "barcode generated"
    );
    Ok(image)
}

/// PNG-encode an image.
pub fn encode_png(image: &RgbaImage) -> BarcodeResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
