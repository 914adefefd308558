//! Rasterizing an encoded symbol into a fixed-size image.

use super::code128::Code128;
use super::error::{BarcodeError, BarcodeResult};
use crate::constants::BARCODE_QUIET_ZONE;
use crate::profile_scope;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

const BAR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Pixel layout of a symbol inside its target image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolLayout {
    /// Width of one module in pixels
    pub module_px: u32,
    /// X offset of the first module (after the left quiet zone)
    pub left: u32,
}

impl SymbolLayout {
    /// Fit `module_count` modules plus quiet zones into `width` pixels.
    ///
    /// `None` when the width cannot hold one whole pixel per module.
    pub fn fit(module_count: usize, width: u32) -> Option<Self> {
        let modules = module_count as u32;
        let total = modules + 2 * BARCODE_QUIET_ZONE;
        let module_px = width / total;
        if module_px == 0 {
            return None;
        }

        let symbol_px = module_px * modules;
        Some(Self {
            module_px,
            left: (width - symbol_px) / 2,
        })
    }

    /// One pixel per module, quiet zones included.
    fn unscaled(module_count: usize) -> (Self, u32) {
        let layout = Self {
            module_px: 1,
            left: BARCODE_QUIET_ZONE,
        };
        (layout, module_count as u32 + 2 * BARCODE_QUIET_ZONE)
    }
}

fn draw_bars(modules: &[bool], layout: SymbolLayout, width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);
    for (index, _) in modules.iter().enumerate().filter(|(_, is_bar)| **is_bar) {
        let x0 = layout.left + index as u32 * layout.module_px;
        for x in x0..x0 + layout.module_px {
            for y in 0..height {
                image.put_pixel(x, y, BAR);
            }
        }
    }
    image
}

/// Draw the symbol centred on a white image of exactly `width` x `height`.
///
/// Narrow targets get the symbol at one pixel per module, resampled down to
/// the requested width.
pub fn render_symbol(code: &Code128, width: u32, height: u32) -> BarcodeResult<RgbaImage> {
    profile_scope!("barcode_render");

    if width == 0 {
        return Err(BarcodeError::ZeroWidth);
    }
    if height == 0 {
        return Err(BarcodeError::ZeroHeight);
    }
    let modules = code.modules();

    match SymbolLayout::fit(modules.len(), width) {
        Some(layout) => Ok(draw_bars(&modules, layout, width, height)),
        None => {
            let (layout, full_width) = SymbolLayout::unscaled(modules.len());
            tracing::debug!(full_width, width, "resampling barcode to fit");
            let full = draw_bars(&modules, layout, full_width, height);
            Ok(imageops::resize(&full, width, height, FilterType::Nearest))
        }
    }
}
