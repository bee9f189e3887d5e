//! Code 128 barcode rasterization.

use crate::error::CodeError;
use crate::raster::encode_png;
use barcoders::sym::code128::Code128;
use image::{GrayImage, Luma};

/// `barcoders` selects the initial Code 128 character set from a leading
/// Unicode marker: `\u{00C0}` = set A, `\u{00C1}` = set B, `\u{00C2}` = set C.
const CHARSET_B: &str = "\u{00C1}";

/// Raster options for a linear barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeOptions {
    /// Width of one module (x-dimension), in pixels.
    pub module_width: u32,
    /// Bar height, in pixels.
    pub height: u32,
    /// Quiet margin on every side, in pixels.
    pub margin: u32,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            module_width: 2,
            height: 50,
            margin: 5,
        }
    }
}

/// Encodes `content` as a Code 128 (set B) symbol and rasterizes it to PNG
/// bytes at the given module width, bar height, and quiet margin.
pub fn code128_png(content: &str, options: &BarcodeOptions) -> Result<Vec<u8>, CodeError> {
    let symbol = Code128::new(format!("{CHARSET_B}{content}"))
        .map_err(|e| CodeError::Barcode(e.to_string()))?;
    let modules = symbol.encode();
    log::debug!(
        "encoded code128 symbol: {} modules for {} input bytes",
        modules.len(),
        content.len()
    );
    Ok(encode_png(&rasterize(&modules, options))?)
}

fn rasterize(modules: &[u8], options: &BarcodeOptions) -> GrayImage {
    let margin = options.margin;
    let width = modules.len() as u32 * options.module_width + 2 * margin;
    let height = options.height + 2 * margin;
    GrayImage::from_fn(width, height, |x, y| {
        let in_band = x >= margin
            && x < width - margin
            && y >= margin
            && y < height - margin;
        if in_band {
            let module = ((x - margin) / options.module_width) as usize;
            if modules[module] == 1 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        } else {
            Luma([255u8])
        }
    })
}
