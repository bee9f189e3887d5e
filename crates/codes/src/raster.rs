use image::{GrayImage, ImageFormat};
use std::io::Cursor;

/// Encodes a grayscale raster as PNG bytes.
pub(crate) fn encode_png(img: &GrayImage) -> Result<Vec<u8>, image::ImageError> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}
