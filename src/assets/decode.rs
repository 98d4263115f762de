use anyhow::Context;

use crate::foundation::{
    core::PixelBuffer,
    error::{StickerError, StickerResult},
};

/// Decode encoded image bytes into a straight RGBA8 [`PixelBuffer`].
pub fn decode_image(bytes: &[u8]) -> StickerResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StickerError::input(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

/// Resample a buffer to a `size`x`size` square with a smoothing filter.
///
/// Buffers already at the target size pass through unchanged, so the common
/// path (a cutout produced at canvas resolution) stays exact.
pub fn fit_to_canvas(buffer: PixelBuffer, size: u32) -> StickerResult<PixelBuffer> {
    if size == 0 {
        return Err(StickerError::input("canvas size must be non-zero"));
    }
    if buffer.width() == size && buffer.height() == size {
        return Ok(buffer);
    }

    let (w, h) = (buffer.width(), buffer.height());
    let img = image::RgbaImage::from_raw(w, h, buffer.into_raw())
        .context("rebuild image from pixel buffer")?;
    let resized = image::imageops::resize(&img, size, size, image::imageops::FilterType::Triangle);
    PixelBuffer::from_raw(size, size, resized.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
