use std::io::Cursor;

use crate::foundation::{
    core::PixelBuffer,
    error::{StickerError, StickerResult},
};

/// Serialize a canvas to PNG bytes.
///
/// PNG is lossless and alpha-preserving: decoding the result reproduces the
/// canvas bytes exactly, and identical canvases yield identical output.
pub fn encode_png(canvas: &PixelBuffer) -> StickerResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(
        canvas.width(),
        canvas.height(),
        canvas.data().to_vec(),
    )
    .ok_or_else(|| StickerError::encode("canvas byte length mismatch"))?;

    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|e| StickerError::encode(format!("png encode: {e}")))?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
