use crate::foundation::error::{StickerError, StickerResult};

/// Alternate-format collaborator: re-encodes the primary raster bytes into a
/// second lossless container.
///
/// Failures here are [`StickerError::Encode`] and abort the pipeline; a
/// primary artifact without its alternate is never treated as success.
pub trait LosslessTranscoder {
    /// Re-encode `primary_png` bytes, returning the alternate byte stream.
    fn transcode(&self, primary_png: &[u8]) -> StickerResult<Vec<u8>>;
}

/// Built-in transcoder producing lossless WebP via the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebpTranscoder;

impl LosslessTranscoder for WebpTranscoder {
    fn transcode(&self, primary_png: &[u8]) -> StickerResult<Vec<u8>> {
        let img = image::load_from_memory_with_format(primary_png, image::ImageFormat::Png)
            .map_err(|e| StickerError::encode(format!("decode primary png: {e}")))?
            .to_rgba8();
        let (width, height) = img.dimensions();

        let mut bytes = Vec::new();
        let encoder = image::codecs::webp::WebPEncoder::new_lossless(&mut bytes);
        encoder
            .encode(
                img.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| StickerError::encode(format!("webp encode: {e}")))?;
        Ok(bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/webp.rs"]
mod tests;
