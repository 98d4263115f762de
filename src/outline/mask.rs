use crate::foundation::{core::PixelBuffer, error::StickerResult};

/// Opaque white mask pixel.
pub(crate) const MASK_OPAQUE: [u8; 4] = [255, 255, 255, 255];

/// Extract the binary foreground mask of a cutout.
///
/// Any pixel with non-zero alpha becomes fully opaque white; everything else
/// stays fully transparent. The output therefore satisfies the mask
/// invariant consumed by [`crate::dilate_mask`]: alpha is 0 or 255, and
/// opaque pixels are (255,255,255,255).
pub fn extract_alpha_mask(src: &PixelBuffer) -> StickerResult<PixelBuffer> {
    let mut out = PixelBuffer::new(src.width(), src.height())?;
    for (dst, px) in out
        .data_mut()
        .chunks_exact_mut(4)
        .zip(src.data().chunks_exact(4))
    {
        if px[3] > 0 {
            dst.copy_from_slice(&MASK_OPAQUE);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/outline/mask.rs"]
mod tests;
