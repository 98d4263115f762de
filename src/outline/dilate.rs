use rayon::prelude::*;

use crate::{
    foundation::{core::PixelBuffer, error::StickerResult},
    outline::mask::MASK_OPAQUE,
};

/// Dilate a binary mask by `radius` pixels of Chebyshev distance.
///
/// Equivalent to stamping the mask at every integer offset in
/// `[-radius, radius]^2`: a destination pixel becomes opaque white exactly
/// when some source pixel within Chebyshev distance `radius` is opaque.
/// Offsets falling outside the canvas are clipped; there is no wraparound
/// and edge pixels are not repeated.
///
/// The square structuring element is separable, so the dilation runs as a
/// horizontal and a vertical running-max pass over the alpha plane instead
/// of `(2R+1)^2` full-canvas stamps. Rows are independent within each pass
/// and are processed in parallel.
pub fn dilate_mask(mask: &PixelBuffer, radius: u32) -> StickerResult<PixelBuffer> {
    if radius == 0 {
        return Ok(mask.clone());
    }

    let (w, h) = (mask.width() as usize, mask.height() as usize);
    let alpha: Vec<u8> = mask.data().iter().skip(3).step_by(4).copied().collect();

    let mut tmp = vec![0u8; w * h];
    horizontal_pass(&alpha, &mut tmp, w, radius as usize);
    let mut grown = vec![0u8; w * h];
    vertical_pass(&tmp, &mut grown, w, h, radius as usize);

    let mut out = PixelBuffer::new(mask.width(), mask.height())?;
    for (dst, &a) in out.data_mut().chunks_exact_mut(4).zip(grown.iter()) {
        if a > 0 {
            dst.copy_from_slice(&MASK_OPAQUE);
        }
    }
    Ok(out)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], w: usize, radius: usize) {
    dst.par_chunks_exact_mut(w)
        .zip(src.par_chunks_exact(w))
        .for_each(|(dst_row, src_row)| {
            for (x, out) in dst_row.iter_mut().enumerate() {
                let lo = x.saturating_sub(radius);
                let hi = (x + radius).min(w - 1);
                if src_row[lo..=hi].iter().any(|&a| a > 0) {
                    *out = 255;
                }
            }
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], w: usize, h: usize, radius: usize) {
    dst.par_chunks_exact_mut(w)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let lo = y.saturating_sub(radius);
            let hi = (y + radius).min(h - 1);
            for (x, out) in dst_row.iter_mut().enumerate() {
                if (lo..=hi).any(|sy| src[sy * w + x] > 0) {
                    *out = 255;
                }
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/outline/dilate.rs"]
mod tests;
