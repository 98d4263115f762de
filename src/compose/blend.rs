use crate::foundation::error::{StickerError, StickerResult};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Standard source-over for straight-alpha pixels.
///
/// `out_a = sa + da * (1 - sa)`; color channels are alpha-weighted and
/// renormalized by the result alpha, with round-to-nearest integer division.
/// An opaque source replaces the destination exactly, and a fully
/// transparent source is a no-op.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = u32::from(dst[3]);
    let inv = 255 - sa;

    // Weights share 1/255 units so the channel division is exact in u32.
    let sw = sa * 255;
    let dw = da * inv;
    // sa is in (0, 255) here, so wa >= 255 and the divisions are safe.
    let wa = sw + dw;

    let mut out = [0u8; 4];
    out[3] = ((wa + 127) / 255) as u8;
    for i in 0..3 {
        let num = u32::from(src[i]) * sw + u32::from(dst[i]) * dw;
        out[i] = ((num + wa / 2) / wa) as u8;
    }
    out
}

/// Composite `src` over `dst` across two equal-length RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> StickerResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StickerError::input(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
