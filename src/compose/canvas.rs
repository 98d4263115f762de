use crate::{
    compose::blend,
    foundation::{
        core::PixelBuffer,
        error::{StickerError, StickerResult},
    },
};

/// Allocate a fully transparent canvas.
pub fn blank(width: u32, height: u32) -> StickerResult<PixelBuffer> {
    PixelBuffer::new(width, height)
}

/// Draw `layer` over `canvas` at offset (0,0).
///
/// Both buffers must share dimensions; wherever the layer is fully opaque
/// the canvas pixel becomes exactly the layer pixel.
pub fn draw_over(canvas: &mut PixelBuffer, layer: &PixelBuffer) -> StickerResult<()> {
    if !canvas.same_dimensions(layer) {
        return Err(StickerError::input(format!(
            "draw_over expects matching dimensions, got {}x{} over {}x{}",
            layer.width(),
            layer.height(),
            canvas.width(),
            canvas.height()
        )));
    }
    blend::over_in_place(canvas.data_mut(), layer.data())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/canvas.rs"]
mod tests;
