use crate::foundation::error::{StickerError, StickerResult};

/// Owned grid of straight (non-premultiplied) RGBA8 pixels.
///
/// Every stage consumes and produces `PixelBuffer` values; ownership moves
/// across stage boundaries and no stage retains a reference after handing a
/// buffer on. Alpha 0 is fully transparent, 255 fully opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> StickerResult<Self> {
        Self::from_raw(width, height, vec![0u8; checked_len(width, height)?])
    }

    /// Wrap existing row-major RGBA8 bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> StickerResult<Self> {
        if width == 0 || height == 0 {
            return Err(StickerError::input("pixel buffer dimensions must be non-zero"));
        }
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(StickerError::input(format!(
                "pixel buffer expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable row-major RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read the pixel at `(x, y)`. Out-of-bounds coordinates are an error.
    pub fn pixel(&self, x: u32, y: u32) -> StickerResult<[u8; 4]> {
        let idx = self.index_of(x, y)?;
        Ok([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Write the pixel at `(x, y)`. Out-of-bounds coordinates are an error.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> StickerResult<()> {
        let idx = self.index_of(x, y)?;
        self.data[idx..idx + 4].copy_from_slice(&rgba);
        Ok(())
    }

    /// True when both dimensions match `other`.
    pub fn same_dimensions(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    fn index_of(&self, x: u32, y: u32) -> StickerResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(StickerError::input(format!(
                "pixel ({x}, {y}) out of bounds for {}x{} buffer",
                self.width, self.height
            )));
        }
        Ok(((y as usize * self.width as usize) + x as usize) * 4)
    }
}

fn checked_len(width: u32, height: u32) -> StickerResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| StickerError::input("pixel buffer size overflow"))
}

/// Explicit style/configuration value for the sticker pipeline.
///
/// Carried by value into the pipeline entry point; nothing is read from the
/// environment; the defaults form the observable contract.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StickerStyle {
    /// Square canvas side in pixels.
    pub canvas_size: u32,
    /// Silhouette dilation radius in pixels (Chebyshev).
    pub outline_radius_px: u32,
    /// Caption font size in pixels.
    pub font_size_px: f32,
    /// Extra vertical pixels added to the font size per line.
    pub line_gap_px: f32,
    /// Gap between the wrapped block and the canvas bottom edge.
    pub bottom_margin_px: f32,
    /// Caption outline stroke width in pixels.
    pub text_stroke_px: f32,
    /// Caption outline stroke color (straight RGBA8).
    pub text_stroke_rgba: [u8; 4],
    /// Caption fill color (straight RGBA8).
    pub text_fill_rgba: [u8; 4],
    /// Total horizontal padding subtracted from the canvas width, yielding
    /// the maximum caption line width.
    pub text_side_padding_px: f32,
}

impl Default for StickerStyle {
    fn default() -> Self {
        Self {
            canvas_size: 512,
            outline_radius_px: 10,
            font_size_px: 38.0,
            line_gap_px: 4.0,
            bottom_margin_px: 20.0,
            text_stroke_px: 4.0,
            text_stroke_rgba: [0, 0, 0, 255],
            text_fill_rgba: [255, 255, 255, 255],
            text_side_padding_px: 40.0,
        }
    }
}

impl StickerStyle {
    /// Validate style values before running the pipeline.
    pub fn validate(&self) -> StickerResult<()> {
        if self.canvas_size == 0 {
            return Err(StickerError::input("canvas_size must be non-zero"));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(StickerError::input("font_size_px must be finite and > 0"));
        }
        if !self.line_gap_px.is_finite() || self.line_gap_px < 0.0 {
            return Err(StickerError::input("line_gap_px must be finite and >= 0"));
        }
        if !self.bottom_margin_px.is_finite() || self.bottom_margin_px < 0.0 {
            return Err(StickerError::input("bottom_margin_px must be finite and >= 0"));
        }
        if !self.text_stroke_px.is_finite() || self.text_stroke_px < 0.0 {
            return Err(StickerError::input("text_stroke_px must be finite and >= 0"));
        }
        if !self.text_side_padding_px.is_finite()
            || self.text_side_padding_px < 0.0
            || self.text_side_padding_px >= self.canvas_size as f32
        {
            return Err(StickerError::input(
                "text_side_padding_px must be finite, >= 0 and smaller than the canvas",
            ));
        }
        Ok(())
    }

    /// Vertical advance per wrapped line.
    pub fn line_height(&self) -> f32 {
        self.font_size_px + self.line_gap_px
    }

    /// Maximum rendered line width for the caption block.
    pub fn max_text_width(&self) -> f32 {
        self.canvas_size as f32 - self.text_side_padding_px
    }

    /// Parse a style from JSON.
    pub fn from_json(json: &str) -> StickerResult<Self> {
        let style: Self = serde_json::from_str(json)
            .map_err(|e| StickerError::input(format!("invalid sticker style json: {e}")))?;
        style.validate()?;
        Ok(style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
