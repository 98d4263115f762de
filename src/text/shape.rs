use crate::{
    foundation::error::{StickerError, StickerResult},
    text::wrap::TextMeasurer,
};

/// RGBA8 brush color attached to Parley layout runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<[u8; 4]> for TextBrushRgba8 {
    fn from(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }
}

/// Stateful helper that shapes caption lines with a caller-provided font.
///
/// The font bytes are registered once at construction; every layout resolves
/// against that family only, so measurement and rendering agree.
pub struct CaptionShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font_size_px: f32,
}

impl core::fmt::Debug for CaptionShaper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CaptionShaper")
            .field("family_name", &self.family_name)
            .field("font_size_px", &self.font_size_px)
            .finish_non_exhaustive()
    }
}

impl CaptionShaper {
    /// Register `font_bytes` and build a shaper producing layouts at
    /// `font_size_px`.
    pub fn new(font_bytes: &[u8], font_size_px: f32) -> StickerResult<Self> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(StickerError::render("font size must be finite and > 0"));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| StickerError::render("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StickerError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_size_px,
        })
    }

    /// Resolved family name of the registered font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape a single caption line. Wrapping has already happened upstream,
    /// so the layout is built without a break width.
    pub fn layout_line(
        &mut self,
        text: &str,
        brush: TextBrushRgba8,
    ) -> StickerResult<parley::Layout<TextBrushRgba8>> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.font_size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasurer for CaptionShaper {
    fn measure_width(&mut self, text: &str) -> StickerResult<f32> {
        let layout = self.layout_line(text, TextBrushRgba8::default())?;
        Ok(layout.width())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shape.rs"]
mod tests;
