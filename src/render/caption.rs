use crate::{
    compose::canvas,
    foundation::{
        core::{PixelBuffer, StickerStyle},
        error::{StickerError, StickerResult},
    },
    text::{
        shape::CaptionShaper,
        wrap::{line_middles, wrap_caption},
    },
};

/// Renders wrapped caption lines onto a canvas.
///
/// Each line is drawn twice: a black stroke pass first, then a solid white
/// fill on top, so the outline never covers the fill. Lines are centered on
/// the canvas midline and stacked just above the bottom margin.
#[derive(Debug)]
pub struct CaptionRenderer {
    shaper: CaptionShaper,
    font: vello_cpu::peniko::FontData,
}

impl CaptionRenderer {
    /// Build a renderer around caller-provided font bytes.
    pub fn new(font_bytes: Vec<u8>, style: &StickerStyle) -> StickerResult<Self> {
        let shaper = CaptionShaper::new(&font_bytes, style.font_size_px)?;
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self { shaper, font })
    }

    /// Resolved family name of the registered caption font.
    pub fn family_name(&self) -> &str {
        self.shaper.family_name()
    }

    /// Wrap `caption` against the style's max width and draw it onto
    /// `canvas`.
    ///
    /// Glyphs are rasterized into a transparent vello_cpu layer which is
    /// read back and composited over the canvas, so stages stay pure
    /// buffer-to-buffer transforms.
    pub fn render_caption(
        &mut self,
        canvas: &mut PixelBuffer,
        caption: &str,
        style: &StickerStyle,
    ) -> StickerResult<()> {
        let lines = wrap_caption(caption, style.max_text_width(), &mut self.shaper)?;
        let middles = line_middles(lines.len(), style);

        let w: u16 = canvas
            .width()
            .try_into()
            .map_err(|_| StickerError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height()
            .try_into()
            .map_err(|_| StickerError::render("canvas height exceeds u16"))?;

        let stroke_color = color_from_rgba(style.text_stroke_rgba);
        let fill_color = color_from_rgba(style.text_fill_rgba);

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        for (line, y_mid) in lines.iter().zip(middles) {
            let layout = self.shaper.layout_line(line, style.text_fill_rgba.into())?;
            let x = (canvas.width() as f32 - layout.width()) / 2.0;
            let top = y_mid - layout.height() / 2.0;
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                f64::from(x),
                f64::from(top),
            )));

            for layout_line in layout.lines() {
                for item in layout_line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs: Vec<vello_cpu::Glyph> = run
                        .glyphs()
                        .map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        })
                        .collect();

                    // Stroke first; the fill must sit entirely on top.
                    ctx.set_paint(stroke_color);
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(f64::from(
                        style.text_stroke_px,
                    )));
                    ctx.glyph_run(&self.font)
                        .font_size(run.run().font_size())
                        .stroke_glyphs(glyphs.iter().copied());

                    ctx.set_paint(fill_color);
                    ctx.glyph_run(&self.font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs.into_iter());
                }
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        let mut layer = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut layer);
        let layer = PixelBuffer::from_raw(canvas.width(), canvas.height(), layer)?;
        canvas::draw_over(canvas, &layer)
    }
}

fn color_from_rgba(rgba: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in px.iter_mut().take(3) {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/caption.rs"]
mod tests;
