use crate::foundation::{core::StickerStyle, error::StickerResult};

/// Measurement primitive used by the word wrapper.
///
/// The production implementation is [`crate::CaptionShaper`]; tests use a
/// fixed-advance mock.
pub trait TextMeasurer {
    /// Rendered width of `text` in pixels at the caption font/size.
    fn measure_width(&mut self, text: &str) -> StickerResult<f32>;
}

/// Greedily wrap `caption` into lines no wider than `max_width_px`.
///
/// Words are whitespace-separated and never broken mid-word: a word is moved
/// to the next line only when the current line already holds at least one
/// word, so a single word wider than the limit stays on its own line
/// unmodified. An empty caption yields exactly one empty line.
pub fn wrap_caption(
    caption: &str,
    max_width_px: f32,
    measurer: &mut dyn TextMeasurer,
) -> StickerResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in caption.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measurer.measure_width(&candidate)? > max_width_px && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }

    lines.push(current);
    Ok(lines)
}

/// Vertical center Y of each wrapped line on the canvas.
///
/// The block sits just above the bottom margin: with `L` lines of height
/// `line_height`, the block top is
/// `canvas - L * line_height - bottom_margin` and line `i` is centered
/// (middle-baseline) within its slot at `top + i * line_height + line_height / 2`.
pub fn line_middles(line_count: usize, style: &StickerStyle) -> Vec<f32> {
    let canvas = style.canvas_size as f32;
    let lh = style.line_height();
    let top = canvas - (line_count as f32) * lh - style.bottom_margin_px;
    (0..line_count)
        .map(|i| top + (i as f32) * lh + lh / 2.0)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
