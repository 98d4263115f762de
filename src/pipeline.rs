use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::decode::{decode_image, fit_to_canvas},
    compose::canvas,
    encode::{png::encode_png, webp::LosslessTranscoder},
    foundation::{
        core::{PixelBuffer, StickerStyle},
        error::StickerResult,
    },
    outline::{dilate::dilate_mask, mask::extract_alpha_mask},
    render::caption::CaptionRenderer,
};

/// Background-removal collaborator.
///
/// Consumes an arbitrary encoded source image and produces a PNG byte
/// stream with the subject isolated on a transparent background. Network
/// details (endpoints, credentials, retries) belong to implementations;
/// failures surface as [`crate::StickerError::Service`].
pub trait CutoutProvider {
    /// Remove the background of `source_image`, returning PNG cutout bytes.
    fn cutout(&self, source_image: &[u8]) -> StickerResult<Vec<u8>>;
}

/// Finished sticker artifacts. The caller owns persistence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sticker {
    /// Primary raster: lossless, alpha-preserving PNG bytes.
    pub primary_png: Vec<u8>,
    /// Alternate raster: lossless WebP bytes.
    pub alternate_webp: Vec<u8>,
}

impl Sticker {
    /// Write both artifacts into `dir` as `<stem>.png` and `<stem>.webp`,
    /// creating the directory if needed. Returns the two paths.
    pub fn write_to_dir(&self, dir: &Path, stem: &str) -> StickerResult<(PathBuf, PathBuf)> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory '{}'", dir.display()))?;
        let png_path = dir.join(format!("{stem}.png"));
        let webp_path = dir.join(format!("{stem}.webp"));
        std::fs::write(&png_path, &self.primary_png)
            .with_context(|| format!("write '{}'", png_path.display()))?;
        std::fs::write(&webp_path, &self.alternate_webp)
            .with_context(|| format!("write '{}'", webp_path.display()))?;
        Ok((png_path, webp_path))
    }
}

/// Compose the final sticker canvas from an already-decoded cutout.
///
/// This is the pure, collaborator-free core: mask extraction, silhouette
/// dilation, layering, and caption rendering. Deterministic for a given
/// cutout/caption/style.
pub fn compose_sticker_canvas(
    cutout: &PixelBuffer,
    caption: &str,
    style: &StickerStyle,
    renderer: &mut CaptionRenderer,
) -> StickerResult<PixelBuffer> {
    let mask = extract_alpha_mask(cutout)?;
    let silhouette = dilate_mask(&mask, style.outline_radius_px)?;

    let mut out = canvas::blank(cutout.width(), cutout.height())?;
    canvas::draw_over(&mut out, &silhouette)?;
    canvas::draw_over(&mut out, cutout)?;

    renderer.render_caption(&mut out, caption, style)?;
    Ok(out)
}

/// The sticker pipeline: collaborators at the edges, pure pixel stages in
/// the middle.
///
/// Each [`run`](Self::run) call allocates its own buffers; nothing is shared
/// across requests, so independent pipelines may run concurrently.
#[derive(Debug)]
pub struct StickerPipeline<C: CutoutProvider, T: LosslessTranscoder> {
    style: StickerStyle,
    renderer: CaptionRenderer,
    cutout: C,
    transcoder: T,
}

impl<C: CutoutProvider, T: LosslessTranscoder> StickerPipeline<C, T> {
    /// Build a pipeline from an explicit style value, caption font bytes,
    /// and the two collaborators.
    pub fn new(
        style: StickerStyle,
        font_bytes: Vec<u8>,
        cutout: C,
        transcoder: T,
    ) -> StickerResult<Self> {
        style.validate()?;
        let renderer = CaptionRenderer::new(font_bytes, &style)?;
        Ok(Self {
            style,
            renderer,
            cutout,
            transcoder,
        })
    }

    /// Style value this pipeline was built with.
    pub fn style(&self) -> &StickerStyle {
        &self.style
    }

    /// Turn a source image plus caption into sticker artifacts.
    ///
    /// Stages run in order: cutout service, decode + fit, mask, dilate,
    /// composite, caption, PNG, WebP. Any stage failure aborts immediately
    /// and propagates with its stage-identifying error variant; no partial
    /// result is returned.
    #[tracing::instrument(skip(self, source_image, caption), fields(caption_len = caption.len()))]
    pub fn run(&mut self, source_image: &[u8], caption: &str) -> StickerResult<Sticker> {
        let cutout_png = self.cutout.cutout(source_image)?;
        let cutout = decode_image(&cutout_png)?;
        let cutout = fit_to_canvas(cutout, self.style.canvas_size)?;

        let canvas = compose_sticker_canvas(&cutout, caption, &self.style, &mut self.renderer)?;

        let primary_png = encode_png(&canvas)?;
        let alternate_webp = self.transcoder.transcode(&primary_png)?;
        Ok(Sticker {
            primary_png,
            alternate_webp,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
