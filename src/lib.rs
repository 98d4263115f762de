//! Stickerpress turns an alpha-masked cutout plus a short caption into a
//! sticker-style asset.
//!
//! The pipeline is a linear five-stage sequence over in-memory pixel buffers:
//!
//! 1. **Mask**: cutout -> binary foreground mask ([`extract_alpha_mask`])
//! 2. **Dilate**: mask -> silhouette grown by a fixed radius ([`dilate_mask`])
//! 3. **Composite**: silhouette under the cutout on a fixed canvas, forming
//!    the outline ring ([`blank`], [`draw_over`])
//! 4. **Caption**: greedy word wrap plus stroke/fill glyph rendering near the
//!    canvas bottom ([`wrap_caption`], [`CaptionRenderer`])
//! 5. **Export**: lossless PNG bytes, re-encoded to lossless WebP
//!    ([`encode_png`], [`LosslessTranscoder`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce byte-identical PNG output.
//! - **No ambient state**: configuration is an explicit [`StickerStyle`]
//!   value; network collaborators (background removal) sit behind the
//!   [`CutoutProvider`] trait and never run inside the pixel stages.
//! - **Straight RGBA8** end-to-end, so the primary serialization preserves
//!   every channel exactly.
//!
//! [`StickerPipeline::run`] wires the stages together and is the
//! caller-facing entry point.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compose;
mod encode;
mod foundation;
mod outline;
mod pipeline;
mod render;
mod text;

pub use assets::decode::{decode_image, fit_to_canvas};
pub use compose::blend::{over, over_in_place};
pub use compose::canvas::{blank, draw_over};
pub use encode::png::encode_png;
pub use encode::webp::{LosslessTranscoder, WebpTranscoder};
pub use foundation::core::{PixelBuffer, StickerStyle};
pub use foundation::error::{StickerError, StickerResult};
pub use outline::dilate::dilate_mask;
pub use outline::mask::extract_alpha_mask;
pub use pipeline::{compose_sticker_canvas, CutoutProvider, Sticker, StickerPipeline};
pub use render::caption::CaptionRenderer;
pub use text::shape::{CaptionShaper, TextBrushRgba8};
pub use text::wrap::{line_middles, wrap_caption, TextMeasurer};
