//! Rasterization of the caption block onto the sticker canvas.

pub mod caption;
