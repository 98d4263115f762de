//! Canvas layering: straight-alpha source-over compositing.

pub mod blend;
pub mod canvas;
