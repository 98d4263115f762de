//! Serialization of the finished canvas: lossless PNG plus the
//! alternate-format (WebP) re-encode boundary.

pub mod png;
pub mod webp;
