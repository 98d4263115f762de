//! Decoding and resampling of source images.

pub mod decode;
