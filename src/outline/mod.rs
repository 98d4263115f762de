//! Silhouette synthesis: binary alpha masks and Chebyshev dilation.

pub mod dilate;
pub mod mask;
