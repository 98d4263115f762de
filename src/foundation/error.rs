/// Convenience result type used across Stickerpress.
pub type StickerResult<T> = Result<T, StickerError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Every variant identifies the stage that failed; stage failures abort the
/// remaining pipeline immediately and propagate to the caller. Nothing is
/// swallowed and logged.
#[derive(thiserror::Error, Debug)]
pub enum StickerError {
    /// Malformed or missing source data (bad image bytes, mismatched or
    /// zero-sized buffers, invalid style values).
    #[error("input error: {0}")]
    Input(String),

    /// A network collaborator (background removal) was unavailable or
    /// rejected the request.
    #[error("service error: {0}")]
    Service(String),

    /// Font registration, text measurement, or glyph rendering failure.
    #[error("render error: {0}")]
    Render(String),

    /// Primary serialization or alternate-format re-encode failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StickerError {
    /// Build a [`StickerError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`StickerError::Service`] value.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    /// Build a [`StickerError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StickerError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
