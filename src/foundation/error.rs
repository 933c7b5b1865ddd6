use crate::foundation::core::Dimensions;

/// Convenience result type used across the touch-up engine.
pub type TouchupResult<T> = Result<T, TouchupError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TouchupError {
    /// Invalid user-provided configuration, brush parameters or scripts.
    #[error("validation error: {0}")]
    Validation(String),

    /// The cutout and the original image do not share pixel dimensions.
    #[error(
        "dimension mismatch: cutout is {}x{}, original is {}x{}",
        cutout.width,
        cutout.height,
        original.width,
        original.height
    )]
    DimensionMismatch {
        /// Dimensions of the AI-processed cutout.
        cutout: Dimensions,
        /// Dimensions of the unmodified source image.
        original: Dimensions,
    },

    /// A source raster could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding the edited buffer failed. The in-memory buffer is untouched.
    #[error("export error: {0}")]
    Export(String),

    /// An operation was requested in a state that does not permit it.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TouchupError {
    /// Build a [`TouchupError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TouchupError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TouchupError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`TouchupError::InvalidState`] value.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
