/// Convenience result type used throughout keepsake.
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

/// Top-level error type used by the public API.
///
/// The generators themselves are total; errors only surface at the edges
/// (settings loading, backend construction, image output).
#[derive(thiserror::Error, Debug)]
pub enum KeepsakeError {
    /// Invalid settings or input parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster backend failure.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem failure while reading settings or writing output.
    #[error("io error: {0}")]
    Io(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeepsakeError {
    /// Build [`KeepsakeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`KeepsakeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build [`KeepsakeError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build [`KeepsakeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
