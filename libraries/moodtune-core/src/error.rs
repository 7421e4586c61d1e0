//! Core error types for Moodtune
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Moodtune
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Track catalog errors (search, mood lookup)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Artwork lookup errors
    #[error("Artwork error: {0}")]
    Artwork(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create an artwork error
    pub fn artwork(msg: impl Into<String>) -> Self {
        Self::Artwork(msg.into())
    }
}
