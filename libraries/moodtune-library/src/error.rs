//! Library-specific errors
use moodtune_core::CoreError;
use thiserror::Error;

/// Result type alias using `LibraryError`
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Library error types
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Error raised by a collaborator (store, provider, lookup)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Stored data has an unexpected shape
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

impl LibraryError {
    /// Create an invalid data error
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

impl From<LibraryError> for CoreError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::Core(inner) => inner,
            LibraryError::Io(inner) => CoreError::Io(inner),
            LibraryError::Serialization(inner) => CoreError::Serialization(inner),
            LibraryError::InvalidData(msg) => CoreError::storage(msg),
        }
    }
}
