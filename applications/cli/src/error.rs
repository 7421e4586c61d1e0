//! CLI error types
use moodtune_core::CoreError;
use moodtune_library::LibraryError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Unknown track: {0}")]
    UnknownTrack(String),

    #[error("Nothing to play: the playlist is empty")]
    NothingToPlay,

    #[error("Invalid session command '{0}' (expected next, prev, toggle, shuffle or wait:<ticks>)")]
    InvalidCommand(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Library(#[from] LibraryError),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
