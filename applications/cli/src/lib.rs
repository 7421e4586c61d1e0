//! Moodtune CLI - browse moods, manage favorites and drive a playback session
//! from the terminal.

pub mod config;
pub mod error;
pub mod session;

pub use config::AppConfig;
pub use error::{CliError, Result};
