//! Moodtune Core
//!
//! Platform-agnostic core types, collaborator traits, and error handling for Moodtune.
//!
//! This crate provides the foundational building blocks shared by the playback
//! core, the collaborator library and the applications.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Mood` and their identifiers
//! - **Collaborator Traits**: `TrackProvider`, `KeyValueStore`, `ArtworkLookup`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use moodtune_core::types::{Mood, Track};
//!
//! let track = Track::new("s1", "Good Day Sunshine", "The Beatles").with_duration(129);
//! let mood = Mood::new("m1", "Happy", "😊", ["#fde047", "#f97316"]);
//!
//! assert_eq!(track.id.as_str(), "s1");
//! assert_eq!(mood.title, "Happy");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::{ArtworkLookup, KeyValueStore, TrackProvider};
pub use types::{Mood, MoodId, Track, TrackId};
