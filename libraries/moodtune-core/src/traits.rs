//! Collaborator traits for Moodtune
//!
//! The playback core never talks to these directly; screens and applications
//! fetch track lists through them and hand the results to the playback state.
use crate::error::Result;
use crate::types::{Mood, MoodId, Track};
use async_trait::async_trait;

/// Source of ordered track lists
///
/// Implementers may be remote catalogs or bundled datasets. Lists are returned
/// in display order, which is also the navigation order used by playback.
#[async_trait]
pub trait TrackProvider: Send + Sync {
    /// All moods the provider can build playlists for
    async fn moods(&self) -> Result<Vec<Mood>>;

    /// Ordered playlist for a mood (empty when the mood is unknown)
    async fn tracks_for_mood(&self, mood: &MoodId) -> Result<Vec<Track>>;

    /// Free-text search over titles and artists
    async fn search(&self, query: &str) -> Result<Vec<Track>>;

    /// Every track the provider knows about
    async fn all_tracks(&self) -> Result<Vec<Track>>;
}

/// Opaque string key-value persistence
///
/// Used for the favorites list and the theme flag.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `Ok(None)` when the key was never set
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key (no error if missing)
    async fn remove(&self, key: &str) -> Result<()>;
}

/// One-shot artwork lookup keyed by title and artist
#[async_trait]
pub trait ArtworkLookup: Send + Sync {
    /// Find an artwork URL, `Ok(None)` when nothing matched
    async fn lookup(&self, title: &str, artist: &str) -> Result<Option<String>>;
}
