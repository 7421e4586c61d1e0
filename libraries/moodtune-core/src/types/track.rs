//! Track domain type
use super::ids::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One playable song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Identifier, unique within the list the track came from
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Artwork URL or opaque image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,

    /// Playback length in seconds (absent for catalog entries without one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
}

impl Track {
    /// Create a track with display metadata only
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            artist: artist.into(),
            artwork: None,
            duration_secs: None,
        }
    }

    /// Attach an artwork reference
    #[must_use]
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    /// Attach a playback length in seconds
    #[must_use]
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    /// Get the track duration, if known
    pub fn duration(&self) -> Option<Duration> {
        self.duration_secs.map(|secs| Duration::from_secs(u64::from(secs)))
    }

    /// Duration used for progress, falling back when the track has none
    pub fn duration_or(&self, fallback: Duration) -> Duration {
        self.duration().unwrap_or(fallback)
    }
}
