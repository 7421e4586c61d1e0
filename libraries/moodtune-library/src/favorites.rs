//! Favorite tracks
//!
//! Stored as a JSON array of tracks under a single key, most recent last.

use crate::error::Result;
use moodtune_core::{KeyValueStore, Track, TrackId};
use tracing::{debug, warn};

/// Store key holding the favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Persistent favorites list
pub struct Favorites<S> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All favorites, in the order they were added
    ///
    /// A stored value that fails to parse is treated as an empty list.
    pub async fn list(&self) -> Result<Vec<Track>> {
        let Some(raw) = self.store.get(FAVORITES_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(tracks) => Ok(tracks),
            Err(e) => {
                warn!(error = %e, "Stored favorites are corrupt, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Whether a track is a favorite
    pub async fn contains(&self, id: &TrackId) -> Result<bool> {
        Ok(self.list().await?.iter().any(|track| &track.id == id))
    }

    /// Add a track; returns false if it was already there
    pub async fn add(&self, track: Track) -> Result<bool> {
        let mut tracks = self.list().await?;
        if tracks.iter().any(|t| t.id == track.id) {
            return Ok(false);
        }

        debug!(track_id = %track.id, "Adding favorite");
        tracks.push(track);
        self.save(&tracks).await?;
        Ok(true)
    }

    /// Remove a track; returns false if it was not there
    pub async fn remove(&self, id: &TrackId) -> Result<bool> {
        let mut tracks = self.list().await?;
        let before = tracks.len();
        tracks.retain(|track| &track.id != id);
        if tracks.len() == before {
            return Ok(false);
        }

        debug!(track_id = %id, "Removing favorite");
        self.save(&tracks).await?;
        Ok(true)
    }

    /// Flip membership; returns whether the track is now a favorite
    pub async fn toggle(&self, track: Track) -> Result<bool> {
        let id = track.id.clone();
        if self.remove(&id).await? {
            Ok(false)
        } else {
            self.add(track).await
        }
    }

    async fn save(&self, tracks: &[Track]) -> Result<()> {
        let raw = serde_json::to_string(tracks)?;
        self.store.set(FAVORITES_KEY, &raw).await?;
        Ok(())
    }
}
