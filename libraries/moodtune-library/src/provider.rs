//! Track provider with offline fallback
//!
//! Screens ask a remote catalog first. Any failure, or an empty answer, is
//! replaced by the bundled catalog's answer so the screen always has tracks.

use crate::catalog::OfflineCatalog;
use async_trait::async_trait;
use moodtune_core::{Mood, MoodId, Result, Track, TrackProvider};
use std::future::Future;
use tracing::{debug, warn};

/// Wraps a primary provider and falls back to the bundled catalog
pub struct FallbackProvider<P> {
    primary: P,
    offline: OfflineCatalog,
}

impl<P: TrackProvider> FallbackProvider<P> {
    /// Fall back to the bundled catalog
    pub fn new(primary: P) -> Self {
        Self::with_offline(primary, OfflineCatalog::bundled())
    }

    /// Fall back to a custom catalog
    pub fn with_offline(primary: P, offline: OfflineCatalog) -> Self {
        Self { primary, offline }
    }

    /// The wrapped provider
    pub fn primary(&self) -> &P {
        &self.primary
    }

    async fn or_offline<T, F>(&self, operation: &'static str, fetch: F, offline: Vec<T>) -> Vec<T>
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        match fetch.await {
            Ok(items) if !items.is_empty() => items,
            Ok(_) => {
                debug!(operation, "Primary provider returned nothing, using offline catalog");
                offline
            }
            Err(e) => {
                warn!(operation, error = %e, "Primary provider failed, using offline catalog");
                offline
            }
        }
    }
}

#[async_trait]
impl<P: TrackProvider> TrackProvider for FallbackProvider<P> {
    async fn moods(&self) -> Result<Vec<Mood>> {
        let offline = self.offline.mood_list().to_vec();
        Ok(self.or_offline("moods", self.primary.moods(), offline).await)
    }

    async fn tracks_for_mood(&self, mood: &MoodId) -> Result<Vec<Track>> {
        let offline = self.offline.playlist(mood).to_vec();
        Ok(self
            .or_offline("tracks_for_mood", self.primary.tracks_for_mood(mood), offline)
            .await)
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>> {
        let offline = self.offline.search_tracks(query);
        Ok(self
            .or_offline("search", self.primary.search(query), offline)
            .await)
    }

    async fn all_tracks(&self) -> Result<Vec<Track>> {
        let offline = self.offline.tracks().cloned().collect();
        Ok(self
            .or_offline("all_tracks", self.primary.all_tracks(), offline)
            .await)
    }
}
