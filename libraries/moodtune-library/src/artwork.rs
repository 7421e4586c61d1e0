//! Artwork resolution with LRU caching
//!
//! The now-playing screen asks for a large cover image per track. Lookups go
//! to an `ArtworkLookup` once per title/artist pair; hits are cached.

use lru::LruCache;
use moodtune_core::{ArtworkLookup, Track};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Thumbnail size token returned by lookup services
const THUMBNAIL_SIZE: &str = "100x100bb";

/// Size token substituted for display
const DISPLAY_SIZE: &str = "500x500bb";

/// Resolves artwork URLs through a lookup, caching found URLs
pub struct ArtworkResolver<L> {
    lookup: L,
    cache: Arc<Mutex<LruCache<String, String>>>,
}

impl<L: ArtworkLookup> ArtworkResolver<L> {
    /// Create a resolver with the specified cache size
    ///
    /// # Arguments
    /// * `cache_size` - Maximum number of URLs to cache (0 is treated as 1)
    pub fn new(lookup: L, cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            lookup,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Large artwork URL for a track
    ///
    /// Returns `None` when the lookup finds nothing or fails. Failures are
    /// logged and never cached, so the next call retries.
    pub async fn resolve(&self, track: &Track) -> Option<String> {
        let key = cache_key(track);

        // Check cache first
        let cached = self.lock().get(&key).cloned();
        if cached.is_some() {
            return cached;
        }

        match self.lookup.lookup(&track.title, &track.artist).await {
            Ok(Some(url)) => {
                let url = upsize(&url);
                debug!(track_id = %track.id, url = %url, "Artwork resolved");
                self.lock().put(key, url.clone());
                Some(url)
            }
            Ok(None) => {
                debug!(track_id = %track.id, "No artwork found");
                None
            }
            Err(e) => {
                warn!(track_id = %track.id, error = %e, "Artwork lookup failed");
                None
            }
        }
    }

    /// Resolved artwork, else the track's own artwork
    pub async fn display_artwork(&self, track: &Track) -> Option<String> {
        match self.resolve(track).await {
            Some(url) => Some(url),
            None => track.artwork.clone(),
        }
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    /// Number of cached URLs
    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, String>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn cache_key(track: &Track) -> String {
    format!("{}|{}", track.title, track.artist)
}

/// Swap the thumbnail size token for the display size
fn upsize(url: &str) -> String {
    url.replace(THUMBNAIL_SIZE, DISPLAY_SIZE)
}
