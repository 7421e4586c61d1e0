//! Shared playback handle
//!
//! One `SharedPlayback` is created per session and cloned into every consumer
//! (screens, mini-player, progress ticker).

use crate::state::PlaybackState;
use crate::types::PlaybackSnapshot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to the session's playback record
#[derive(Debug, Clone, Default)]
pub struct SharedPlayback {
    inner: Arc<Mutex<PlaybackState>>,
}

impl SharedPlayback {
    /// Wrap an existing playback record
    pub fn new(state: PlaybackState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Read the record
    pub fn with<R>(&self, f: impl FnOnce(&PlaybackState) -> R) -> R {
        f(&self.lock())
    }

    /// Mutate the record; one operation runs to completion before the next
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut PlaybackState) -> R) -> R {
        f(&mut self.lock())
    }

    /// Owned copy of the current record
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, PlaybackState> {
        // A panicking listener leaves the record itself consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodtune_core::Track;

    #[test]
    fn clones_share_one_record() {
        let playback = SharedPlayback::default();
        let mini_player = playback.clone();

        playback.with_mut(|state| state.play_keeping_context(Track::new("s1", "Song", "Artist")));

        let snapshot = mini_player.snapshot();
        assert_eq!(snapshot.current_track.unwrap().id.as_str(), "s1");
        assert!(mini_player.with(|state| state.is_playing()));
    }
}
