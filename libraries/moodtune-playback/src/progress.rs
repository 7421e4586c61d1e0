//! Simulated playback progress
//!
//! The now-playing ticker owns a `ProgressTracker` and calls `tick` on a fixed
//! period. Progress restarts whenever the current track changes, freezes while
//! paused, and advances to the next track when the duration is reached.

use crate::state::PlaybackState;
use crate::types::PlaybackConfig;
use moodtune_core::{Track, TrackId};
use std::time::Duration;
use tracing::debug;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No track, or paused: nothing advanced
    Idle,

    /// Position moved forward within the current track
    Progressed,

    /// The track ended and playback moved to the next one
    Advanced,

    /// The track ended and there was nothing to advance to
    Finished,
}

/// Elapsed time for the current track
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    fallback: Duration,
    track_id: Option<TrackId>,
    elapsed: Duration,
    duration: Duration,
}

impl ProgressTracker {
    /// Create a tracker; tracks without a duration use `fallback`
    pub fn new(fallback: Duration) -> Self {
        Self {
            fallback,
            track_id: None,
            elapsed: Duration::ZERO,
            duration: fallback,
        }
    }

    /// Create a tracker from playback configuration
    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self::new(config.fallback_duration())
    }

    /// Advance by `step` if playing; calls `next` on the state at the end of the track
    pub fn tick(&mut self, state: &mut PlaybackState, step: Duration) -> TickOutcome {
        let Some(track) = state.current_track() else {
            return TickOutcome::Idle;
        };
        self.observe_track(track);

        if !state.is_playing() {
            return TickOutcome::Idle;
        }
        if self.is_complete() {
            return TickOutcome::Finished;
        }

        self.elapsed = (self.elapsed + step).min(self.duration);
        if !self.is_complete() {
            return TickOutcome::Progressed;
        }

        debug!(track_id = %track.id, "Track reached its end");
        if state.next(None).is_changed() {
            if let Some(next) = state.current_track() {
                self.restart(next);
            }
            TickOutcome::Advanced
        } else {
            TickOutcome::Finished
        }
    }

    /// Sync with the state's current track, restarting on a track change
    pub fn observe(&mut self, state: &PlaybackState) {
        if let Some(track) = state.current_track() {
            self.observe_track(track);
        }
    }

    /// Elapsed time in the current track
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Length of the current track
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Progress in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the current track has played to its end
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn observe_track(&mut self, track: &Track) {
        if self.track_id.as_ref() != Some(&track.id) {
            self.restart(track);
        }
    }

    fn restart(&mut self, track: &Track) {
        self.track_id = Some(track.id.clone());
        self.elapsed = Duration::ZERO;
        self.duration = track.duration_or(self.fallback);
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::from_config(&PlaybackConfig::default())
    }
}

/// Format whole seconds as `m:ss`
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
