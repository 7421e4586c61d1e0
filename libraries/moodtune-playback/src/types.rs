//! Core types for playback state

use moodtune_core::Track;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of a playback operation
///
/// Operations never fail; they either change the record or report why they
/// left it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The record changed and subscribers were notified
    Changed,

    /// Nothing changed
    Unchanged(NoOpReason),
}

impl Transition {
    /// Whether the operation changed the record
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }

    /// The no-op reason, if nothing changed
    pub fn reason(&self) -> Option<NoOpReason> {
        match self {
            Self::Changed => None,
            Self::Unchanged(reason) => Some(*reason),
        }
    }
}

/// Why an operation left the record untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoOpReason {
    /// The operation needs a current track and there is none
    NoCurrentTrack,

    /// Neither the explicit list nor the current playlist has tracks
    EmptyPlaylist,

    /// The current track's id does not occur in the navigation list
    TrackNotInPlaylist,

    /// Current track is the last one (no wraparound)
    AtEnd,

    /// Current track is the first one
    AtStart,

    /// Shuffle needs at least two tracks
    PlaylistTooShort,

    /// The requested state is already the current state
    AlreadyCurrent,
}

impl NoOpReason {
    /// Short machine-friendly name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCurrentTrack => "no_current_track",
            Self::EmptyPlaylist => "empty_playlist",
            Self::TrackNotInPlaylist => "track_not_in_playlist",
            Self::AtEnd => "at_end",
            Self::AtStart => "at_start",
            Self::PlaylistTooShort => "playlist_too_short",
            Self::AlreadyCurrent => "already_current",
        }
    }
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned copy of the playback record
///
/// Handed to subscribers and returned by `snapshot()`; always available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track currently selected
    pub current_track: Option<Track>,

    /// Play/pause flag (false whenever there is no track)
    pub is_playing: bool,

    /// Default navigation universe
    pub current_playlist: Vec<Track>,
}

/// Configuration for playback consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Simulated length for tracks without a duration (default: 30)
    pub fallback_duration_secs: u32,
}

impl PlaybackConfig {
    /// Fallback duration as a `Duration`
    pub fn fallback_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.fallback_duration_secs))
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fallback_duration_secs: 30,
        }
    }
}
