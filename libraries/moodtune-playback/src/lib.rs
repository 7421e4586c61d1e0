//! Moodtune - Playback State
//!
//! Platform-agnostic record of "what is playing, from which ordered list, and
//! what happens on skip/shuffle/advance".
//!
//! This crate provides:
//! - The playback record (current track, play/pause flag, navigation list)
//! - Next/previous navigation by id lookup (no cached index)
//! - Anti-repeat shuffle pick
//! - Synchronous change subscriptions and a drainable event queue
//! - Simulated progress for the now-playing ticker
//!
//! # Architecture
//!
//! `moodtune-playback` performs no I/O and cannot fail. Operations that find
//! nothing to do (no track, empty list, boundary) return
//! [`Transition::Unchanged`] with the reason instead of an error.
//!
//! Screens share one [`SharedPlayback`] handle; there is no global state.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use moodtune_core::Track;
//! use moodtune_playback::{NoOpReason, PlaybackState, Transition};
//!
//! let playlist = vec![
//!     Track::new("s1", "Good Day Sunshine", "The Beatles"),
//!     Track::new("s2", "Walking on Sunshine", "Katrina & The Waves"),
//! ];
//!
//! let mut state = PlaybackState::new();
//! state.play_with_context(playlist[0].clone(), playlist.clone());
//!
//! assert_eq!(state.next(None), Transition::Changed);
//! assert_eq!(state.next(None), Transition::Unchanged(NoOpReason::AtEnd));
//! assert_eq!(state.current_track().map(|t| t.id.as_str()), Some("s2"));
//! ```
//!
//! # Example: Subscriptions
//!
//! ```rust
//! use moodtune_core::Track;
//! use moodtune_playback::SharedPlayback;
//! use std::sync::{Arc, Mutex};
//!
//! let playback = SharedPlayback::default();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! playback.with_mut(|state| {
//!     state.subscribe(move |snapshot, _events| {
//!         sink.lock().unwrap().push(snapshot.is_playing);
//!     })
//! });
//!
//! playback.with_mut(|state| state.play_keeping_context(Track::new("s1", "Song", "Artist")));
//! playback.with_mut(|state| state.toggle_playback());
//!
//! assert_eq!(*seen.lock().unwrap(), vec![true, false]);
//! ```

mod events;
mod navigation;
mod progress;
mod shared;
mod shuffle;
mod state;
pub mod types;

// Public exports
pub use events::{PlaybackEvent, SubscriptionId};
pub use navigation::{following, position_of, preceding, resolve_list};
pub use progress::{format_time, ProgressTracker, TickOutcome};
pub use shared::SharedPlayback;
pub use shuffle::pick_different;
pub use state::{PlaybackState, MAX_PENDING_EVENTS};
pub use types::{NoOpReason, PlaybackConfig, PlaybackSnapshot, Transition};
