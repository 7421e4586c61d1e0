//! Playback Events
//!
//! Change notifications for UI synchronization. Every state change produces
//! one batch of events describing what changed:
//! - Track changes (play, next, previous, shuffle)
//! - Play/pause flag changes
//! - Navigation list replacement
//!
//! Batches are delivered synchronously to subscribers, in call order, and are
//! also queued for consumers that poll with `drain_events()`.

use crate::types::PlaybackSnapshot;
use moodtune_core::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by the playback state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A different track became current
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Play/pause flag flipped
    PlayingChanged {
        /// New value of the flag
        is_playing: bool,
    },

    /// The default navigation list was replaced
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PlaybackSnapshot, &[PlaybackEvent]) + Send>;

/// Registered listeners in registration order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn notify(&mut self, snapshot: &PlaybackSnapshot, events: &[PlaybackEvent]) {
        for (_, listener) in &mut self.listeners {
            listener(snapshot, events);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}
