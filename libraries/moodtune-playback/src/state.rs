//! Playback state - the single authoritative playback record
//!
//! Tracks the current track, the play/pause flag and the list the track was
//! played from, and implements play/toggle/next/previous/shuffle on top of it.

use crate::{
    events::{PlaybackEvent, SubscriptionId, Subscribers},
    navigation,
    shuffle::pick_different,
    types::{NoOpReason, PlaybackSnapshot, Transition},
};
use moodtune_core::{Track, TrackId};
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Most events kept for `drain_events`; older ones are dropped first
pub const MAX_PENDING_EVENTS: usize = 256;

/// Session-scoped playback record
///
/// Two orthogonal axes of state:
/// - track identity: absent until the first `play`, never reset afterwards
/// - playing flag: toggled by `toggle_playback`, forced on by every track selection
///
/// All operations are synchronous. Each change notifies subscribers before the
/// operation returns and queues the same events for `drain_events`. The queue
/// holds at most [`MAX_PENDING_EVENTS`]; undrained older events are discarded.
#[derive(Debug, Default)]
pub struct PlaybackState {
    // Record
    current_track: Option<Track>,
    is_playing: bool,
    current_playlist: Vec<Track>,

    // Change notification
    subscribers: Subscribers,
    pending_events: VecDeque<PlaybackEvent>,
}

impl PlaybackState {
    /// Create an empty record: no track, not playing, empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Reads =====

    /// Track currently selected
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether playback is running (always false without a current track)
    pub fn is_playing(&self) -> bool {
        self.is_playing && self.current_track.is_some()
    }

    /// Default navigation list (last non-empty list passed to `play`)
    pub fn current_playlist(&self) -> &[Track] {
        &self.current_playlist
    }

    /// Owned copy of the record
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing(),
            current_playlist: self.current_playlist.clone(),
        }
    }

    // ===== Playback Control =====

    /// Play a track, optionally redefining the navigation list
    ///
    /// `Some` non-empty lists replace the current playlist; `None` or an empty
    /// list keep it. Playback is switched on unconditionally.
    pub fn play(&mut self, track: Track, playlist: Option<Vec<Track>>) -> Transition {
        match playlist {
            Some(list) => self.play_with_context(track, list),
            None => self.play_keeping_context(track),
        }
    }

    /// Play a track without touching the navigation list
    ///
    /// Used by flows such as "play a single favorite" that must not redefine
    /// the browsing context.
    pub fn play_keeping_context(&mut self, track: Track) -> Transition {
        self.select("play", track, None)
    }

    /// Play a track and make `playlist` the navigation list
    ///
    /// An empty `playlist` is ignored (the current one is kept).
    pub fn play_with_context(&mut self, track: Track, playlist: Vec<Track>) -> Transition {
        let playlist = (!playlist.is_empty()).then_some(playlist);
        self.select("play", track, playlist)
    }

    /// Flip the play/pause flag
    ///
    /// No-op when there is no current track.
    pub fn toggle_playback(&mut self) -> Transition {
        if self.current_track.is_none() {
            return self.skip("toggle_playback", NoOpReason::NoCurrentTrack);
        }

        self.is_playing = !self.is_playing;
        let is_playing = self.is_playing;
        self.commit(
            "toggle_playback",
            vec![PlaybackEvent::PlayingChanged { is_playing }],
        )
    }

    /// Skip to the track after the current one
    ///
    /// Navigates `playlist` if it has tracks, otherwise the current playlist.
    /// Stops at the last track (no wraparound).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, playlist: Option<&[Track]>) -> Transition {
        let target = self
            .neighbor(playlist, navigation::following)
            .map(Track::clone);

        match target {
            Ok(track) => self.select("next", track, None),
            Err(reason) => self.skip("next", reason),
        }
    }

    /// Go back to the track before the current one
    ///
    /// Same list resolution as `next`; stops at the first track.
    pub fn previous(&mut self, playlist: Option<&[Track]>) -> Transition {
        let target = self
            .neighbor(playlist, navigation::preceding)
            .map(Track::clone);

        match target {
            Ok(track) => self.select("previous", track, None),
            Err(reason) => self.skip("previous", reason),
        }
    }

    /// Play a random track from `playlist` other than the current one
    ///
    /// Lists with fewer than two tracks are a no-op. The chosen track is played
    /// with `playlist` as the new navigation list.
    pub fn shuffle(&mut self, playlist: &[Track]) -> Transition {
        self.shuffle_with_rng(playlist, &mut rand::thread_rng())
    }

    /// `shuffle` with a caller-supplied random source
    pub fn shuffle_with_rng<R>(&mut self, playlist: &[Track], rng: &mut R) -> Transition
    where
        R: Rng + ?Sized,
    {
        let current_id = self.current_track.as_ref().map(|track| &track.id);
        let Some(selected) = pick_different(playlist, current_id, rng).cloned() else {
            return self.skip("shuffle", NoOpReason::PlaylistTooShort);
        };

        self.play_with_context(selected, playlist.to_vec())
    }

    // ===== Subscriptions =====

    /// Register a listener called synchronously after every change
    ///
    /// Listeners run in registration order with the post-change snapshot and
    /// the events of that change. They must not call back into the state.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlaybackSnapshot, &[PlaybackEvent]) + Send + 'static,
    {
        self.subscribers.add(Box::new(listener))
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain, oldest first, up to
    /// [`MAX_PENDING_EVENTS`] of the most recent ones.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.pending_events.drain(..).collect()
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Resolve the navigation list and step from the current track
    fn neighbor<'a>(
        &'a self,
        explicit: Option<&'a [Track]>,
        step: fn(&'a [Track], &TrackId) -> Result<&'a Track, NoOpReason>,
    ) -> Result<&'a Track, NoOpReason> {
        let current = self
            .current_track
            .as_ref()
            .ok_or(NoOpReason::NoCurrentTrack)?;

        let list = navigation::resolve_list(explicit, &self.current_playlist);
        if list.is_empty() {
            return Err(NoOpReason::EmptyPlaylist);
        }

        step(list, &current.id)
    }

    /// Make `track` current, optionally replace the playlist, force playing on
    fn select(
        &mut self,
        operation: &'static str,
        track: Track,
        playlist: Option<Vec<Track>>,
    ) -> Transition {
        let mut events = Vec::new();

        if self.current_track.as_ref() != Some(&track) {
            events.push(PlaybackEvent::TrackChanged {
                track_id: track.id.clone(),
                previous_track_id: self.current_track.as_ref().map(|t| t.id.clone()),
            });
            self.current_track = Some(track);
        }

        if let Some(list) = playlist {
            if list != self.current_playlist {
                events.push(PlaybackEvent::PlaylistChanged { length: list.len() });
                self.current_playlist = list;
            }
        }

        if !self.is_playing {
            self.is_playing = true;
            events.push(PlaybackEvent::PlayingChanged { is_playing: true });
        }

        self.commit(operation, events)
    }

    /// Publish the events of a change; an empty batch means nothing changed
    fn commit(&mut self, operation: &'static str, events: Vec<PlaybackEvent>) -> Transition {
        if events.is_empty() {
            return self.skip(operation, NoOpReason::AlreadyCurrent);
        }

        debug!(
            operation,
            track_id = self.current_track.as_ref().map(|t| t.id.as_str()),
            is_playing = self.is_playing,
            playlist_len = self.current_playlist.len(),
            "Playback state changed"
        );

        if !self.subscribers.is_empty() {
            let snapshot = self.snapshot();
            self.subscribers.notify(&snapshot, &events);
        }
        self.pending_events.extend(events);

        let overflow = self.pending_events.len().saturating_sub(MAX_PENDING_EVENTS);
        if overflow > 0 {
            self.pending_events.drain(..overflow);
            trace!(dropped = overflow, "Pending event queue full, dropped oldest events");
        }

        Transition::Changed
    }

    fn skip(&self, operation: &'static str, reason: NoOpReason) -> Transition {
        trace!(operation, reason = %reason, "Playback operation was a no-op");
        Transition::Unchanged(reason)
    }
}
