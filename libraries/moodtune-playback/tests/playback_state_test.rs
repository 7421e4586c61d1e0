//! Integration tests for the playback record
//!
//! Real screen flows: play from a mood playlist, skip with the transport
//! controls, play a single favorite, shuffle from the mini-player.

use moodtune_core::Track;
use moodtune_playback::{NoOpReason, PlaybackState, Transition};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ===== Test Helpers =====

fn happy_playlist() -> Vec<Track> {
    vec![
        Track::new("s1", "Good Day Sunshine", "The Beatles"),
        Track::new("s2", "Walking on Sunshine", "Katrina & The Waves"),
        Track::new("s3", "Happy", "Pharrell Williams"),
    ]
}

fn current_id(state: &PlaybackState) -> &str {
    state.current_track().expect("a track is selected").id.as_str()
}

// ===== Play =====

#[test]
fn play_from_playlist_sets_track_context_and_playing() {
    let playlist = happy_playlist();

    for track in &playlist {
        let mut state = PlaybackState::new();
        state.play(track.clone(), Some(playlist.clone()));

        assert_eq!(state.current_track(), Some(track));
        assert_eq!(state.current_playlist(), playlist.as_slice());
        assert!(state.is_playing());
    }
}

#[test]
fn beatles_next_then_previous_returns_to_start() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();

    state.play(playlist[0].clone(), Some(playlist.clone()));
    assert_eq!(state.next(None), Transition::Changed);
    assert_eq!(state.previous(None), Transition::Changed);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.current_track.as_ref(), Some(&playlist[0]));
    assert_eq!(snapshot.current_track.unwrap().title, "Good Day Sunshine");
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.current_playlist, playlist);
}

#[test]
fn playing_a_favorite_keeps_browsing_context() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[0].clone(), Some(playlist.clone()));

    let favorite = Track::new("s9", "Someone Like You", "Adele");
    state.play(favorite.clone(), None);

    assert_eq!(state.current_track(), Some(&favorite));
    assert_eq!(state.current_playlist(), playlist.as_slice());

    // The favorite is not in the context, so skipping goes nowhere
    assert_eq!(
        state.next(None),
        Transition::Unchanged(NoOpReason::TrackNotInPlaylist)
    );
    assert_eq!(current_id(&state), "s9");
}

// ===== Toggle =====

#[test]
fn toggle_twice_restores_flag() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[0].clone(), Some(playlist.clone()));

    state.toggle_playback();
    assert!(!state.is_playing());
    state.toggle_playback();
    assert!(state.is_playing());
}

#[test]
fn toggle_without_track_stays_stopped() {
    let mut state = PlaybackState::new();
    assert_eq!(
        state.toggle_playback(),
        Transition::Unchanged(NoOpReason::NoCurrentTrack)
    );
    assert!(!state.is_playing());
    assert!(!state.has_pending_events());
}

// ===== Next / Previous =====

#[test]
fn next_walks_forward_and_stops_at_end() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[0].clone(), Some(playlist.clone()));

    state.next(None);
    assert_eq!(current_id(&state), "s2");
    state.next(None);
    assert_eq!(current_id(&state), "s3");

    assert_eq!(state.next(None), Transition::Unchanged(NoOpReason::AtEnd));
    assert_eq!(current_id(&state), "s3");
}

#[test]
fn previous_at_first_track_is_noop() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[0].clone(), Some(playlist.clone()));
    state.drain_events();

    assert_eq!(state.previous(None), Transition::Unchanged(NoOpReason::AtStart));
    assert_eq!(current_id(&state), "s1");
    assert!(!state.has_pending_events());
}

#[test]
fn next_over_list_without_current_track_is_noop() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[1].clone(), Some(playlist.clone()));
    let before = state.snapshot();

    let chill = vec![
        Track::new("s4", "Weightless", "Marconi Union"),
        Track::new("s5", "Clair de Lune", "Claude Debussy"),
    ];
    assert_eq!(
        state.next(Some(chill.as_slice())),
        Transition::Unchanged(NoOpReason::TrackNotInPlaylist)
    );
    assert_eq!(state.snapshot(), before);
}

#[test]
fn navigation_follows_swapped_list() {
    // The index is re-derived on every call, so a reordered list is honoured
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[0].clone(), Some(playlist.clone()));

    let reordered = vec![playlist[2].clone(), playlist[0].clone(), playlist[1].clone()];
    state.previous(Some(reordered.as_slice()));
    assert_eq!(current_id(&state), "s3");
}

#[test]
fn paused_skip_resumes_playback() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[1].clone(), Some(playlist.clone()));
    state.toggle_playback();

    state.previous(None);
    assert_eq!(current_id(&state), "s1");
    assert!(state.is_playing());
}

// ===== Shuffle =====

#[test]
fn shuffle_single_track_is_noop() {
    let playlist = happy_playlist();
    let mut state = PlaybackState::new();
    state.play(playlist[1].clone(), Some(playlist.clone()));
    let before = state.snapshot();

    assert_eq!(
        state.shuffle(&playlist[..1]),
        Transition::Unchanged(NoOpReason::PlaylistTooShort)
    );
    assert_eq!(state.snapshot(), before);
}

#[test]
fn shuffle_two_tracks_always_switches() {
    let pair = vec![
        Track::new("a", "Track A", "Artist"),
        Track::new("b", "Track B", "Artist"),
    ];
    let mut state = PlaybackState::new();

    for _ in 0..100 {
        state.play(pair[0].clone(), Some(pair.clone()));
        state.shuffle(&pair);
        assert_eq!(current_id(&state), "b");
    }
}

#[test]
fn shuffle_is_reproducible_with_seeded_rng() {
    let playlist = happy_playlist();
    let mut first = PlaybackState::new();
    let mut second = PlaybackState::new();

    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        first.shuffle_with_rng(&playlist, &mut rng_a);
        second.shuffle_with_rng(&playlist, &mut rng_b);
        assert_eq!(first.snapshot(), second.snapshot());
    }
}
