//! Playlist lookup through the fallback provider

use async_trait::async_trait;
use mockall::mock;
use moodtune_cli::session::mood_playlist;
use moodtune_cli::CliError;
use moodtune_core::{CoreError, Mood, MoodId, Result, Track, TrackProvider};
use moodtune_library::{FallbackProvider, OfflineCatalog};

mock! {
    pub Remote {}

    #[async_trait]
    impl TrackProvider for Remote {
        async fn moods(&self) -> Result<Vec<Mood>>;
        async fn tracks_for_mood(&self, mood: &MoodId) -> Result<Vec<Track>>;
        async fn search(&self, query: &str) -> Result<Vec<Track>>;
        async fn all_tracks(&self) -> Result<Vec<Track>>;
    }
}

#[tokio::test]
async fn unreachable_remote_still_yields_bundled_playlist() {
    let mut remote = MockRemote::new();
    remote
        .expect_tracks_for_mood()
        .times(1)
        .returning(|_| Err(CoreError::catalog("connection refused")));

    let provider = FallbackProvider::new(remote);
    let tracks = mood_playlist(&provider, &MoodId::new("m2")).await.unwrap();

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["s4", "s5", "s6"]);
}

#[tokio::test]
async fn bundled_catalog_as_primary_serves_playlists() {
    let provider = FallbackProvider::new(OfflineCatalog::bundled());
    let tracks = mood_playlist(&provider, &MoodId::new("m1")).await.unwrap();

    assert_eq!(tracks, OfflineCatalog::bundled().playlist(&MoodId::new("m1")));
}

#[tokio::test]
async fn mood_unknown_everywhere_is_reported() {
    let provider = FallbackProvider::new(OfflineCatalog::bundled());
    let err = mood_playlist(&provider, &MoodId::new("m42")).await.unwrap_err();

    assert!(matches!(err, CliError::UnknownMood(ref mood) if mood == "m42"));
}
