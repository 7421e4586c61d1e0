//! Fallback provider tests
//!
//! The primary catalog is mocked; the bundled catalog is the fallback.

use async_trait::async_trait;
use mockall::mock;
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

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|track| track.id.as_str()).collect()
}

#[tokio::test]
async fn primary_results_are_passed_through() {
    let mut remote = MockRemote::new();
    remote
        .expect_search()
        .withf(|query| query == "sunshine")
        .times(1)
        .returning(|_| Ok(vec![Track::new("sp:1", "Here Comes the Sun", "The Beatles")]));

    let provider = FallbackProvider::new(remote);
    let tracks = provider.search("sunshine").await.unwrap();

    assert_eq!(ids(&tracks), ["sp:1"]);
}

#[tokio::test]
async fn primary_error_falls_back_to_offline() {
    let mut remote = MockRemote::new();
    remote
        .expect_tracks_for_mood()
        .times(1)
        .returning(|_| Err(CoreError::catalog("token request failed")));

    let provider = FallbackProvider::new(remote);
    let tracks = provider.tracks_for_mood(&MoodId::new("m1")).await.unwrap();

    assert_eq!(ids(&tracks), ["s1", "s2", "s3"]);
}

#[tokio::test]
async fn empty_primary_result_falls_back_to_offline() {
    let mut remote = MockRemote::new();
    remote.expect_moods().times(1).returning(|| Ok(Vec::new()));
    remote.expect_search().times(1).returning(|_| Ok(Vec::new()));

    let provider = FallbackProvider::new(remote);

    assert_eq!(provider.moods().await.unwrap().len(), 6);
    assert_eq!(ids(&provider.search("queen").await.unwrap()), ["s7"]);
}

#[tokio::test]
async fn custom_offline_catalog_is_used() {
    let mut remote = MockRemote::new();
    remote
        .expect_all_tracks()
        .times(1)
        .returning(|| Err(CoreError::catalog("offline")));

    let offline = OfflineCatalog::new(
        vec![Mood::new("m1", "Happy", "😊", ["#fde047", "#f97316"])],
        vec![(MoodId::new("m1"), vec![Track::new("t1", "Only", "One")])],
    );
    let provider = FallbackProvider::with_offline(remote, offline);

    assert_eq!(ids(&provider.all_tracks().await.unwrap()), ["t1"]);
}

#[tokio::test]
async fn unknown_mood_with_failing_primary_is_empty() {
    let mut remote = MockRemote::new();
    remote
        .expect_tracks_for_mood()
        .returning(|_| Err(CoreError::catalog("unreachable")));

    let provider = FallbackProvider::new(remote);
    let tracks = provider.tracks_for_mood(&MoodId::new("m99")).await.unwrap();

    assert!(tracks.is_empty());
}
