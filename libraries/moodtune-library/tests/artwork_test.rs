//! Artwork resolver tests with a mocked lookup service

use async_trait::async_trait;
use mockall::mock;
use moodtune_core::{ArtworkLookup, CoreError, Result, Track};
use moodtune_library::ArtworkResolver;

mock! {
    pub Lookup {}

    #[async_trait]
    impl ArtworkLookup for Lookup {
        async fn lookup(&self, title: &str, artist: &str) -> Result<Option<String>>;
    }
}

const THUMB: &str = "https://is1.example.com/image/thumb/hallelujah/100x100bb.jpg";
const LARGE: &str = "https://is1.example.com/image/thumb/hallelujah/500x500bb.jpg";

fn hallelujah() -> Track {
    Track::new("s10", "Hallelujah", "Leonard Cohen")
        .with_artwork("https://placehold.co/500x500/94a3b8/334155?text=Blues")
}

#[tokio::test]
async fn found_url_is_upsized_and_cached() {
    let mut lookup = MockLookup::new();
    lookup
        .expect_lookup()
        .withf(|title, artist| title == "Hallelujah" && artist == "Leonard Cohen")
        .times(1)
        .returning(|_, _| Ok(Some(THUMB.to_string())));

    let resolver = ArtworkResolver::new(lookup, 8);
    let track = hallelujah();

    assert_eq!(resolver.resolve(&track).await.as_deref(), Some(LARGE));
    // Second call is served from the cache (times(1) above)
    assert_eq!(resolver.resolve(&track).await.as_deref(), Some(LARGE));
    assert_eq!(resolver.cached_len(), 1);
}

#[tokio::test]
async fn failures_are_absent_and_not_cached() {
    let mut lookup = MockLookup::new();
    lookup
        .expect_lookup()
        .times(2)
        .returning(|_, _| Err(CoreError::artwork("service unavailable")));

    let resolver = ArtworkResolver::new(lookup, 8);
    let track = hallelujah();

    assert_eq!(resolver.resolve(&track).await, None);
    assert_eq!(resolver.resolve(&track).await, None);
    assert_eq!(resolver.cached_len(), 0);
}

#[tokio::test]
async fn display_falls_back_to_track_artwork() {
    let mut lookup = MockLookup::new();
    lookup.expect_lookup().returning(|_, _| Ok(None));

    let resolver = ArtworkResolver::new(lookup, 8);
    let track = hallelujah();

    assert_eq!(resolver.display_artwork(&track).await, track.artwork);
    assert_eq!(
        resolver.display_artwork(&Track::new("x", "No Art", "Nobody")).await,
        None
    );
}

#[tokio::test]
async fn least_recently_used_entry_is_evicted() {
    let mut lookup = MockLookup::new();
    lookup
        .expect_lookup()
        .times(3)
        .returning(|title, _| Ok(Some(format!("https://art.example/{}/100x100bb.jpg", title))));

    let resolver = ArtworkResolver::new(lookup, 1);
    let first = Track::new("a", "First", "Artist");
    let second = Track::new("b", "Second", "Artist");

    resolver.resolve(&first).await;
    resolver.resolve(&second).await;
    assert_eq!(resolver.cached_len(), 1);

    // "First" was evicted, so it is looked up again
    assert_eq!(
        resolver.resolve(&first).await.as_deref(),
        Some("https://art.example/First/500x500bb.jpg")
    );
}

#[tokio::test]
async fn clear_cache_forces_new_lookup() {
    let mut lookup = MockLookup::new();
    lookup
        .expect_lookup()
        .times(2)
        .returning(|_, _| Ok(Some(THUMB.to_string())));

    let resolver = ArtworkResolver::new(lookup, 0);
    let track = hallelujah();

    resolver.resolve(&track).await;
    resolver.clear_cache();
    assert_eq!(resolver.cached_len(), 0);
    resolver.resolve(&track).await;
}
