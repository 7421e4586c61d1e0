//! Bundled offline catalog
//!
//! Six moods with a short playlist each. Used directly when no remote catalog
//! is configured and as the fallback when one fails.

use async_trait::async_trait;
use moodtune_core::{ArtworkLookup, Mood, MoodId, Result, Track, TrackId, TrackProvider};

/// In-memory mood catalog
#[derive(Debug, Clone, Default)]
pub struct OfflineCatalog {
    moods: Vec<Mood>,
    playlists: Vec<(MoodId, Vec<Track>)>,
}

impl OfflineCatalog {
    /// Build a catalog from moods and their playlists
    ///
    /// Playlists are kept in the order given; `all_tracks` concatenates them.
    pub fn new(moods: Vec<Mood>, playlists: Vec<(MoodId, Vec<Track>)>) -> Self {
        Self { moods, playlists }
    }

    /// The dataset shipped with the app
    pub fn bundled() -> Self {
        let moods = vec![
            Mood::new("m1", "Happy", "😊", ["#fde047", "#f97316"]),
            Mood::new("m2", "Chill", "😌", ["#7dd3fc", "#0ea5e9"]),
            Mood::new("m3", "Energetic", "⚡️", ["#fb923c", "#f87171"]),
            Mood::new("m4", "Sad", "😢", ["#94a3b8", "#334155"]),
            Mood::new("m5", "Focused", "🎯", ["#818cf8", "#4f46e5"]),
            Mood::new("m6", "Romantic", "❤️", ["#f472b6", "#db2777"]),
        ];

        let playlists = vec![
            (
                MoodId::new("m1"),
                vec![
                    bundled_track("s1", "Good Day Sunshine", "The Beatles", "fde047/f97316", "Happy"),
                    bundled_track("s2", "Walking on Sunshine", "Katrina & The Waves", "fde047/f97316", "Vibes"),
                    bundled_track("s3", "Happy", "Pharrell Williams", "fde047/f97316", "Joy"),
                ],
            ),
            (
                MoodId::new("m2"),
                vec![
                    bundled_track("s4", "Weightless", "Marconi Union", "7dd3fc/0ea5e9", "Chill"),
                    bundled_track("s5", "Clair de Lune", "Claude Debussy", "7dd3fc/0ea5e9", "Relax"),
                    bundled_track("s6", "Sunday Morning", "Maroon 5", "7dd3fc/0ea5e9", "Easy"),
                ],
            ),
            (
                MoodId::new("m3"),
                vec![
                    bundled_track("s7", "Don't Stop Me Now", "Queen", "fb923c/f87171", "Energy"),
                    bundled_track("s8", "Uptown Funk", "Mark Ronson ft. Bruno Mars", "fb923c/f87171", "Power"),
                ],
            ),
            (
                MoodId::new("m4"),
                vec![
                    bundled_track("s9", "Someone Like You", "Adele", "94a3b8/334155", "Sad"),
                    bundled_track("s10", "Hallelujah", "Leonard Cohen", "94a3b8/334155", "Blues"),
                ],
            ),
            (
                MoodId::new("m5"),
                vec![
                    bundled_track("s11", "Lo-fi Beats", "Study Girl", "818cf8/4f46e5", "Focus"),
                    bundled_track("s12", "Ambient Study Music", "Brain Power", "818cf8/4f46e5", "Study"),
                ],
            ),
            (
                MoodId::new("m6"),
                vec![
                    bundled_track("s13", "Perfect", "Ed Sheeran", "f472b6/db2777", "Love"),
                    bundled_track("s14", "I Will Always Love You", "Whitney Houston", "f472b6/db2777", "Amor"),
                ],
            ),
        ];

        Self::new(moods, playlists)
    }

    /// All moods, in display order
    pub fn mood_list(&self) -> &[Mood] {
        &self.moods
    }

    /// Look up a mood by id
    pub fn mood(&self, id: &MoodId) -> Option<&Mood> {
        self.moods.iter().find(|mood| &mood.id == id)
    }

    /// Playlist for a mood; empty for unknown moods
    pub fn playlist(&self, id: &MoodId) -> &[Track] {
        self.playlists
            .iter()
            .find(|(mood_id, _)| mood_id == id)
            .map_or(&[][..], |(_, tracks)| tracks.as_slice())
    }

    /// Every track, playlists concatenated in mood order
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.playlists.iter().flat_map(|(_, tracks)| tracks.iter())
    }

    /// Find a track by id
    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks().find(|track| &track.id == id)
    }

    /// Case-insensitive substring match on title or artist
    ///
    /// A blank query matches every track.
    pub fn search_tracks(&self, query: &str) -> Vec<Track> {
        let needle = query.trim().to_lowercase();
        self.tracks()
            .filter(|track| {
                needle.is_empty()
                    || track.title.to_lowercase().contains(&needle)
                    || track.artist.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

fn bundled_track(id: &str, title: &str, artist: &str, colors: &str, label: &str) -> Track {
    Track::new(id, title, artist).with_artwork(format!(
        "https://placehold.co/500x500/{}?text={}",
        colors, label
    ))
}

#[async_trait]
impl TrackProvider for OfflineCatalog {
    async fn moods(&self) -> Result<Vec<Mood>> {
        Ok(self.moods.clone())
    }

    async fn tracks_for_mood(&self, mood: &MoodId) -> Result<Vec<Track>> {
        Ok(self.playlist(mood).to_vec())
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>> {
        Ok(self.search_tracks(query))
    }

    async fn all_tracks(&self) -> Result<Vec<Track>> {
        Ok(self.tracks().cloned().collect())
    }
}

/// Artwork bundled with the catalog, matched on exact title and artist
#[async_trait]
impl ArtworkLookup for OfflineCatalog {
    async fn lookup(&self, title: &str, artist: &str) -> Result<Option<String>> {
        Ok(self
            .tracks()
            .find(|track| track.title == title && track.artist == artist)
            .and_then(|track| track.artwork.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|track| track.id.as_str()).collect()
    }

    #[test]
    fn bundled_has_six_moods_and_fourteen_tracks() {
        let catalog = OfflineCatalog::bundled();
        assert_eq!(catalog.mood_list().len(), 6);
        assert_eq!(catalog.tracks().count(), 14);
        assert_eq!(catalog.mood(&MoodId::new("m4")).unwrap().title, "Sad");
    }

    #[test]
    fn playlist_keeps_display_order() {
        let catalog = OfflineCatalog::bundled();
        assert_eq!(ids(catalog.playlist(&MoodId::new("m1"))), ["s1", "s2", "s3"]);
        assert!(catalog.playlist(&MoodId::new("m42")).is_empty());
    }

    #[test]
    fn search_matches_title_or_artist_ignoring_case() {
        let catalog = OfflineCatalog::bundled();
        assert_eq!(ids(&catalog.search_tracks("SUNSHINE")), ["s1", "s2"]);
        assert_eq!(ids(&catalog.search_tracks("queen")), ["s7"]);
        assert!(catalog.search_tracks("polka").is_empty());
    }

    #[test]
    fn blank_search_returns_everything() {
        let catalog = OfflineCatalog::bundled();
        assert_eq!(catalog.search_tracks("  ").len(), 14);
    }

    #[test]
    fn bundled_tracks_carry_artwork() {
        let catalog = OfflineCatalog::bundled();
        let track = catalog.track(&TrackId::new("s14")).unwrap();
        assert_eq!(
            track.artwork.as_deref(),
            Some("https://placehold.co/500x500/f472b6/db2777?text=Amor")
        );
    }

    #[tokio::test]
    async fn artwork_lookup_matches_title_and_artist() {
        let catalog = OfflineCatalog::bundled();

        let found = catalog.lookup("Uptown Funk", "Mark Ronson ft. Bruno Mars").await.unwrap();
        assert_eq!(
            found.as_deref(),
            Some("https://placehold.co/500x500/fb923c/f87171?text=Power")
        );
        assert_eq!(catalog.lookup("Uptown Funk", "Queen").await.unwrap(), None);
    }
}
