//! Moodtune Library - collaborators around the playback core
//!
//! Everything the screens need besides the playback record itself:
//! - Bundled offline catalog of moods and tracks
//! - Provider wrapper that falls back to the offline catalog
//! - Key-value stores (in-memory and JSON file)
//! - Favorites list and theme preference on top of a store
//! - Artwork resolution with LRU caching
//!
//! # Example
//!
//! ```rust
//! use moodtune_core::{MoodId, TrackProvider};
//! use moodtune_library::{Favorites, MemoryStore, OfflineCatalog};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = OfflineCatalog::bundled();
//! let happy = catalog.tracks_for_mood(&MoodId::new("m1")).await?;
//!
//! let favorites = Favorites::new(MemoryStore::new());
//! favorites.add(happy[0].clone()).await?;
//! assert!(favorites.contains(&happy[0].id).await?);
//! # Ok(())
//! # }
//! ```

mod artwork;
mod catalog;
mod error;
mod favorites;
mod provider;
mod store;
mod theme;

// Re-export public API
pub use artwork::ArtworkResolver;
pub use catalog::OfflineCatalog;
pub use error::{LibraryError, Result};
pub use favorites::{Favorites, FAVORITES_KEY};
pub use provider::FallbackProvider;
pub use store::{JsonFileStore, MemoryStore};
pub use theme::{Palette, ThemeMode, ThemePreference, THEME_KEY};
