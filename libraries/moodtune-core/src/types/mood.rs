//! Mood domain type
use super::ids::MoodId;
use serde::{Deserialize, Serialize};

/// A browsable mood that names a playlist in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    /// Mood identifier
    pub id: MoodId,

    /// Display title ("Happy", "Chill", ...)
    pub title: String,

    /// Emoji shown on the mood tile
    pub emoji: String,

    /// Gradient color pair (start, end) as hex strings
    pub colors: [String; 2],
}

impl Mood {
    /// Create a new mood
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        emoji: impl Into<String>,
        colors: [&str; 2],
    ) -> Self {
        Self {
            id: MoodId::new(id),
            title: title.into(),
            emoji: emoji.into(),
            colors: colors.map(str::to_string),
        }
    }
}
