//! Domain types

mod ids;
mod mood;
mod track;

pub use ids::{MoodId, TrackId};
pub use mood::Mood;
pub use track::Track;
