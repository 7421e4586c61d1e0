//! List-position helpers
//!
//! Position is always re-derived by looking the current id up in whichever
//! list the caller supplies. Lists can be swapped between calls, so there is
//! no cached index.

use crate::types::NoOpReason;
use moodtune_core::{Track, TrackId};

/// Index of the first track with `id`
pub fn position_of(list: &[Track], id: &TrackId) -> Option<usize> {
    list.iter().position(|track| &track.id == id)
}

/// Pick the navigation universe: the explicit list if it has tracks, else the fallback
pub fn resolve_list<'a>(explicit: Option<&'a [Track]>, fallback: &'a [Track]) -> &'a [Track] {
    match explicit {
        Some(list) if !list.is_empty() => list,
        _ => fallback,
    }
}

/// Track after `id` in `list`
///
/// Fails with `TrackNotInPlaylist` if `id` is absent and `AtEnd` if it is last.
pub fn following<'a>(list: &'a [Track], id: &TrackId) -> Result<&'a Track, NoOpReason> {
    let index = position_of(list, id).ok_or(NoOpReason::TrackNotInPlaylist)?;
    list.get(index + 1).ok_or(NoOpReason::AtEnd)
}

/// Track before `id` in `list`
///
/// Fails with `TrackNotInPlaylist` if `id` is absent and `AtStart` if it is first.
pub fn preceding<'a>(list: &'a [Track], id: &TrackId) -> Result<&'a Track, NoOpReason> {
    let index = position_of(list, id).ok_or(NoOpReason::TrackNotInPlaylist)?;
    index
        .checked_sub(1)
        .map(|prev| &list[prev])
        .ok_or(NoOpReason::AtStart)
}
