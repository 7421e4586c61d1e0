//! Shuffle pick
//!
//! Picks one random track from a list while avoiding the one already playing.

use moodtune_core::{Track, TrackId};
use rand::Rng;

/// Pick a random track from `list` that differs from `current`
///
/// Returns `None` for lists with fewer than two tracks. A uniformly random
/// index is drawn; if it lands on `current`, the following index (wrapping)
/// is used instead, so a different track is selected whenever the list has
/// at least two distinct ids.
pub fn pick_different<'a, R>(
    list: &'a [Track],
    current: Option<&TrackId>,
    rng: &mut R,
) -> Option<&'a Track>
where
    R: Rng + ?Sized,
{
    if list.len() <= 1 {
        return None;
    }

    let mut index = rng.gen_range(0..list.len());
    if current.is_some_and(|id| &list[index].id == id) {
        index = (index + 1) % list.len();
    }

    Some(&list[index])
}
