//! Sequence helpers consuming the engine through its public draw surface.

use crate::engine::SecureRandom;
use crate::errors::RandomError;

/// Fisher-Yates shuffle driven by the secure engine.
///
/// The iteration order (highest index down, swap partner drawn with
/// `next_below(i + 1)`) is pinned by regression fixtures; do not reorder the
/// draws.
pub fn shuffle<T>(random: &mut SecureRandom<'_>, items: &mut [T]) -> Result<(), RandomError> {
    for i in (1..items.len()).rev() {
        let j = random.next_below(i as i32 + 1)? as usize;
        items.swap(i, j);
    }
    Ok(())
}
