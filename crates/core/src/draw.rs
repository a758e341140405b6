use crate::{Participant, RngState};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("no eligible participants left")]
    EmptyPool,
}

/// Weighted draw without replacement: the winner is removed from the pool.
/// Selection probability is `weight / total` over the remaining entries.
pub fn draw_winner(
    pool: &mut Vec<Participant>,
    rng: &mut RngState,
) -> Result<Participant, DrawError> {
    if pool.is_empty() {
        return Err(DrawError::EmptyPool);
    }
    let index = weighted_index(pool, rng);
    Ok(pool.remove(index))
}

// Each entry owns a contiguous sub-interval of length `weight` within
// `[0, total)`; the roll selects whichever interval contains it. A scan that
// falls through picks the last entry, which keeps termination guaranteed.
fn weighted_index(pool: &[Participant], rng: &mut RngState) -> usize {
    let total: u64 = pool.iter().map(|entry| u64::from(entry.weight)).sum();
    if total == 0 {
        // Zero weights never come out of the parser; degrade to a uniform pick.
        return rng.roll(pool.len() as u64) as usize;
    }
    let mut roll = rng.roll(total);
    for (index, entry) in pool.iter().enumerate() {
        let weight = u64::from(entry.weight);
        if roll < weight {
            return index;
        }
        roll -= weight;
    }
    pool.len() - 1
}
