//! Growth streak counter
//!
//! Counts consecutive visits to the growth-prone residues {3, 7, 11, 15}
//! (exactly the values with `n mod 4 == 3`), resetting on any other residue.

use crate::error::{ensure_streak, Error, Result};
use crate::penalty::residue;

pub const GROWTH_PRONE_RESIDUES: [i64; 4] = [3, 7, 11, 15];

/// Whether `n mod 16` (Euclidean) is growth-prone.
pub fn is_growth_prone(n: i64) -> bool {
    GROWTH_PRONE_RESIDUES.contains(&residue(n))
}

/// Advance the streak given the value `n` being left.
///
/// `n` itself is unconstrained here; negative values use the Euclidean residue.
pub fn next_streak(n: i64, streak: i64) -> Result<i64> {
    ensure_streak(streak)?;
    if is_growth_prone(n) {
        streak
            .checked_add(1)
            .ok_or(Error::StreakOverflow { streak })
    } else {
        Ok(0)
    }
}
