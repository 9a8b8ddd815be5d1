//! Error types for the descent core
//!
//! Every variant is a precondition violation by the caller. Nothing here is
//! transient, so nothing is retried or recovered inside the core.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("seed must be a positive integer, got {n}")]
    NonPositiveSeed { n: i64 },

    #[error("streak must be non-negative, got {streak}")]
    NegativeStreak { streak: i64 },

    #[error("residue must be in 0..=15, got {residue}")]
    ResidueOutOfRange { residue: i64 },

    #[error("max_steps must be positive, got {max_steps}")]
    NonPositiveMaxSteps { max_steps: i64 },

    #[error("3n + 1 overflows i64 at n = {n}")]
    StepOverflow { n: i64 },

    #[error("streak {streak} cannot be incremented without overflow")]
    StreakOverflow { streak: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn non_positive_seed(n: i64) -> Self {
        Self::NonPositiveSeed { n }
    }

    pub fn negative_streak(streak: i64) -> Self {
        Self::NegativeStreak { streak }
    }

    pub fn residue_out_of_range(residue: i64) -> Self {
        Self::ResidueOutOfRange { residue }
    }

    pub fn non_positive_max_steps(max_steps: i64) -> Self {
        Self::NonPositiveMaxSteps { max_steps }
    }
}

/// Reject `n <= 0`.
pub(crate) fn ensure_positive(n: i64) -> Result<()> {
    if n <= 0 {
        return Err(Error::non_positive_seed(n));
    }
    Ok(())
}

/// Reject `streak < 0`.
pub(crate) fn ensure_streak(streak: i64) -> Result<()> {
    if streak < 0 {
        return Err(Error::negative_streak(streak));
    }
    Ok(())
}
