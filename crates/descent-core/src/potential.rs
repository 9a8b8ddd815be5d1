//! Candidate descent potential
//!
//! `V(n, s) = log2(n) + alpha(n mod 16) + beta * s`

use crate::error::{ensure_positive, ensure_streak, Result};
use crate::penalty::{residue, PenaltyTable};

/// Streak weight used unless a caller overrides it.
pub const DEFAULT_BETA: f64 = 0.7;

/// A potential parameterised by streak weight and penalty table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Potential {
    pub beta: f64,
    pub table: PenaltyTable,
}

impl Potential {
    pub fn new(beta: f64) -> Self {
        Self {
            beta,
            table: PenaltyTable::EMPIRICAL,
        }
    }

    pub fn with_table(beta: f64, table: PenaltyTable) -> Self {
        Self { beta, table }
    }

    /// Evaluate at state `(n, streak)`. Requires `n > 0` and `streak >= 0`.
    pub fn eval(&self, n: i64, streak: i64) -> Result<f64> {
        ensure_positive(n)?;
        ensure_streak(streak)?;
        let alpha = self.table.lookup(residue(n))?;
        Ok((n as f64).log2() + alpha + self.beta * streak as f64)
    }
}

impl Default for Potential {
    fn default() -> Self {
        Self::new(DEFAULT_BETA)
    }
}

/// `V(n, streak, beta)` with the empirical table.
pub fn potential(n: i64, streak: i64, beta: f64) -> Result<f64> {
    Potential::new(beta).eval(n, streak)
}
