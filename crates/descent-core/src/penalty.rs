//! Modular penalty table alpha(n mod 16)
//!
//! The sixteen corrections are empirically fitted constants. They are not
//! derived from anything and must be reproduced exactly.

use crate::error::{Error, Result};

/// Number of residue classes the table covers.
pub const MODULUS: i64 = 16;

/// Immutable residue -> correction mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenaltyTable([f64; 16]);

impl PenaltyTable {
    /// The fitted table used by every derived measurement.
    pub const EMPIRICAL: PenaltyTable = PenaltyTable([
        -0.06, -0.05, -0.04, 0.10, //
        -0.03, 0.06, -0.04, 0.08, //
        -0.02, -0.04, -0.05, 0.11, //
        -0.06, -0.05, -0.03, 0.09,
    ]);

    /// Build a custom table, e.g. to isolate the streak term in tests.
    pub const fn new(values: [f64; 16]) -> Self {
        Self(values)
    }

    /// All-zero corrections.
    pub const fn zero() -> Self {
        Self([0.0; 16])
    }

    /// Correction for `residue`, which must already be reduced into `0..=15`.
    pub fn lookup(&self, residue: i64) -> Result<f64> {
        if !(0..MODULUS).contains(&residue) {
            return Err(Error::residue_out_of_range(residue));
        }
        Ok(self.0[residue as usize])
    }

    pub fn values(&self) -> &[f64; 16] {
        &self.0
    }
}

impl Default for PenaltyTable {
    fn default() -> Self {
        Self::EMPIRICAL
    }
}

/// Euclidean residue of `n` modulo 16; always in `0..=15`, also for negative `n`.
pub fn residue(n: i64) -> i64 {
    n.rem_euclid(MODULUS)
}

/// Look up `residue` in [`PenaltyTable::EMPIRICAL`].
pub fn penalty(residue: i64) -> Result<f64> {
    PenaltyTable::EMPIRICAL.lookup(residue)
}
