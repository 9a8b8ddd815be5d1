//! Descent Core - trajectory engine for the halved Collatz map
//!
//! Evaluates a candidate Lyapunov-like potential
//! `V(n, s) = log2(n) + alpha(n mod 16) + beta * s` along trajectories and
//! reduces the step-over-step deltas into summary statistics.
//!
//! Everything here is pure and deterministic. Trajectories share no state,
//! so callers may evaluate any number of them concurrently.

pub mod error;
pub mod penalty;
pub mod potential;
pub mod step;
pub mod streak;
pub mod summary;
pub mod walker;

pub use error::{Error, Result};
pub use penalty::{penalty, residue, PenaltyTable};
pub use potential::{potential, Potential, DEFAULT_BETA};
pub use step::{step, trajectory};
pub use streak::{is_growth_prone, next_streak, GROWTH_PRONE_RESIDUES};
pub use summary::{analyze, summarize, BetaReport, SummaryStatistics, TrajectoryReport};
pub use walker::{trace, walk, TraceStep, TrajectoryState, Walker};
