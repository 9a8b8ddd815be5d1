//! Trajectory walker
//!
//! Drives the map, the streak counter and the potential across a bounded
//! number of transitions, producing one potential delta per transition.
//!
//! Ordering matters: the streak is advanced from the value being *left*
//! (pre-transition `n`), while the post-transition potential is evaluated at
//! the new value with the new streak. Using the post-transition `n` for the
//! streak changes every later delta.

use crate::error::{ensure_positive, ensure_streak, Error, Result};
use crate::potential::Potential;
use crate::step::step;
use crate::streak::next_streak;

/// Current map value and growth streak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrajectoryState {
    pub n: i64,
    pub streak: i64,
}

impl TrajectoryState {
    /// Starting state `(n0, 0)`.
    pub fn start(n0: i64) -> Result<Self> {
        ensure_positive(n0)?;
        Ok(Self { n: n0, streak: 0 })
    }

    pub fn is_terminal(&self) -> bool {
        self.n == 1
    }

    /// The successor state. Both components are derived from `self`.
    pub fn advance(&self) -> Result<Self> {
        ensure_streak(self.streak)?;
        Ok(Self {
            n: step(self.n)?,
            streak: next_streak(self.n, self.streak)?,
        })
    }
}

/// One transition: the state left behind and the change in potential.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceStep {
    pub n: i64,
    pub streak: i64,
    pub delta: f64,
}

impl TraceStep {
    /// Whether this transition increased the potential.
    pub fn is_ascent(&self) -> bool {
        self.delta > 0.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Walker {
    potential: Potential,
}

impl Walker {
    pub fn new(potential: Potential) -> Self {
        Self { potential }
    }

    pub fn potential(&self) -> &Potential {
        &self.potential
    }

    /// Every transition from `n0`, up to `max_steps` of them.
    ///
    /// Termination is tested before each transition: reaching 1 stops the
    /// walk without producing a delta for it.
    pub fn trace(&self, n0: i64, max_steps: i64) -> Result<Vec<TraceStep>> {
        let mut state = TrajectoryState::start(n0)?;
        if max_steps <= 0 {
            return Err(Error::non_positive_max_steps(max_steps));
        }

        let mut steps = Vec::new();
        for _ in 0..max_steps {
            if state.is_terminal() {
                tracing::debug!(n0, transitions = steps.len(), "reached 1");
                return Ok(steps);
            }
            let before = self.potential.eval(state.n, state.streak)?;
            let next = state.advance()?;
            let after = self.potential.eval(next.n, next.streak)?;
            steps.push(TraceStep {
                n: state.n,
                streak: state.streak,
                delta: after - before,
            });
            state = next;
        }

        tracing::debug!(n0, max_steps, last = state.n, "step bound reached");
        Ok(steps)
    }

    /// The delta sequence alone.
    pub fn walk(&self, n0: i64, max_steps: i64) -> Result<Vec<f64>> {
        Ok(self
            .trace(n0, max_steps)?
            .into_iter()
            .map(|s| s.delta)
            .collect())
    }
}

/// Delta sequence of `n0` under the empirical table with streak weight `beta`.
pub fn walk(n0: i64, beta: f64, max_steps: i64) -> Result<Vec<f64>> {
    Walker::new(Potential::new(beta)).walk(n0, max_steps)
}

/// Annotated transitions of `n0`; `trace(..)` deltas equal `walk(..)`.
pub fn trace(n0: i64, beta: f64, steps: i64) -> Result<Vec<TraceStep>> {
    Walker::new(Potential::new(beta)).trace(n0, steps)
}
