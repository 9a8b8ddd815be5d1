//! Halved Collatz map
//!
//! Odd values take `(3n + 1) / 2` in a single step. `3n + 1` is always even
//! for odd `n`, so the halving is exact. This is not the textbook map and
//! the unhalved rule must not be substituted.

use crate::error::{ensure_positive, Error, Result};

/// One transition of the map. `n` must be positive.
///
/// The trajectory code never calls this at `n == 1`; 1 is treated as
/// absorbing there.
pub fn step(n: i64) -> Result<i64> {
    ensure_positive(n)?;
    if n % 2 == 0 {
        return Ok(n / 2);
    }
    n.checked_mul(3)
        .and_then(|m| m.checked_add(1))
        .map(|m| m / 2)
        .ok_or(Error::StepOverflow { n })
}

/// Visited values starting at `n0`, stopping at 1 or after `max_steps`
/// transitions. The result always begins with `n0`.
pub fn trajectory(n0: i64, max_steps: i64) -> Result<Vec<i64>> {
    ensure_positive(n0)?;
    if max_steps <= 0 {
        return Err(Error::non_positive_max_steps(max_steps));
    }

    let mut values = vec![n0];
    let mut n = n0;
    for _ in 0..max_steps {
        if n == 1 {
            break;
        }
        n = step(n)?;
        values.push(n);
    }
    Ok(values)
}
