//! SAT-style comment rendering of a trace
//!
//! Each transition becomes a DIMACS comment line; ascents (ΔV > 0) are
//! marked `[FAIL]` so they can later be turned into descent clauses.

use descent_core::TraceStep;

pub const PREAMBLE: &str = "c SAT Encoding of Descent Constraints (as comments)";

pub fn comment_line(index: usize, step: &TraceStep) -> String {
    let marker = if step.is_ascent() { " [FAIL]" } else { "" };
    format!(
        "c Step {}: n = {}, streak = {}, ΔV = {:.6}{}",
        index, step.n, step.streak, step.delta, marker
    )
}

/// Preamble plus one line per step, newline-terminated.
pub fn format_sat_comments(steps: &[TraceStep]) -> String {
    let mut out = String::from(PREAMBLE);
    out.push('\n');
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&comment_line(i, step));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_ascents() {
        let up = TraceStep { n: 3, streak: 0, delta: 1.25 };
        let down = TraceStep { n: 8, streak: 0, delta: -1.0 };
        assert_eq!(comment_line(0, &up), "c Step 0: n = 3, streak = 0, ΔV = 1.250000 [FAIL]");
        assert_eq!(comment_line(1, &down), "c Step 1: n = 8, streak = 0, ΔV = -1.000000");
    }
}
