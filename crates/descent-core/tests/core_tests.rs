//! Integration tests for descent-core: penalty table, map, streak,
//! potential, walker and aggregation through the public API.

use descent_core::*;

const TOL: f64 = 1e-3;

// ===========================================================================
// Penalty table
// ===========================================================================

#[test]
fn penalty_table_covers_exactly_sixteen_residues() {
    for r in 0..16 {
        assert!(penalty(r).is_ok());
    }
    for r in [-16, -1, 16, 32] {
        assert_eq!(penalty(r), Err(Error::ResidueOutOfRange { residue: r }));
    }
}

#[test]
fn growth_prone_residues_carry_positive_penalty() {
    for r in GROWTH_PRONE_RESIDUES {
        assert!(penalty(r).unwrap() > 0.0);
    }
    // 5 is the only other positive entry.
    let positives: Vec<i64> = (0..16).filter(|&r| penalty(r).unwrap() > 0.0).collect();
    assert_eq!(positives, vec![3, 5, 7, 11, 15]);
}

// ===========================================================================
// Streak
// ===========================================================================

#[test]
fn streak_law_holds_over_a_range() {
    for n in -64..=64 {
        for s in [0, 1, 9, 1_000] {
            let got = next_streak(n, s).unwrap();
            if [3, 7, 11, 15].contains(&n.rem_euclid(16)) {
                assert_eq!(got, s + 1, "n={} s={}", n, s);
            } else {
                assert_eq!(got, 0, "n={} s={}", n, s);
            }
        }
    }
}

// ===========================================================================
// Potential
// ===========================================================================

#[test]
fn potential_of_sixteen() {
    let v = potential(16, 0, DEFAULT_BETA).unwrap();
    assert!((v - 3.94).abs() < 1e-6);
}

#[test]
fn potential_default_uses_default_beta() {
    let p = Potential::default();
    assert_eq!(p.beta, 0.7);
    assert_eq!(p.eval(16, 2).unwrap(), potential(16, 2, 0.7).unwrap());
}

// ===========================================================================
// Walker
// ===========================================================================

#[test]
fn end_to_end_seed_six() {
    let deltas = walk(6, 0.5, 10).unwrap();
    let want = [-0.8600, 1.1970, 0.0981, -1.0100, -1.0100, -1.0100];
    assert_eq!(deltas.len(), 6);
    for (g, w) in deltas.iter().zip(want) {
        assert!((g - w).abs() < TOL, "{} vs {}", g, w);
    }

    let s = summarize(&deltas);
    assert_eq!(s.count, 6);
    assert!((s.average - -0.4325).abs() < TOL);
    assert!((s.positive_rate - 2.0 / 6.0).abs() < 1e-12);
    assert!((s.max - 1.1970).abs() < TOL);
    assert!((s.min - -1.0100).abs() < TOL);
}

#[test]
fn walk_length_bounded_and_halts_at_one() {
    for n0 in 1..200 {
        for max_steps in [1, 5, 50, 1_000] {
            let deltas = walk(n0, 0.7, max_steps).unwrap();
            assert!(deltas.len() as i64 <= max_steps);

            let path = trajectory(n0, max_steps).unwrap();
            assert_eq!(path.len(), deltas.len() + 1);
            let reached_one = path.last() == Some(&1);
            if (deltas.len() as i64) < max_steps {
                assert!(reached_one, "n0={} stopped early without reaching 1", n0);
            }
            // 1 appears only as the final value.
            assert!(!path[..path.len() - 1].contains(&1));
        }
    }
}

#[test]
fn walk_is_deterministic() {
    for n0 in [27, 97, 703, 10_007] {
        let a = walk(n0, 0.7, 1_000).unwrap();
        let b = walk(n0, 0.7, 1_000).unwrap();
        let a_bits: Vec<u64> = a.iter().map(|d| d.to_bits()).collect();
        let b_bits: Vec<u64> = b.iter().map(|d| d.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }
}

#[test]
fn seed_one_yields_empty_and_zero_summary() {
    for beta in [0.0, 0.7, 5.0] {
        assert!(walk(1, beta, 10).unwrap().is_empty());
    }
    assert_eq!(summarize(&[]), SummaryStatistics::EMPTY);
}

#[test]
fn walker_with_zero_table_isolates_log_term() {
    // beta = 0 and no penalty: deltas telescope to log2(1) - log2(n0).
    let w = Walker::new(Potential::with_table(0.0, PenaltyTable::zero()));
    let deltas = w.walk(64, 100).unwrap();
    let total: f64 = deltas.iter().sum();
    assert!((total - -6.0).abs() < 1e-9);
    assert!(deltas.iter().all(|d| (d + 1.0).abs() < 1e-12));
}

#[test]
fn trace_records_pre_transition_state() {
    let steps = trace(6, 0.5, 10).unwrap();
    let ns: Vec<i64> = steps.iter().map(|s| s.n).collect();
    assert_eq!(ns, vec![6, 3, 5, 8, 4, 2]);
    let streaks: Vec<i64> = steps.iter().map(|s| s.streak).collect();
    assert_eq!(streaks, vec![0, 0, 1, 0, 0, 0]);
    assert_eq!(steps.iter().filter(|s| s.is_ascent()).count(), 2);
}

// ===========================================================================
// Aggregation
// ===========================================================================

#[test]
fn aggregate_sanity_over_many_seeds() {
    for n0 in (2..5_000).step_by(37) {
        let s = summarize(&walk(n0, 0.7, 1_000).unwrap());
        assert!(s.count > 0);
        assert!(s.min - 1e-12 <= s.average && s.average <= s.max + 1e-12, "n0={}", n0);
        assert!((0.0..=1.0).contains(&s.positive_rate));
    }
}

#[test]
fn report_serializes_in_column_order() {
    let r = analyze(6, 0.5, 10).unwrap();
    let json = serde_json::to_string(&r).unwrap();
    let positions: Vec<usize> = TrajectoryReport::COLUMNS
        .iter()
        .map(|c| json.find(&format!("\"{}\"", c)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
}

#[test]
fn beta_report_leads_with_beta() {
    let row = BetaReport {
        beta: 0.3,
        report: analyze(27, 0.3, 1_000).unwrap(),
    };
    let json = serde_json::to_string(&row).unwrap();
    assert!(json.starts_with("{\"beta\":0.3,\"n0\":27,"), "{}", json);
    let back: BetaReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.beta, 0.3);
    assert_eq!(back.report.n0, 27);
}

#[test]
fn analyze_rejects_bad_input() {
    assert_eq!(analyze(0, 0.7, 10), Err(Error::NonPositiveSeed { n: 0 }));
    assert_eq!(analyze(5, 0.7, 0), Err(Error::NonPositiveMaxSteps { max_steps: 0 }));
}
