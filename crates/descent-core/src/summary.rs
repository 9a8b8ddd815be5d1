//! Reduction of delta sequences into summary statistics

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Result};
use crate::walker::walk;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStatistics {
    pub count: usize,
    pub average: f64,
    pub positive_rate: f64,
    pub max: f64,
    pub min: f64,
}

impl SummaryStatistics {
    /// Zero-default for an empty sequence. Indistinguishable from a
    /// perfectly neutral result; check `count` to tell them apart.
    pub const EMPTY: SummaryStatistics = SummaryStatistics {
        count: 0,
        average: 0.0,
        positive_rate: 0.0,
        max: 0.0,
        min: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Reduce `deltas` to count, mean, share of strictly positive entries, and extrema.
pub fn summarize(deltas: &[f64]) -> SummaryStatistics {
    if deltas.is_empty() {
        return SummaryStatistics::EMPTY;
    }

    let count = deltas.len();
    let mut sum = 0.0;
    let mut positive = 0usize;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for &d in deltas {
        sum += d;
        if d > 0.0 {
            positive += 1;
        }
        max = max.max(d);
        min = min.min(d);
    }

    SummaryStatistics {
        count,
        average: sum / count as f64,
        positive_rate: positive as f64 / count as f64,
        max,
        min,
    }
}

/// Persisted record for one seed. Field order is the tabular column order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryReport {
    pub n0: i64,
    #[serde(rename = "avg_delta_V")]
    pub avg_delta_v: f64,
    pub pos_rate: f64,
    #[serde(rename = "max_delta_V")]
    pub max_delta_v: f64,
    #[serde(rename = "min_delta_V")]
    pub min_delta_v: f64,
}

impl TrajectoryReport {
    pub const COLUMNS: [&'static str; 5] =
        ["n0", "avg_delta_V", "pos_rate", "max_delta_V", "min_delta_V"];

    pub fn new(n0: i64, stats: &SummaryStatistics) -> Self {
        Self {
            n0,
            avg_delta_v: stats.average,
            pos_rate: stats.positive_rate,
            max_delta_v: stats.max,
            min_delta_v: stats.min,
        }
    }
}

/// A report from a beta sweep; `beta` leads the column order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetaReport {
    pub beta: f64,
    #[serde(flatten)]
    pub report: TrajectoryReport,
}

/// Walk `n0` and summarize its deltas.
pub fn analyze(n0: i64, beta: f64, max_steps: i64) -> Result<TrajectoryReport> {
    ensure_positive(n0)?;
    let deltas = walk(n0, beta, max_steps)?;
    Ok(TrajectoryReport::new(n0, &summarize(&deltas)))
}
