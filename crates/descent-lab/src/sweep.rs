//! Seed x beta sweeps
//!
//! Trajectories are independent, so each beta row runs on its own blocking
//! task. Rows are reassembled in input order (beta-major, then seed order)
//! regardless of completion order.

use anyhow::Context;
use descent_core::{analyze, BetaReport, TrajectoryReport};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::ErrorPolicy;

/// Analyze every seed under one beta on the calling thread.
pub fn sweep_beta(
    seeds: &[i64],
    beta: f64,
    max_steps: i64,
    policy: ErrorPolicy,
) -> anyhow::Result<Vec<TrajectoryReport>> {
    let mut reports = Vec::with_capacity(seeds.len());
    for &seed in seeds {
        match analyze(seed, beta, max_steps) {
            Ok(report) => reports.push(report),
            Err(e) if policy == ErrorPolicy::Skip => {
                tracing::warn!(seed, beta, error = %e, "skipping seed");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("seed {} at beta {}", seed, beta));
            }
        }
    }
    Ok(reports)
}

/// Analyze the full cross product of `betas` and `seeds`.
pub async fn sweep(
    seeds: &[i64],
    betas: &[f64],
    max_steps: i64,
    policy: ErrorPolicy,
) -> anyhow::Result<Vec<BetaReport>> {
    let seeds: Arc<[i64]> = Arc::from(seeds);
    let mut tasks = JoinSet::new();
    for (idx, &beta) in betas.iter().enumerate() {
        let seeds = Arc::clone(&seeds);
        tasks.spawn_blocking(move || (idx, sweep_beta(&seeds, beta, max_steps, policy)));
    }

    let mut rows: Vec<Vec<BetaReport>> = vec![Vec::new(); betas.len()];
    while let Some(joined) = tasks.join_next().await {
        let (idx, result) = joined.context("sweep task failed")?;
        let beta = betas[idx];
        rows[idx] = result?
            .into_iter()
            .map(|report| BetaReport { beta, report })
            .collect();
        tracing::debug!(beta, seeds = rows[idx].len(), "beta row complete");
    }

    Ok(rows.into_iter().flatten().collect())
}
