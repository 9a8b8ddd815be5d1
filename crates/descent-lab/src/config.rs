//! Lab configuration
//!
//! All tunable run parameters in one place. Loaded from TOML at startup,
//! falls back to defaults if no config file exists.

use anyhow::Context;
use descent_core::DEFAULT_BETA;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level lab configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// What a sweep does when a seed is rejected by the core.
    pub on_error: ErrorPolicy,
    /// Single-beta sweep over an arithmetic seed range.
    pub simulation: SimulationConfig,
    /// Beta grid over a short list of representative seeds.
    pub grid: GridConfig,
    /// Single annotated trajectory.
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole batch on the first rejected seed.
    #[default]
    Abort,
    /// Log and drop the rejected seed, keep going.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// First seed (inclusive).
    pub seed_start: i64,
    /// Last seed (exclusive).
    pub seed_end: i64,
    /// Stride between seeds.
    pub seed_step: i64,
    pub beta: f64,
    pub max_steps: i64,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub seeds: Vec<i64>,
    pub betas: Vec<f64>,
    pub max_steps: i64,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub n0: i64,
    pub beta: f64,
    pub steps: i64,
}

// ============================================================
// Defaults
// ============================================================

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            simulation: SimulationConfig::default(),
            grid: GridConfig::default(),
            trace: TraceConfig::default(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed_start: 27,
            seed_end: 10_008,
            seed_step: 100,
            beta: DEFAULT_BETA,
            max_steps: 1_000,
            output: PathBuf::from("data/empirical_results.csv"),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            seeds: vec![27, 31, 95, 703, 10_007],
            betas: default_betas(),
            max_steps: 1_000,
            output: PathBuf::from("data/beta_search_log.csv"),
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { n0: 27, beta: DEFAULT_BETA, steps: 64 }
    }
}

/// 0.3, 0.4, ... 1.1 rounded to two decimals.
fn default_betas() -> Vec<f64> {
    (3..12).map(|i| (0.1 * i as f64 * 100.0).round() / 100.0).collect()
}

// ============================================================
// Loading
// ============================================================

impl LabConfig {
    /// Load config from a TOML file. Only a missing file falls back to
    /// defaults; an unreadable or malformed one is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        let config =
            toml::from_str::<Self>(&content).with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

impl SimulationConfig {
    /// Seeds `seed_start, seed_start + seed_step, ...` below `seed_end`.
    /// A non-positive stride yields no seeds.
    pub fn seeds(&self) -> Vec<i64> {
        if self.seed_step <= 0 {
            return Vec::new();
        }
        (self.seed_start..self.seed_end)
            .step_by(self.seed_step as usize)
            .collect()
    }
}

impl GridConfig {
    /// Drop repeated beta values, keeping the first occurrence of each.
    pub fn dedup_betas(&mut self) {
        let mut seen: Vec<u64> = Vec::with_capacity(self.betas.len());
        self.betas.retain(|b| {
            let bits = b.to_bits();
            if seen.contains(&bits) {
                false
            } else {
                seen.push(bits);
                true
            }
        });
    }
}
