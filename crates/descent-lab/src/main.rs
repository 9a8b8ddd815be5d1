//! descent-lab: empirical descent statistics for the halved Collatz map
//!
//! Usage:
//!   descent-lab simulate                 → seed range at one beta → CSV
//!   descent-lab grid                     → representative seeds × beta grid → CSV
//!   descent-lab trace --n0 27            → SAT-style comments for one trajectory
//!   descent-lab dump-config              → print default config as TOML

use anyhow::Context;
use clap::{Parser, Subcommand};
use descent_core::TrajectoryReport;
use descent_lab::config::{ErrorPolicy, LabConfig};
use descent_lab::report::{write_beta_reports, write_reports, BatchSummary};
use descent_lab::sat::format_sat_comments;
use descent_lab::sweep::sweep;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "descent-lab",
    version = env!("CARGO_PKG_VERSION"),
    about = "Empirical ΔV statistics for a Lyapunov-like potential on the halved Collatz map"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (TOML)
    #[arg(long, global = true, default_value = "descent-lab.toml")]
    config: PathBuf,

    /// Skip seeds the core rejects instead of aborting the batch
    #[arg(long, global = true, default_value_t = false)]
    skip_invalid: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep an arithmetic seed range at a single beta
    Simulate {
        /// First seed (inclusive)
        #[arg(long)]
        start: Option<i64>,
        /// Last seed (exclusive)
        #[arg(long)]
        end: Option<i64>,
        /// Seed stride
        #[arg(long)]
        step: Option<i64>,
        /// Streak weight
        #[arg(long)]
        beta: Option<f64>,
        /// Maximum transitions per trajectory
        #[arg(long)]
        max_steps: Option<i64>,
        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sweep seeds across a grid of beta values
    Grid {
        /// Seeds (comma separated)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        seeds: Option<Vec<i64>>,
        /// Beta values (comma separated)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        betas: Option<Vec<f64>>,
        /// Maximum transitions per trajectory
        #[arg(long)]
        max_steps: Option<i64>,
        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print one trajectory as SAT-style comments
    Trace {
        #[arg(long)]
        n0: Option<i64>,
        #[arg(long)]
        beta: Option<f64>,
        /// Maximum transitions
        #[arg(long)]
        steps: Option<i64>,
    },
    /// Print the default config as TOML and exit
    DumpConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "descent_lab=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DumpConfig => {
            println!("{}", LabConfig::default().to_toml());
        }

        Commands::Simulate { start, end, step, beta, max_steps, output } => {
            let (config, policy) = load_config(&cli.config, cli.skip_invalid)?;
            let mut sim = config.simulation;
            sim.seed_start = start.unwrap_or(sim.seed_start);
            sim.seed_end = end.unwrap_or(sim.seed_end);
            sim.seed_step = step.unwrap_or(sim.seed_step);
            sim.beta = beta.unwrap_or(sim.beta);
            sim.max_steps = max_steps.unwrap_or(sim.max_steps);
            sim.output = output.unwrap_or(sim.output);

            let seeds = sim.seeds();
            tracing::info!(seeds = seeds.len(), beta = sim.beta, max_steps = sim.max_steps, "simulating");
            let rows = sweep(&seeds, &[sim.beta], sim.max_steps, policy).await?;
            let reports: Vec<TrajectoryReport> = rows.into_iter().map(|r| r.report).collect();
            write_reports(&sim.output, &reports)?;

            println!("Simulation saved to {}", sim.output.display());
            println!("{}", BatchSummary::from_reports(&reports));
        }

        Commands::Grid { seeds, betas, max_steps, output } => {
            let (config, policy) = load_config(&cli.config, cli.skip_invalid)?;
            let mut grid = config.grid;
            grid.seeds = seeds.unwrap_or(grid.seeds);
            grid.betas = betas.unwrap_or(grid.betas);
            grid.max_steps = max_steps.unwrap_or(grid.max_steps);
            grid.output = output.unwrap_or(grid.output);
            grid.dedup_betas();

            tracing::info!(seeds = grid.seeds.len(), betas = grid.betas.len(), "grid search");
            let rows = sweep(&grid.seeds, &grid.betas, grid.max_steps, policy).await?;
            write_beta_reports(&grid.output, &rows)?;

            println!("Grid search saved to {}", grid.output.display());
            for &beta in &grid.betas {
                let summary =
                    BatchSummary::from_reports(rows.iter().filter(|r| r.beta == beta).map(|r| &r.report));
                println!("  beta = {:<5} {}", beta, summary);
            }
        }

        Commands::Trace { n0, beta, steps } => {
            let (config, _) = load_config(&cli.config, cli.skip_invalid)?;
            let mut trace = config.trace;
            trace.n0 = n0.unwrap_or(trace.n0);
            trace.beta = beta.unwrap_or(trace.beta);
            trace.steps = steps.unwrap_or(trace.steps);

            let steps = descent_core::trace(trace.n0, trace.beta, trace.steps)
                .with_context(|| format!("tracing n0 = {}", trace.n0))?;
            print!("{}", format_sat_comments(&steps));
        }
    }

    Ok(())
}

/// Config from `path`, with `--skip-invalid` overriding its error policy.
fn load_config(path: &Path, skip_invalid: bool) -> anyhow::Result<(LabConfig, ErrorPolicy)> {
    let config = LabConfig::load(path)?;
    let policy = if skip_invalid { ErrorPolicy::Skip } else { config.on_error };
    Ok((config, policy))
}
