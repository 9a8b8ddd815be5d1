//! Descent Lab: empirical sweeps over the descent core
//!
//! - `config`: TOML-backed defaults for every run mode
//! - `sweep`: seeds x betas, one blocking task per beta
//! - `report`: CSV persistence and console summaries
//! - `sat`: SAT-style comment rendering of a single trace

pub mod config;
pub mod report;
pub mod sat;
pub mod sweep;
