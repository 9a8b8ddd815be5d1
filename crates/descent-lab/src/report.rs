//! CSV persistence and console summaries for sweep output

use anyhow::Context;
use descent_core::{BetaReport, TrajectoryReport};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header for per-seed rows.
pub fn header() -> String {
    TrajectoryReport::COLUMNS.join(",")
}

/// Header for beta sweep rows; `beta` precedes the per-seed columns.
pub fn beta_header() -> String {
    format!("beta,{}", header())
}

fn row(r: &TrajectoryReport) -> String {
    format!(
        "{},{},{},{},{}",
        r.n0, r.avg_delta_v, r.pos_rate, r.max_delta_v, r.min_delta_v
    )
}

pub fn write_reports_to<W: Write>(mut out: W, reports: &[TrajectoryReport]) -> std::io::Result<()> {
    writeln!(out, "{}", header())?;
    for r in reports {
        writeln!(out, "{}", row(r))?;
    }
    out.flush()
}

pub fn write_beta_reports_to<W: Write>(mut out: W, rows: &[BetaReport]) -> std::io::Result<()> {
    writeln!(out, "{}", beta_header())?;
    for r in rows {
        writeln!(out, "{},{}", r.beta, row(&r.report))?;
    }
    out.flush()
}

fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write per-seed rows to `path`, creating parent directories.
pub fn write_reports(path: &Path, reports: &[TrajectoryReport]) -> anyhow::Result<()> {
    write_reports_to(create(path)?, reports).with_context(|| format!("writing {}", path.display()))
}

/// Write beta sweep rows to `path`, creating parent directories.
pub fn write_beta_reports(path: &Path, rows: &[BetaReport]) -> anyhow::Result<()> {
    write_beta_reports_to(create(path)?, rows)
        .with_context(|| format!("writing {}", path.display()))
}

/// Means across a batch of reports, for the console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub rows: usize,
    pub mean_avg_delta_v: f64,
    pub mean_pos_rate: f64,
}

impl BatchSummary {
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a TrajectoryReport>) -> Self {
        let mut rows = 0usize;
        let mut avg = 0.0;
        let mut pos = 0.0;
        for r in reports {
            rows += 1;
            avg += r.avg_delta_v;
            pos += r.pos_rate;
        }
        if rows == 0 {
            return Self { rows, mean_avg_delta_v: 0.0, mean_pos_rate: 0.0 };
        }
        Self {
            rows,
            mean_avg_delta_v: avg / rows as f64,
            mean_pos_rate: pos / rows as f64,
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows, mean avg ΔV = {:.6}, mean positive rate = {:.4}",
            self.rows, self.mean_avg_delta_v, self.mean_pos_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrajectoryReport {
        TrajectoryReport {
            n0: 6,
            avg_delta_v: -0.5,
            pos_rate: 0.25,
            max_delta_v: 1.5,
            min_delta_v: -1.0,
        }
    }

    #[test]
    fn headers() {
        assert_eq!(header(), "n0,avg_delta_V,pos_rate,max_delta_V,min_delta_V");
        assert_eq!(beta_header(), "beta,n0,avg_delta_V,pos_rate,max_delta_V,min_delta_V");
    }

    #[test]
    fn rows_render_in_column_order() {
        let mut buf = Vec::new();
        write_reports_to(&mut buf, &[sample()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1), Some("6,-0.5,0.25,1.5,-1"));
    }

    #[test]
    fn empty_batch_summary() {
        let s = BatchSummary::from_reports(&Vec::<TrajectoryReport>::new());
        assert_eq!(s.rows, 0);
        assert_eq!(s.mean_pos_rate, 0.0);
    }
}
