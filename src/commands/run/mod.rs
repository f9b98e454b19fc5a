mod discover;
mod pipeline;
mod report;

use std::path::Path;

use anyhow::{Context, Result};
use log::error;

pub use pipeline::{Pipeline, RunConfig};
use pipeline::RunSummary;

use super::open_output;
use crate::cli::RunCommand;

fn write_report_file(path: &Path, summary: &RunSummary) -> Result<()> {
    let writer = open_output(path, false)?;
    report::write_report(writer, summary)
        .with_context(|| format!("Could not write report to {}", path.display()))
}

/// Writes the optional report, then resolves the run's result.
///
/// A report error never masks a pipeline failure; it is logged instead.
fn finish(summary: RunSummary, report: Option<&Path>) -> Result<()> {
    let reported = report.map_or(Ok(()), |path| write_report_file(path, &summary));
    summary.log();
    let result = summary.into_result();
    match reported {
        Err(report_err) if result.is_err() => {
            error!("{report_err:#}");
            result
        }
        reported => result.and(reported),
    }
}

pub fn run(args: &RunCommand) -> Result<()> {
    let config = args.config()?;
    let tools = args.tools.toolchain();
    let summary = Pipeline::new(&tools, &config).run();
    finish(summary, args.exec.report.as_deref())
}
