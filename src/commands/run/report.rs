use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::pipeline::{RunSummary, VariantOutcome, VariantStats};

const COLUMNS: [&str; 6] = [
    "variant",
    "status",
    "sequence_files",
    "ids",
    "metadata_rows",
    "message",
];

#[derive(Serialize)]
struct ReportRow<'a> {
    variant: &'a str,
    status: &'static str,
    sequence_files: usize,
    ids: usize,
    metadata_rows: usize,
    message: String,
}

impl<'a> ReportRow<'a> {
    fn new(variant: &'a str, outcome: &VariantOutcome) -> Self {
        let (stats, message) = match outcome {
            VariantOutcome::Processed(stats) => (*stats, String::new()),
            VariantOutcome::Skipped { reason } => (VariantStats::default(), reason.clone()),
            VariantOutcome::Failed { error } => (
                VariantStats::default(),
                // one line per row
                format!("{error:#}")
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        };
        Self {
            variant,
            status: outcome.label(),
            sequence_files: stats.files,
            ids: stats.ids,
            metadata_rows: stats.rows,
            message,
        }
    }
}

/// Writes one TSV row per attempted variant
pub fn write_report<W: Write>(writer: W, summary: &RunSummary) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for result in &summary.results {
        wtr.serialize(ReportRow::new(&result.variant, &result.outcome))?;
    }
    wtr.flush()?;
    Ok(())
}
