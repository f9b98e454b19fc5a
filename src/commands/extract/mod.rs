mod exact;
mod substring;

use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::info;

use substring::SubstringMatcher;

use super::{match_input, match_output, open_output};
use crate::cli::{ExtractCommand, MatchMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub mode: MatchMode,
    pub id_column: String,
    /// Copy the metadata header to the output
    pub with_header: bool,
}
impl ExtractOptions {
    /// Same matching, header suppressed (used when appending to an existing output)
    pub fn without_header(&self) -> Self {
        Self {
            with_header: false,
            ..self.clone()
        }
    }
}
impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Substring,
            id_column: "strain".to_string(),
            with_header: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub ids: usize,
    pub rows: usize,
}

/// Reads one identifier per line, skipping blank lines.
///
/// Only trailing whitespace is removed; a blank pattern would otherwise match
/// every metadata row.
pub fn read_ids<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let id = line.trim_end();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

pub fn extract_metadata<R: BufRead, W: Write>(
    ids: &[String],
    metadata: R,
    writer: &mut W,
    opts: &ExtractOptions,
) -> Result<ExtractStats> {
    let rows = match opts.mode {
        MatchMode::Substring => {
            SubstringMatcher::new(ids)?.filter_lines(metadata, writer, opts.with_header)?
        }
        MatchMode::Exact => {
            exact::filter_rows(ids, &opts.id_column, metadata, writer, opts.with_header)?
        }
    };
    Ok(ExtractStats {
        ids: ids.len(),
        rows,
    })
}

/// File-to-file extraction, truncating the output unless `append` is set
pub fn extract_metadata_file(
    ids: &Path,
    metadata: &Path,
    output: &Path,
    append: bool,
    opts: &ExtractOptions,
) -> Result<ExtractStats> {
    let id_list = read_ids(match_input(Some(ids))?)
        .with_context(|| format!("Could not read identifiers from {}", ids.display()))?;
    let reader = match_input(Some(metadata))?;
    let mut writer = open_output(output, append)?;
    let stats = extract_metadata(&id_list, reader, &mut writer, opts)
        .with_context(|| format!("Could not extract rows from {}", metadata.display()))?;
    writer.flush()?;
    info!(
        "Extracted {} metadata rows for {} identifiers -> {}",
        stats.rows,
        stats.ids,
        output.display()
    );
    Ok(stats)
}

pub fn run(args: &ExtractCommand) -> Result<()> {
    let ids = read_ids(match_input(Some(args.ids.as_path()))?)?;
    let reader = match_input(args.metadata.as_deref())?;
    let mut writer = match_output(args.output.as_deref())?;
    let stats = extract_metadata(&ids, reader, &mut writer, &args.matching.options())?;
    writer.flush()?;
    info!(
        "Extracted {} metadata rows for {} identifiers",
        stats.rows, stats.ids
    );
    Ok(())
}
