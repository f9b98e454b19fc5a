use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::commands::paths::{FASTA_SUFFIX, METADATA_SUFFIX};

/// Input files of one variant, each list sorted by file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantInputs {
    pub variant: String,
    pub dir: PathBuf,
    /// Files matching `*<variant>.fasta`
    pub sequences: Vec<PathBuf>,
    /// Files matching `*.metadata.tsv`
    pub metadata: Vec<PathBuf>,
}
impl VariantInputs {
    /// The metadata table handed to every stage
    pub fn primary_metadata(&self) -> Option<&Path> {
        self.metadata.first().map(PathBuf::as_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Ready(VariantInputs),
    Skipped(String),
}

/// Lists the files directly inside `<root>/<variant>/`.
///
/// Only reads the filesystem; a variant with missing inputs is `Skipped`.
pub fn discover_variant(root: &Path, variant: &str) -> Result<Discovery> {
    let dir = root.join(variant);
    if !dir.is_dir() {
        return Ok(Discovery::Skipped(format!(
            "no variant directory at {}",
            dir.display()
        )));
    }

    let sequence_suffix = format!("{variant}{FASTA_SUFFIX}");
    let mut sequences = Vec::new();
    let mut metadata = Vec::new();
    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Could not list {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if name.ends_with(&sequence_suffix) {
            sequences.push(entry.into_path());
        } else if name.ends_with(METADATA_SUFFIX) {
            metadata.push(entry.into_path());
        }
    }

    if sequences.is_empty() {
        return Ok(Discovery::Skipped(format!(
            "no files matching *{sequence_suffix} in {}",
            dir.display()
        )));
    }
    if metadata.is_empty() {
        return Ok(Discovery::Skipped(format!(
            "no files matching *{METADATA_SUFFIX} in {}",
            dir.display()
        )));
    }
    Ok(Discovery::Ready(VariantInputs {
        variant: variant.to_string(),
        dir,
        sequences,
        metadata,
    }))
}
