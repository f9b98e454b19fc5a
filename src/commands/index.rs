use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use log::debug;

use super::paths::SequencePaths;
use crate::{cli::IndexCommand, tools::SequenceIndexer};

/// Indexes a FASTA file and moves the index into a fresh `<stem>_index` directory.
///
/// Any existing index directory for this file is removed first, so repeated runs
/// never accumulate stale index files.
pub fn index_sequences(indexer: &dyn SequenceIndexer, sequences: &Path) -> Result<PathBuf> {
    let paths = SequencePaths::new(sequences)?;
    let staged = paths.staged_index();
    indexer.index(sequences, &staged)?;

    let index_dir = paths.index_dir();
    if index_dir.exists() {
        debug!("Removing existing index directory: {}", index_dir.display());
        fs::remove_dir_all(&index_dir)
            .with_context(|| format!("Could not remove {}", index_dir.display()))?;
    }
    fs::create_dir(&index_dir)
        .with_context(|| format!("Could not create {}", index_dir.display()))?;

    let index = paths.index();
    fs::rename(&staged, &index).with_context(|| {
        format!(
            "Could not move {} to {}",
            staged.display(),
            index.display()
        )
    })?;
    Ok(index)
}

pub fn run(args: &IndexCommand) -> Result<()> {
    let index = index_sequences(&args.tools.augur(), &args.input)?;
    println!("Index path: {}", index.display());
    Ok(())
}
