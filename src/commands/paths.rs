use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub const FASTA_SUFFIX: &str = ".fasta";
pub const METADATA_SUFFIX: &str = ".metadata.tsv";

/// Derived artifact locations for one sequence file.
///
/// Every artifact lives next to the sequence file and is namespaced by its stem,
/// so two sequence files never share a derived path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePaths {
    dir: PathBuf,
    stem: String,
}
impl SequencePaths {
    pub fn new(sequences: &Path) -> Result<Self> {
        let stem = sequences
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("Invalid sequence file name: {}", sequences.display()))?;
        Ok(Self {
            dir: sequences.parent().map(Path::to_path_buf).unwrap_or_default(),
            stem: stem.to_string(),
        })
    }

    /// Where the indexer writes before the index is relocated
    pub fn staged_index(&self) -> PathBuf {
        self.dir.join(format!("{}.index.fasta", self.stem))
    }

    pub fn index_dir(&self) -> PathBuf {
        self.dir.join(format!("{}_index", self.stem))
    }

    pub fn index(&self) -> PathBuf {
        self.index_dir().join(format!("{}.index.fasta", self.stem))
    }

    pub fn subsampled(&self) -> PathBuf {
        self.dir
            .join(format!("{}.subsampled_sequences{FASTA_SUFFIX}", self.stem))
    }
}

/// `<dir>/<stem>_sequences_ids.txt` for any FASTA file
pub fn id_list_path(sequences: &Path) -> Result<PathBuf> {
    let paths = SequencePaths::new(sequences)?;
    Ok(paths.dir.join(format!("{}_sequences_ids.txt", paths.stem)))
}

pub fn metadata_output(variant_dir: &Path, variant: &str) -> PathBuf {
    variant_dir.join(format!("{variant}.subsampled_metadata.tsv"))
}
