mod augur;
#[cfg(test)]
pub mod mock;
mod process;
mod seqkit;

use std::path::Path;

use anyhow::Result;

pub use augur::Augur;
pub use process::ToolFailure;
pub use seqkit::Seqkit;

/// Constraints passed through to the subsampling tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsampleParams {
    pub min_date: String,
    pub group_by: Vec<String>,
    pub max_per_group: usize,
    pub probabilistic: bool,
    pub include_where: Vec<String>,
    pub seed: u64,
}

/// Inputs of a single subsampling invocation
#[derive(Debug, Clone, Copy)]
pub struct SubsampleRequest<'a> {
    pub sequences: &'a Path,
    pub index: &'a Path,
    pub metadata: &'a Path,
    pub params: &'a SubsampleParams,
}

/// Builds a sequence index for a FASTA file.
pub trait SequenceIndexer: Send + Sync {
    fn index(&self, sequences: &Path, output: &Path) -> Result<()>;
}

/// Writes a reduced FASTA file selected under grouping and date constraints.
pub trait Subsampler: Send + Sync {
    fn subsample(&self, request: &SubsampleRequest, output: &Path) -> Result<()>;
}

/// Writes the identifiers of a FASTA file, one per line, in record order.
pub trait IdLister: Send + Sync {
    fn list_ids(&self, sequences: &Path, output: &Path) -> Result<()>;
}

/// The external collaborators of a pipeline run
pub struct Toolchain {
    pub indexer: Box<dyn SequenceIndexer>,
    pub subsampler: Box<dyn Subsampler>,
    pub lister: Box<dyn IdLister>,
}
impl Toolchain {
    pub fn new(
        indexer: impl SequenceIndexer + 'static,
        subsampler: impl Subsampler + 'static,
        lister: impl IdLister + 'static,
    ) -> Self {
        Self {
            indexer: Box::new(indexer),
            subsampler: Box::new(subsampler),
            lister: Box::new(lister),
        }
    }
}
