//! In-process stand-ins for the external tools.

use std::{collections::HashSet, fs, path::Path};

use anyhow::Result;
use rand::{Rng, SeedableRng};

use super::{IdLister, SequenceIndexer, SubsampleRequest, Subsampler, ToolFailure};

/// Splits a FASTA file into `(identifier, record text)` pairs
pub fn fasta_records(path: &Path) -> Result<Vec<(String, String)>> {
    let text = fs::read_to_string(path)?;
    let mut records: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if let Some(header) = line.strip_prefix('>') {
            let id = header.split_whitespace().next().unwrap_or_default();
            records.push((id.to_string(), format!("{line}\n")));
        } else if let Some((_, record)) = records.last_mut() {
            record.push_str(line);
            record.push('\n');
        }
    }
    Ok(records)
}

fn failure(tool: &str, code: i32) -> anyhow::Error {
    ToolFailure {
        tool: tool.to_string(),
        code: Some(code),
        stderr: String::new(),
    }
    .into()
}

/// Writes one `id<TAB>length` line per record, or fails with a fixed code
#[derive(Default)]
pub struct MockIndexer {
    pub fail_with: Option<i32>,
}
impl MockIndexer {
    pub fn failing(code: i32) -> Self {
        Self {
            fail_with: Some(code),
        }
    }
}
impl SequenceIndexer for MockIndexer {
    fn index(&self, sequences: &Path, output: &Path) -> Result<()> {
        if let Some(code) = self.fail_with {
            return Err(failure("mock index", code));
        }
        let mut index = String::from("strain\tlength\n");
        for (id, record) in fasta_records(sequences)? {
            index.push_str(&format!("{id}\t{}\n", record.len()));
        }
        fs::write(output, index)?;
        Ok(())
    }
}

/// Keeps records by identifier, or a seeded random half when no set is given
pub struct MockSubsampler {
    pub keep: Option<HashSet<String>>,
}
impl MockSubsampler {
    pub fn keeping(ids: &[&str]) -> Self {
        Self {
            keep: Some(ids.iter().map(|s| (*s).to_string()).collect()),
        }
    }

    pub fn random() -> Self {
        Self { keep: None }
    }
}
impl Subsampler for MockSubsampler {
    fn subsample(&self, request: &SubsampleRequest, output: &Path) -> Result<()> {
        assert!(request.index.exists(), "index must exist before filtering");
        assert!(request.metadata.exists(), "metadata must exist before filtering");
        let mut rng = rand::rngs::SmallRng::seed_from_u64(request.params.seed);
        let mut selected = String::new();
        for (id, record) in fasta_records(request.sequences)? {
            let keep = match &self.keep {
                Some(keep) => keep.contains(&id),
                None => rng.random_bool(0.5),
            };
            if keep {
                selected.push_str(&record);
            }
        }
        fs::write(output, selected)?;
        Ok(())
    }
}

/// Lists FASTA header identifiers
pub struct MockLister;
impl IdLister for MockLister {
    fn list_ids(&self, sequences: &Path, output: &Path) -> Result<()> {
        let ids: String = fasta_records(sequences)?
            .into_iter()
            .map(|(id, _)| id + "\n")
            .collect();
        fs::write(output, ids)?;
        Ok(())
    }
}
