use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::Result;
use log::info;

use super::{process::execute, SequenceIndexer, SubsampleRequest, Subsampler};

/// The `augur` toolkit, used for sequence indexing and filtering
#[derive(Debug, Clone)]
pub struct Augur {
    program: PathBuf,
}
impl Augur {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, args: Vec<OsString>) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args);
        command
    }
}

fn index_args(sequences: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "index".into(),
        "--sequences".into(),
        sequences.into(),
        "--output".into(),
        output.into(),
    ]
}

fn filter_args(request: &SubsampleRequest, output: &Path) -> Vec<OsString> {
    let params = request.params;
    let mut args: Vec<OsString> = vec![
        "filter".into(),
        "--sequences".into(),
        request.sequences.into(),
        "--sequence-index".into(),
        request.index.into(),
        "--metadata".into(),
        request.metadata.into(),
        "--min-date".into(),
        params.min_date.as_str().into(),
        "--group-by".into(),
    ];
    args.extend(params.group_by.iter().map(OsString::from));
    args.push("--sequences-per-group".into());
    args.push(params.max_per_group.to_string().into());
    if params.probabilistic {
        args.push("--probabilistic-sampling".into());
    } else {
        args.push("--no-probabilistic-sampling".into());
    }
    if !params.include_where.is_empty() {
        args.push("--include-where".into());
        args.extend(params.include_where.iter().map(OsString::from));
    }
    args.push("--subsample-seed".into());
    args.push(params.seed.to_string().into());
    args.push("--output-sequences".into());
    args.push(output.into());
    args
}

impl SequenceIndexer for Augur {
    fn index(&self, sequences: &Path, output: &Path) -> Result<()> {
        info!(
            "Indexing {} -> {}",
            sequences.display(),
            output.display()
        );
        execute(self.command(index_args(sequences, output)), "augur index")?;
        Ok(())
    }
}

impl Subsampler for Augur {
    fn subsample(&self, request: &SubsampleRequest, output: &Path) -> Result<()> {
        info!(
            "Subsampling {} (metadata: {}) -> {}",
            request.sequences.display(),
            request.metadata.display(),
            output.display()
        );
        execute(self.command(filter_args(request, output)), "augur filter")?;
        Ok(())
    }
}
