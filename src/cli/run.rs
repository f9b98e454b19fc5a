use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{DatasetArgs, MatchArgs, SubsampleArgs, ToolArgs};
use crate::commands::run::RunConfig;

/// Index, subsample, and extract every configured variant of a dataset
#[derive(Parser, Debug)]
pub struct RunCommand {
    #[clap(flatten)]
    pub dataset: DatasetArgs,

    #[clap(flatten)]
    pub subsample: SubsampleArgs,

    #[clap(flatten)]
    pub matching: MatchArgs,

    #[clap(flatten)]
    pub tools: ToolArgs,

    #[clap(flatten)]
    pub exec: ExecArgs,
}
impl RunCommand {
    /// Validates every argument group and collects them into a run configuration
    pub fn config(&self) -> Result<RunConfig> {
        self.dataset.validate()?;
        self.subsample.validate()?;
        Ok(RunConfig {
            dataset_root: self.dataset.dataset_root.clone(),
            variants: self.dataset.variants.clone(),
            params: self.subsample.params(),
            extract: self.matching.options(),
            threads: self.exec.threads(),
            keep_going: self.exec.keep_going,
        })
    }
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "EXECUTION OPTIONS")]
pub struct ExecArgs {
    /// Number of variants to process in parallel (0 for auto)
    #[clap(short = 'T', long, default_value = "1")]
    pub threads: usize,

    /// Continue with the remaining variants after a failure
    #[clap(short = 'k', long)]
    pub keep_going: bool,

    /// Write a per-variant summary (TSV) to this path
    #[clap(short = 'r', long)]
    pub report: Option<PathBuf>,
}
impl ExecArgs {
    /// Returns the number of worker threads
    ///
    /// The number of threads is by default 1, 0 sets to maximum, and all other values are clamped to maximum.
    pub fn threads(&self) -> usize {
        match self.threads {
            0 => num_cpus::get(),
            n => n.min(num_cpus::get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(threads: &str) -> ExecArgs {
        ExecArgs::parse_from(["varsub", "-T", threads])
    }

    #[test]
    fn test_threads_default_to_one() {
        let args = ExecArgs::parse_from(["varsub"]);
        assert_eq!(args.threads(), 1);
        assert!(!args.keep_going);
        assert!(args.report.is_none());
    }

    #[test]
    fn test_zero_threads_uses_all_cores() {
        assert_eq!(exec("0").threads(), num_cpus::get());
    }

    #[test]
    fn test_threads_clamped_to_cores() {
        let cores = num_cpus::get();
        assert_eq!(exec(&(cores + 8).to_string()).threads(), cores);
        assert_eq!(exec(&cores.to_string()).threads(), cores);
    }
}
