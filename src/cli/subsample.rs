use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use regex::Regex;

use super::ToolArgs;
use crate::tools::SubsampleParams;

/// Subsample a single FASTA file with its index and metadata
#[derive(Parser, Debug)]
pub struct SubsampleCommand {
    /// Input FASTA file
    #[clap(short = 'i', long)]
    pub input: PathBuf,

    /// Sequence index of the input (see `varsub index`)
    #[clap(short = 'x', long)]
    pub index: PathBuf,

    /// Metadata table (TSV)
    #[clap(short = 'm', long)]
    pub metadata: PathBuf,

    /// Output FASTA file [default: <stem>.subsampled_sequences.fasta]
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub subsample: SubsampleArgs,

    #[clap(flatten)]
    pub tools: ToolArgs,
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "SUBSAMPLE OPTIONS")]
pub struct SubsampleArgs {
    /// Earliest collection date to keep (YYYY, YYYY-MM, YYYY-MM-DD or decimal year)
    #[clap(long, default_value = "2020-01-01")]
    pub min_date: String,

    /// Metadata columns to group by (comma-separated)
    #[clap(short = 'g', long, value_delimiter = ',', default_value = "country")]
    pub group_by: Vec<String>,

    /// Maximum number of sequences kept per group
    #[clap(short = 'n', long, default_value = "10")]
    pub max_per_group: usize,

    /// Keep records matching this clause regardless of grouping (repeatable)
    #[clap(short = 'w', long)]
    pub include_where: Vec<String>,

    /// Seed to use for random sampling
    #[clap(short = 'S', long, default_value = "42")]
    pub seed: u64,

    /// Disable probabilistic sampling of group sizes
    #[clap(long)]
    pub no_probabilistic: bool,
}
impl SubsampleArgs {
    pub fn validate(&self) -> Result<()> {
        if self.max_per_group == 0 {
            bail!("Maximum sequences per group must be greater than 0");
        }
        if self.group_by.is_empty() || self.group_by.iter().any(String::is_empty) {
            bail!("At least one non-empty group-by column must be specified");
        }
        let date = Regex::new(r"^\d{4}(-\d{2}(-\d{2})?|\.\d+)?$")?;
        if !date.is_match(&self.min_date) {
            bail!(
                "Minimum date must be YYYY, YYYY-MM, YYYY-MM-DD or a decimal year: {}",
                self.min_date
            );
        }
        Ok(())
    }

    pub fn params(&self) -> SubsampleParams {
        SubsampleParams {
            min_date: self.min_date.clone(),
            group_by: self.group_by.clone(),
            max_per_group: self.max_per_group,
            probabilistic: !self.no_probabilistic,
            include_where: self.include_where.clone(),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SubsampleArgs {
        let mut argv = vec!["varsub"];
        argv.extend_from_slice(args);
        SubsampleArgs::parse_from(argv)
    }

    #[test]
    fn test_defaults_are_valid() {
        let args = parse(&[]);
        assert!(args.validate().is_ok());
        let params = args.params();
        assert_eq!(params.group_by, vec!["country".to_string()]);
        assert_eq!(params.max_per_group, 10);
        assert_eq!(params.seed, 42);
        assert!(params.probabilistic);
        assert!(params.include_where.is_empty());
    }

    #[test]
    fn test_date_formats() {
        for date in ["2021", "2021-06", "2021-06-30", "2021.5"] {
            assert!(parse(&["--min-date", date]).validate().is_ok(), "{date}");
        }
        for date in ["21-06-30", "2021/06/30", "yesterday", ""] {
            assert!(parse(&["--min-date", date]).validate().is_err(), "{date}");
        }
    }

    #[test]
    fn test_zero_per_group_is_invalid() {
        assert!(parse(&["-n", "0"]).validate().is_err());
    }

    #[test]
    fn test_pass_through_values() {
        let params = parse(&[
            "-g",
            "country,month",
            "-w",
            "region=Europe",
            "-w",
            "host=Human",
            "-S",
            "7",
            "--no-probabilistic",
        ])
        .params();
        assert_eq!(params.group_by, vec!["country", "month"]);
        assert_eq!(params.include_where, vec!["region=Europe", "host=Human"]);
        assert_eq!(params.seed, 7);
        assert!(!params.probabilistic);
    }
}
