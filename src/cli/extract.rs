use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::commands::extract::ExtractOptions;

/// Select the metadata rows that match a list of sequence identifiers
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// Identifier list, one per line
    #[clap(short = 'l', long)]
    pub ids: PathBuf,

    /// Metadata table (TSV) [default: stdin]
    #[clap(short = 'm', long)]
    pub metadata: Option<PathBuf>,

    /// Output TSV file [default: stdout]
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub matching: MatchArgs,
}

#[derive(Parser, Debug, Clone)]
#[clap(next_help_heading = "MATCH OPTIONS")]
pub struct MatchArgs {
    /// How identifiers are matched against metadata rows
    #[clap(long, value_enum, default_value = "substring")]
    pub match_mode: MatchMode,

    /// Identifier column used by exact matching
    #[clap(long, default_value = "strain")]
    pub id_column: String,

    /// Always copy the first metadata line (header) to the output
    #[clap(long)]
    pub keep_header: bool,
}
impl MatchArgs {
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            mode: self.match_mode,
            id_column: self.id_column.clone(),
            with_header: self.keep_header || self.match_mode == MatchMode::Exact,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Keep a row if any identifier occurs anywhere in it
    #[default]
    Substring,
    /// Keep a row if its identifier column equals an identifier
    Exact,
}
