use std::path::PathBuf;

use clap::Parser;

use super::ToolArgs;

/// List the sequence identifiers of a FASTA file, one per line.
#[derive(Parser, Debug)]
pub struct IdsCommand {
    /// Input FASTA file
    #[clap(short = 'i', long)]
    pub input: PathBuf,

    /// Output text file [default: <stem>_sequences_ids.txt]
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub tools: ToolArgs,
}
