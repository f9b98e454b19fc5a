use std::path::PathBuf;

use clap::Parser;

use super::ToolArgs;

/// Index a FASTA file into its own `<stem>_index` directory
#[derive(Parser, Debug)]
pub struct IndexCommand {
    /// Input FASTA file
    #[clap(short = 'i', long)]
    pub input: PathBuf,

    #[clap(flatten)]
    pub tools: ToolArgs,
}
