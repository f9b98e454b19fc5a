use std::path::{Path, PathBuf};

use anyhow::Result;

use super::paths::id_list_path;
use crate::{cli::IdsCommand, tools::IdLister};

/// Writes `<stem>_sequences_ids.txt` next to the FASTA file
pub fn list_sequence_ids(lister: &dyn IdLister, sequences: &Path) -> Result<PathBuf> {
    let output = id_list_path(sequences)?;
    lister.list_ids(sequences, &output)?;
    Ok(output)
}

pub fn run(args: &IdsCommand) -> Result<()> {
    let seqkit = args.tools.seqkit();
    let output = if let Some(output) = &args.output {
        seqkit.list_ids(&args.input, output)?;
        output.clone()
    } else {
        list_sequence_ids(&seqkit, &args.input)?
    };
    println!("Identifier list: {}", output.display());
    Ok(())
}
