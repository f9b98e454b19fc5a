use std::path::{Path, PathBuf};

use anyhow::Result;

use super::paths::SequencePaths;
use crate::{
    cli::SubsampleCommand,
    tools::{SubsampleParams, SubsampleRequest, Subsampler},
};

/// Writes `<stem>.subsampled_sequences.fasta` next to the sequence file
pub fn subsample_sequences(
    subsampler: &dyn Subsampler,
    sequences: &Path,
    index: &Path,
    metadata: &Path,
    params: &SubsampleParams,
) -> Result<PathBuf> {
    let output = SequencePaths::new(sequences)?.subsampled();
    let request = SubsampleRequest {
        sequences,
        index,
        metadata,
        params,
    };
    subsampler.subsample(&request, &output)?;
    Ok(output)
}

pub fn run(args: &SubsampleCommand) -> Result<()> {
    args.subsample.validate()?;
    let augur = args.tools.augur();
    let params = args.subsample.params();
    let output = if let Some(output) = &args.output {
        let request = SubsampleRequest {
            sequences: &args.input,
            index: &args.index,
            metadata: &args.metadata,
            params: &params,
        };
        augur.subsample(&request, output)?;
        output.clone()
    } else {
        subsample_sequences(&augur, &args.input, &args.index, &args.metadata, &params)?
    };
    println!("Subsampled sequences: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::mock::{fasta_records, MockSubsampler};
    use std::fs;

    #[test]
    fn test_subsample_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let fasta = dir.path().join("x.fasta");
        let index = dir.path().join("x.index.fasta");
        let metadata = dir.path().join("x.metadata.tsv");
        fs::write(&fasta, ">id1\nAC\n>id2\nGT\n>id3\nAA\n").unwrap();
        fs::write(&index, "").unwrap();
        fs::write(&metadata, "strain\n").unwrap();
        let params = SubsampleParams {
            min_date: "2020".to_string(),
            group_by: vec!["country".to_string()],
            max_per_group: 1,
            probabilistic: true,
            include_where: Vec::new(),
            seed: 1,
        };

        let output = subsample_sequences(
            &MockSubsampler::keeping(&["id1", "id3"]),
            &fasta,
            &index,
            &metadata,
            &params,
        )
        .unwrap();
        assert_eq!(output, dir.path().join("x.subsampled_sequences.fasta"));
        let ids: Vec<_> = fasta_records(&output)
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["id1", "id3"]);
    }
}
