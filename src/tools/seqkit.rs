use std::{
    fs::File,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result};
use log::info;

use super::{process::execute, IdLister};

/// The `seqkit` toolkit, used to list record identifiers
#[derive(Debug, Clone)]
pub struct Seqkit {
    program: PathBuf,
}
impl Seqkit {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl IdLister for Seqkit {
    fn list_ids(&self, sequences: &Path, output: &Path) -> Result<()> {
        info!(
            "Listing identifiers of {} -> {}",
            sequences.display(),
            output.display()
        );
        let handle = File::create(output)
            .with_context(|| format!("Could not create {}", output.display()))?;

        // `-n -i`: names only, truncated to the identifier
        let mut command = Command::new(&self.program);
        command
            .args(["seq", "-n", "-i"])
            .arg(sequences)
            .stdout(Stdio::from(handle));
        execute(command, "seqkit seq")?;
        Ok(())
    }
}
