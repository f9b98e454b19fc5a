use std::path::PathBuf;

use clap::Parser;

use crate::tools::{Augur, Seqkit, Toolchain};

#[derive(Parser, Debug, Clone)]
#[clap(next_help_heading = "TOOL OPTIONS")]
pub struct ToolArgs {
    /// Path to the augur executable (indexing and filtering)
    #[clap(long, default_value = "augur")]
    pub augur: PathBuf,

    /// Path to the seqkit executable (identifier listing)
    #[clap(long, default_value = "seqkit")]
    pub seqkit: PathBuf,
}
impl ToolArgs {
    pub fn augur(&self) -> Augur {
        Augur::new(&self.augur)
    }

    pub fn seqkit(&self) -> Seqkit {
        Seqkit::new(&self.seqkit)
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain::new(self.augur(), self.augur(), self.seqkit())
    }
}
