use std::{collections::HashSet, path::PathBuf};

use anyhow::{bail, Result};
use clap::Parser;

pub const DEFAULT_VARIANTS: &str = "alpha,beta,gamma,delta,omicron";

#[derive(Parser, Debug)]
#[clap(next_help_heading = "DATASET OPTIONS")]
pub struct DatasetArgs {
    /// Root directory holding one subdirectory per variant
    #[clap(short = 'd', long, default_value = "dataset")]
    pub dataset_root: PathBuf,

    /// Variants to process (comma-separated, processed in order)
    #[clap(
        short = 'v',
        long,
        value_delimiter = ',',
        default_value = DEFAULT_VARIANTS
    )]
    pub variants: Vec<String>,
}
impl DatasetArgs {
    pub fn validate(&self) -> Result<()> {
        validate_variants(&self.variants)?;
        if !self.dataset_root.is_dir() {
            bail!(
                "Dataset root is not a directory: {}",
                self.dataset_root.display()
            );
        }
        Ok(())
    }
}

/// Variant names double as directory names and file name suffixes
pub fn validate_variants(variants: &[String]) -> Result<()> {
    if variants.is_empty() {
        bail!("At least one variant must be specified");
    }
    let mut seen = HashSet::new();
    for variant in variants {
        if variant.is_empty() {
            bail!("Variant names must not be empty");
        }
        if variant.contains(['/', '\\']) || variant == "." || variant == ".." {
            bail!("Variant name is not a plain directory name: {variant}");
        }
        if !seen.insert(variant.as_str()) {
            bail!("Variant listed more than once: {variant}");
        }
    }
    Ok(())
}
