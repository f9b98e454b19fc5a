use std::{
    path::PathBuf,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
};

use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use parking_lot::Mutex;

use super::discover::{discover_variant, Discovery, VariantInputs};
use crate::{
    commands::{
        extract::{extract_metadata_file, ExtractOptions},
        ids::list_sequence_ids,
        index::index_sequences,
        paths::metadata_output,
        subsample::subsample_sequences,
    },
    tools::{SubsampleParams, Toolchain},
};

/// Validated configuration of a multi-variant run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dataset_root: PathBuf,
    pub variants: Vec<String>,
    pub params: SubsampleParams,
    pub extract: ExtractOptions,
    pub threads: usize,
    pub keep_going: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantStats {
    pub files: usize,
    pub ids: usize,
    pub rows: usize,
}

#[derive(Debug)]
pub enum VariantOutcome {
    Processed(VariantStats),
    Skipped { reason: String },
    Failed { error: anyhow::Error },
}
impl VariantOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Processed(_) => "processed",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug)]
pub struct VariantResult {
    pub variant: String,
    pub outcome: VariantOutcome,
}

/// Outcomes of every variant that was started, in configured order
#[derive(Debug)]
pub struct RunSummary {
    pub results: Vec<VariantResult>,
    pub keep_going: bool,
}
impl RunSummary {
    fn count(&self, label: &str) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.label() == label)
            .count()
    }

    pub fn log(&self) {
        info!(
            "Finished: {} processed, {} skipped, {} failed",
            self.count("processed"),
            self.count("skipped"),
            self.count("failed")
        );
    }

    /// Converts the summary into the run's overall result.
    ///
    /// Without `keep_going` the first failure is returned as-is so its cause
    /// (and exit code) survive; otherwise all failures are folded into one error.
    pub fn into_result(self) -> Result<()> {
        let mut failures: Vec<(String, anyhow::Error)> = self
            .results
            .into_iter()
            .filter_map(|r| match r.outcome {
                VariantOutcome::Failed { error } => Some((r.variant, error)),
                _ => None,
            })
            .collect();
        if failures.is_empty() {
            return Ok(());
        }
        if !self.keep_going {
            let (variant, error) = failures.swap_remove(0);
            return Err(error.context(format!("Variant {variant} failed")));
        }
        let details = failures
            .iter()
            .map(|(variant, error)| format!("  {variant}: {error:#}"))
            .collect::<Vec<_>>()
            .join("\n");
        Err(anyhow!(
            "{} variant(s) failed:\n{details}",
            failures.len()
        ))
    }
}

pub struct Pipeline<'a> {
    tools: &'a Toolchain,
    config: &'a RunConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(tools: &'a Toolchain, config: &'a RunConfig) -> Self {
        Self { tools, config }
    }

    pub fn run(&self) -> RunSummary {
        let threads = self.config.threads.min(self.config.variants.len()).max(1);
        let results = if threads == 1 {
            self.run_sequential()
        } else {
            self.run_parallel(threads)
        };
        RunSummary {
            results,
            keep_going: self.config.keep_going,
        }
    }

    fn run_sequential(&self) -> Vec<VariantResult> {
        let mut results = Vec::with_capacity(self.config.variants.len());
        for variant in &self.config.variants {
            let outcome = self.process_variant(variant);
            let stop = outcome.is_failed() && !self.config.keep_going;
            results.push(VariantResult {
                variant: variant.clone(),
                outcome,
            });
            if stop {
                break;
            }
        }
        results
    }

    /// Variants are claimed in order by the workers; results keep the configured order.
    fn run_parallel(&self, threads: usize) -> Vec<VariantResult> {
        let variants = &self.config.variants;
        let next = AtomicUsize::new(0);
        let abort = AtomicBool::new(false);
        let slots: Mutex<Vec<Option<VariantOutcome>>> =
            Mutex::new(variants.iter().map(|_| None).collect());

        info!("Processing {} variants on {threads} threads", variants.len());
        thread::scope(|scope| {
            for _ in 0..threads {
                scope.spawn(|| loop {
                    if abort.load(Ordering::SeqCst) {
                        break;
                    }
                    let idx = next.fetch_add(1, Ordering::SeqCst);
                    let Some(variant) = variants.get(idx) else {
                        break;
                    };
                    let outcome = self.process_variant(variant);
                    if outcome.is_failed() && !self.config.keep_going {
                        abort.store(true, Ordering::SeqCst);
                    }
                    slots.lock()[idx] = Some(outcome);
                });
            }
        });

        slots
            .into_inner()
            .into_iter()
            .zip(variants)
            .filter_map(|(outcome, variant)| {
                outcome.map(|outcome| VariantResult {
                    variant: variant.clone(),
                    outcome,
                })
            })
            .collect()
    }

    fn process_variant(&self, variant: &str) -> VariantOutcome {
        let inputs = match discover_variant(&self.config.dataset_root, variant) {
            Ok(Discovery::Ready(inputs)) => inputs,
            Ok(Discovery::Skipped(reason)) => {
                warn!("[{variant}] Skipping: {reason}");
                return VariantOutcome::Skipped { reason };
            }
            Err(error) => {
                error!("[{variant}] {error:#}");
                return VariantOutcome::Failed { error };
            }
        };
        match self.process_inputs(&inputs) {
            Ok(stats) => {
                info!(
                    "[{variant}] Done: {} sequence files, {} identifiers, {} metadata rows",
                    stats.files, stats.ids, stats.rows
                );
                VariantOutcome::Processed(stats)
            }
            Err(error) => {
                error!("[{variant}] {error:#}");
                VariantOutcome::Failed { error }
            }
        }
    }

    /// Runs index, subsample, ids, and extract for each sequence file in turn.
    ///
    /// The first sequence file truncates the variant's metadata output; later
    /// files append to it without repeating the header.
    fn process_inputs(&self, inputs: &VariantInputs) -> Result<VariantStats> {
        let variant = inputs.variant.as_str();
        let metadata = inputs
            .primary_metadata()
            .ok_or_else(|| anyhow!("No metadata file for variant {variant}"))?;
        let output = metadata_output(&inputs.dir, variant);
        if inputs.metadata.len() > 1 {
            warn!(
                "[{variant}] {} metadata files found, using {}",
                inputs.metadata.len(),
                metadata.display()
            );
        }

        let mut stats = VariantStats::default();
        for (idx, sequences) in inputs.sequences.iter().enumerate() {
            info!("[{variant}] Indexing {}", sequences.display());
            let index = index_sequences(self.tools.indexer.as_ref(), sequences)
                .with_context(|| format!("Indexing {} failed", sequences.display()))?;

            info!("[{variant}] Subsampling {}", sequences.display());
            let subsampled = subsample_sequences(
                self.tools.subsampler.as_ref(),
                sequences,
                &index,
                metadata,
                &self.config.params,
            )
            .with_context(|| format!("Subsampling {} failed", sequences.display()))?;

            info!("[{variant}] Listing identifiers of {}", subsampled.display());
            let ids = list_sequence_ids(self.tools.lister.as_ref(), &subsampled).with_context(
                || format!("Listing identifiers of {} failed", subsampled.display()),
            )?;

            info!("[{variant}] Extracting metadata rows -> {}", output.display());
            let append = idx > 0;
            let opts = if append {
                self.config.extract.without_header()
            } else {
                self.config.extract.clone()
            };
            let extracted = extract_metadata_file(&ids, metadata, &output, append, &opts)?;

            stats.files += 1;
            stats.ids += extracted.ids;
            stats.rows += extracted.rows;
        }
        Ok(stats)
    }
}
