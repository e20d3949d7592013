//! Run orchestration.
//!
//! One run copies the base assets, attributes the pack metadata, then converts item files one
//! at a time. A failing item is logged and counted; it never aborts the run. Only run-level
//! failures (unreadable input, unwritable output) are returned as errors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use mcbackport_assets::{
    copy_base_assets, discover_item_files, item_from_file, rewrite_pack_metadata, FsPack,
    PACK_METADATA_FILE,
};
use tracing::{debug, error, info, warn};

use crate::extractor::extract_all_paths;
use crate::generator::{FileGenerator, GenerationStats};
use crate::mapper::TargetMapper;
use crate::PipelineError;

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct BackportOptions {
    /// Source pack directory.
    pub input: PathBuf,
    /// Output pack directory.
    pub output: PathBuf,
    /// Delete `output` before starting.
    pub clear_output: bool,
    /// Text appended to the pack description.
    pub attribution: String,
}

/// Result of converting one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Root is not a selector; nothing to backport.
    Skipped,
    /// Files were generated.
    Converted(GenerationStats),
}

/// Item counts for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Items that produced output.
    pub converted: usize,
    /// Passthrough items without conditional structure.
    pub skipped: usize,
    /// Items that failed and were left out.
    pub failed: usize,
}

/// Drives the per-item pipeline over a whole pack.
pub struct Backporter {
    options: BackportOptions,
    lookup: FsPack,
    generator: FileGenerator,
}

impl Backporter {
    /// Prepare a run. Nothing touches the filesystem until [`Backporter::run`].
    pub fn new(options: BackportOptions) -> Self {
        let lookup = FsPack::new(&options.input);
        let generator = FileGenerator::new(&options.input, &options.output);
        Self {
            options,
            lookup,
            generator,
        }
    }

    /// Execute the run.
    pub fn run(&self) -> Result<RunSummary> {
        let input = &self.options.input;
        let output = &self.options.output;
        if !input.is_dir() {
            bail!("Input path {} is not a directory", input.display());
        }

        if self.options.clear_output && output.exists() {
            fs::remove_dir_all(output)
                .with_context(|| format!("Failed to clear {}", output.display()))?;
        }

        let copied = copy_base_assets(input, output)
            .with_context(|| format!("Failed to copy base assets into {}", output.display()))?;
        info!("Copied {copied} base asset files");

        if rewrite_pack_metadata(&output.join(PACK_METADATA_FILE), &self.options.attribution)
            .context("Failed to rewrite pack metadata")?
        {
            debug!("Attributed pack description");
        }

        let items = discover_item_files(input)
            .with_context(|| format!("Failed to list items in {}", input.display()))?;
        info!("Backporting {} item definitions", items.len());

        let mut summary = RunSummary::default();
        for path in &items {
            let item_id = item_id_from_path(path);
            match self.backport_item(&item_id, path) {
                Ok(ItemOutcome::Converted(stats)) => {
                    info!(
                        item = %item_id,
                        written = stats.written,
                        copied = stats.copied,
                        "converted"
                    );
                    summary.converted += 1;
                }
                Ok(ItemOutcome::Skipped) => {
                    debug!(item = %item_id, "no conditional model, skipped");
                    summary.skipped += 1;
                }
                Err(err) => {
                    error!(item = %item_id, "failed to backport: {err}");
                    summary.failed += 1;
                }
            }
        }

        if summary.failed > 0 {
            warn!(
                failed = summary.failed,
                "some items were not backported; see errors above"
            );
        }
        info!(
            converted = summary.converted,
            skipped = summary.skipped,
            failed = summary.failed,
            "Backport finished"
        );
        Ok(summary)
    }

    /// Convert one item file: load, extract, map, generate.
    pub fn backport_item(&self, item_id: &str, path: &Path) -> Result<ItemOutcome, PipelineError> {
        let item = item_from_file(path)?;
        if !item.is_conditional() {
            return Ok(ItemOutcome::Skipped);
        }

        let paths = extract_all_paths(&item)?;
        for path in &paths {
            debug!(
                item = item_id,
                model = %path.target_model,
                priority = path.priority,
                fallback = path.is_fallback,
                contexts = ?path.conditions.display_context,
                "execution path"
            );
        }

        let targets = TargetMapper::new(&self.lookup).map_paths_to_targets(&paths, item_id);
        let stats = self.generator.generate_all_files(targets)?;
        Ok(ItemOutcome::Converted(stats))
    }
}

fn item_id_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
