#![warn(missing_docs)]
//! Conditional item-model backport pipeline.
//!
//! `item JSON → extract → ExecutionPath[] → map → OutputTarget[] → generate → files`.
//! Each stage is a pure function of its input apart from the read-only [`PackLookup`] used by
//! the mapper and the filesystem writes done by the generator.
//!
//! [`PackLookup`]: mcbackport_assets::PackLookup

mod coordinator;
mod extractor;
mod generator;
mod mapper;
mod overrides;

pub use coordinator::{BackportOptions, Backporter, ItemOutcome, RunSummary};
pub use extractor::{
    extract_all_paths, merge_conditions, parse_enchantment, Branch, ChainEntry,
    CONDITION_TRUE_PENALTY, DISPLAY_CONTEXT_WEIGHT, ENCHANTMENT_WEIGHT,
};
pub use generator::{FileGenerator, GenerationStats};
pub use mapper::{
    expand_fallback_contexts, group_paths_by_target, split_mixed_enchantment_paths, PathGroups,
    TargetMapper,
};
pub use overrides::{build_enchantment_overrides, build_regular_overrides, PredicateGroups};

use std::path::PathBuf;

use mcbackport_assets::AssetError;
use thiserror::Error;

/// Per-item failures. None of these abort a whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed model tree.
    #[error("invalid structure: {0}")]
    Structure(String),
    /// A source file an earlier step relied on is gone.
    #[error("missing required source file {}", .0.display())]
    MissingSource(PathBuf),
    /// A write target was produced without a payload.
    #[error("target {0} has no content to write")]
    MissingContent(String),
    /// Filesystem failure while generating output.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Serialization failure.
    #[error("failed to serialize model: {0}")]
    Json(#[from] serde_json::Error),
    /// Item definition could not be read or parsed.
    #[error(transparent)]
    Asset(#[from] AssetError),
}
