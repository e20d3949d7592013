//! File generation: materialize output targets on disk.

use std::fs;
use std::path::{Path, PathBuf};

use mcbackport_core::{OutputTarget, TargetContent, TargetKind};
use tracing::{debug, warn};

use crate::PipelineError;

/// Counts of what one generation pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Files serialized from content.
    pub written: usize,
    /// Files copied from the source pack.
    pub copied: usize,
    /// Optional or already-present copies that were skipped.
    pub skipped: usize,
}

/// Writes targets into an output pack, copying verbatim files from a source pack.
#[derive(Debug, Clone)]
pub struct FileGenerator {
    source_root: PathBuf,
    output_root: PathBuf,
}

impl FileGenerator {
    /// Generator copying from `source_root` and writing under `output_root`.
    pub fn new(source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Generate every target, lowest priority first.
    ///
    /// The sort is stable, so targets of equal priority keep mapper order. A later write to the
    /// same file wins.
    pub fn generate_all_files(
        &self,
        mut targets: Vec<OutputTarget>,
    ) -> Result<GenerationStats, PipelineError> {
        targets.sort_by_key(|target| target.priority);

        let mut stats = GenerationStats::default();
        for target in &targets {
            self.generate(target, &mut stats)?;
        }
        Ok(stats)
    }

    fn generate(
        &self,
        target: &OutputTarget,
        stats: &mut GenerationStats,
    ) -> Result<(), PipelineError> {
        let dest = self.output_root.join(&target.file);
        match target.kind {
            TargetKind::ModelWithOverrides | TargetKind::PropertyFile => {
                let rendered = match &target.content {
                    Some(TargetContent::Model(model)) => serde_json::to_string_pretty(model)?,
                    Some(TargetContent::Properties(props)) => props.render(),
                    None => return Err(PipelineError::MissingContent(target.file.clone())),
                };
                write_file(&dest, rendered.as_bytes())?;
                debug!("wrote {}", target.file);
                stats.written += 1;
            }
            TargetKind::Enhanced3dModelCopy => {
                let source = self.source_root.join(&target.file);
                if !source.is_file() {
                    warn!("skipping enhanced model {}: not in source pack", target.file);
                    stats.skipped += 1;
                } else if dest.is_file() {
                    stats.skipped += 1;
                } else {
                    copy_file(&source, &dest)?;
                    stats.copied += 1;
                }
            }
            TargetKind::Preserved3dModelCopy => {
                let source = self.source_root.join(strip_3d_suffix(&target.file));
                if !source.is_file() {
                    return Err(PipelineError::MissingSource(source));
                }
                copy_file(&source, &dest)?;
                debug!("preserved {} as {}", source.display(), target.file);
                stats.copied += 1;
            }
            TargetKind::PlainTextureCopy => {
                let source = self.source_root.join(&target.file);
                if !source.is_file() {
                    return Err(PipelineError::MissingSource(source));
                }
                if dest.is_file() {
                    stats.skipped += 1;
                } else {
                    copy_file(&source, &dest)?;
                    stats.copied += 1;
                }
            }
        }
        Ok(())
    }
}

/// `models/item/foo_3d.json` → `models/item/foo.json`.
fn strip_3d_suffix(file: &str) -> String {
    let (stem, ext) = match file.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file, None),
    };
    let stem = stem.strip_suffix("_3d").unwrap_or(stem);
    match ext {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}

fn ensure_parent(path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| PipelineError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), PipelineError> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<(), PipelineError> {
    ensure_parent(to)?;
    fs::copy(from, to).map_err(|source| PipelineError::Io {
        path: to.to_path_buf(),
        source,
    })?;
    Ok(())
}
