use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::BackportConfig;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Backport conditional item models to override models and CIT properties",
    long_about = None
)]
pub struct Args {
    /// Unpacked source resource pack
    pub input: PathBuf,

    /// Output directory (derived from the input folder name if omitted)
    pub output: Option<PathBuf>,

    /// Log every execution path and target
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file (defaults to ./backport.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep existing files in the output directory
    #[arg(long)]
    pub no_clean: bool,
}

/// Sibling of `input` named `<prefix><sanitized folder name>`.
pub fn derive_output_dir(input: &Path, config: &BackportConfig) -> PathBuf {
    let folder = input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = format!(
        "{}{}",
        config.output_prefix,
        sanitize_pack_name(&folder, config.max_output_name_len)
    );
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Strip `§x` formatting codes, lowercase, keep `[a-z0-9_]`, truncate.
pub fn sanitize_pack_name(name: &str, max_len: usize) -> String {
    let mut out = String::new();
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c == '§' {
            chars.next();
            continue;
        }
        for lower in c.to_lowercase() {
            if lower.is_ascii_alphanumeric() || lower == '_' {
                out.push(lower);
            }
        }
    }
    out.truncate(max_len);
    if out.is_empty() {
        out.push_str("pack");
    }
    out
}
