//! mcbackport - converts conditional item-model definitions into override models
//! and CIT property files for older clients.

mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use config::BackportConfig;
use mcbackport_pipeline::{BackportOptions, Backporter};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise INFO, or DEBUG with --verbose.
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    info!("Starting mcbackport v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => BackportConfig::load_from_path(path),
        None => BackportConfig::load(),
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| cli::derive_output_dir(&args.input, &config));

    let options = BackportOptions {
        input: args.input,
        output,
        clear_output: config.clear_output && !args.no_clean,
        attribution: config.attribution,
    };
    info!(
        "Backporting {} into {}",
        options.input.display(),
        options.output.display()
    );

    let summary = Backporter::new(options).run()?;
    info!(
        "Done: {} converted, {} skipped, {} failed",
        summary.converted, summary.skipped, summary.failed
    );
    Ok(())
}
