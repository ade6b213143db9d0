//! Expand tabs to spaces in C++ sources, in place.
//!
//! Every `.h` and `.cpp` file under the given roots is rewritten so each tab
//! becomes the spaces needed to reach the next 4-column stop.

mod config;
mod core;
mod error;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::RunConfig;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Expand tabs in .h/.cpp files in place")]
struct Cli {
    /// Root directories to scan (defaults to `y`, `yave` and `editor`).
    roots: Vec<PathBuf>,

    /// Key-value config file with a `roots = a, b, c` line.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every visited file (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over `--verbose`.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::resolve(cli.roots, cli.config.as_deref())?;
    tracing::debug!(roots = ?config.roots, "resolved roots");

    let report = core::process::process_files(&config.roots)
        .context("tab expansion aborted; files already rewritten keep their changes")?;

    tracing::info!(
        "done: {} rewritten, {} skipped, {} visited",
        report.rewritten,
        report.skipped,
        report.visited
    );
    Ok(())
}
