//! yoga - index the words of a document
//!
//! yoga provides:
//! - A positional word index (word -> token positions) as JSON
//! - Word counts with optional count bounds and frequency sorting
//! - Counting from a previously saved index

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod flows;

/// Build the stderr subscriber. An explicit filter directive wins over
/// the quiet/verbose switches.
fn init_tracing(log: Option<&str>, quiet: bool, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = log
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.log.as_deref(), cli.quiet, cli.verbose);
    cli::run(cli)
}
