//! Reproducible line shuffling utility
//!
//! Reads every line of a file into memory and writes them back out in a
//! uniformly random order. A fixed `--seed` makes the order reproducible.

use std::process;

mod opts;

use opts::UnsortOpts;
use tracing_subscriber::EnvFilter;

use unsort_cli::{format_error_for_stderr, run_cli};

const PROGRAM_NAME: &str = "unsort";

/// Installs a stderr subscriber; `RUST_LOG` wins over the verbosity flags.
fn enable_tracing(default_directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> std::io::Result<()> {
    let opts = UnsortOpts::parse();
    enable_tracing(opts.log_directive());

    let config = opts.config();

    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.quiet, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }

    Ok(())
}
