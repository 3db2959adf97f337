//! Run orchestration for the unsort CLI.

use std::io;

use unsort_core::{collect, shuffle_and_emit, RunSummary, Seed};

use crate::config::{CliConfig, SeedSource};
use crate::error::{InvocationError, Result};
use crate::io::{open_input, open_output};

/// Returns the seed a run will use.
///
/// A clock source is sampled on every call.
pub fn resolve_seed(source: &SeedSource) -> Seed {
    match source {
        SeedSource::Clock => Seed::from_clock(),
        SeedSource::Fixed(seed) => *seed,
    }
}

/// Shuffles the lines of `config.input` into `config.output`.
///
/// The workflow is:
///
/// 1. Resolves the seed
/// 2. Opens the input and collects every line, then closes it
/// 3. Opens (creates or truncates) the output
/// 4. Permutes the lines and writes them out, then closes the output
///
/// The output is only opened once the input has been read completely, so
/// the same path may be used for both to shuffle a file in place.
///
/// # Parameters
///
/// * `config` - Paths, seed selection and verbosity for the run
///
/// # Returns
///
/// Returns the [`RunSummary`], including the seed actually used.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The input cannot be opened or fails before end-of-stream
/// - The output cannot be created
/// - A write or the final flush fails
pub fn process(config: &CliConfig) -> Result<RunSummary> {
    let seed = resolve_seed(&config.seed);
    tracing::info!(%seed, input = %config.input.display(), "starting shuffle");

    let mut records = {
        let input = open_input(&config.input)?;
        collect(input)?
    };
    let bytes_read = records.total_bytes();

    let output = open_output(&config.output)?;
    let emitted = shuffle_and_emit(&mut records, seed, output)?;

    let summary = RunSummary::new(seed, bytes_read, emitted);
    tracing::debug!(
        records = summary.records,
        bytes_read = summary.bytes_read,
        bytes_written = summary.bytes_written,
        output = %config.output.display(),
        "finished shuffle"
    );

    if config.verbose {
        eprintln!(
            "Shuffled {} lines ({} bytes) with seed {}",
            summary.records, summary.bytes_written, summary.seed
        );
    }

    Ok(summary)
}

/// Runs [`process`] and attaches program and input context to any failure.
///
/// # Parameters
///
/// * `config` - CLI configuration for the run
/// * `program` - Program name to include in error messages (e.g. "unsort")
///
/// # Returns
///
/// Returns the [`RunSummary`] of the completed run.
///
/// # Errors
///
/// Returns an [`io::Error`] wrapping an [`InvocationError`]; its kind is the
/// kind of the underlying I/O failure.
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<RunSummary> {
    process(config).map_err(|source| {
        let kind = source.kind();
        io::Error::new(
            kind,
            InvocationError {
                program: program.to_string(),
                file: config.input_name(),
                source,
            },
        )
    })
}
