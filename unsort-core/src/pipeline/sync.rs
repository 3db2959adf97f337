//! Synchronous collect-shuffle-emit pipeline.

use std::io::{Read, Write};

use crate::collect::collect;
use crate::config::RunSummary;
use crate::error::Result;
use crate::rng::Seed;
use crate::shuffle::shuffle_and_emit;

/// Reads every line from `reader`, shuffles them with `seed` and writes the
/// result to `writer`.
///
/// Nothing is written until the whole input has been read.
///
/// # Parameters
///
/// * `reader` - Input source implementing [`Read`] trait
/// * `writer` - Output destination implementing [`Write`] trait
/// * `seed` - Seed for the index generator
///
/// # Returns
///
/// Returns a [`RunSummary`] with the seed, the record count and the bytes
/// read and written.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The reader fails before end-of-stream ([`Error::Read`](crate::Error::Read));
///   nothing is written in that case
/// - The writer rejects a write or flush ([`Error::Write`](crate::Error::Write))
pub fn unsort<R, W>(reader: R, writer: W, seed: Seed) -> Result<RunSummary>
where
    R: Read,
    W: Write,
{
    let mut records = collect(reader)?;
    let bytes_read = records.total_bytes();
    let emitted = shuffle_and_emit(&mut records, seed, writer)?;

    tracing::info!(
        %seed,
        records = emitted.records,
        bytes_read,
        bytes_written = emitted.bytes_written,
        "shuffled lines"
    );

    Ok(RunSummary::new(seed, bytes_read, emitted))
}
