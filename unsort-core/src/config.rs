//! Shared constants and summary types for shuffle runs.

use crate::rng::Seed;

/// Byte that terminates every emitted record and splits the input into records.
pub const LINE_DELIMITER: u8 = b'\n';

/// Carriage return dropped from the end of a CRLF-terminated line.
pub(crate) const CARRIAGE_RETURN: u8 = b'\r';

/// Capacity of the buffered reader used by the collector.
pub(crate) const DEFAULT_INPUT_BUFFER: usize = 64 * 1024;

/// Statistics about a completed emission pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    /// Number of records written, each followed by a delimiter.
    pub records: usize,

    /// Total number of bytes written, delimiters included.
    pub bytes_written: u64,
}

impl EmitSummary {
    pub(crate) const fn new(records: usize, bytes_written: u64) -> Self {
        Self {
            records,
            bytes_written,
        }
    }
}

/// Statistical summary of a complete collect-shuffle-emit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Seed the generator was initialised with.
    ///
    /// Passing it back in reproduces the run exactly.
    pub seed: Seed,

    /// Number of records read and written.
    pub records: usize,

    /// Record payload bytes read from the input, delimiters excluded.
    pub bytes_read: u64,

    /// Total bytes written to the output, delimiters included.
    pub bytes_written: u64,
}

impl RunSummary {
    /// Creates a run summary from the seed, the collected payload size and
    /// the emission statistics.
    ///
    /// # Parameters
    ///
    /// * `seed` - Seed the generator was initialised with
    /// * `bytes_read` - Record payload bytes collected from the input
    /// * `emitted` - Summary returned by the emission pass
    ///
    /// # Returns
    ///
    /// A new [`RunSummary`] instance.
    pub const fn new(seed: Seed, bytes_read: u64, emitted: EmitSummary) -> Self {
        Self {
            seed,
            records: emitted.records,
            bytes_read,
            bytes_written: emitted.bytes_written,
        }
    }
}
