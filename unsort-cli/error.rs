//! Error types for unsort CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A structured CLI error that preserves the underlying failure.
///
/// Carries the program name and the input file so stderr output reads
/// `unsort: <input>: <error>`, while `-qq` can still suppress it.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output.
    pub program: String,
    /// Input file path, or `None` for stdin.
    pub file: Option<String>,
    /// Underlying error produced by processing.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file.as_deref() {
            Some(file) => write!(f, "{}: {}: {}", self.program, file, self.source),
            None => write!(f, "{}: (stdin): {}", self.program, self.source),
        }
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Formats an error message for stderr, respecting `-qq`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"unsort"`).
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The I/O error returned by the CLI runner.
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise returns a formatted single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }

    let run_err = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>());

    if let Some(run_err) = run_err {
        return Some(run_err.to_string());
    }

    Some(format!("{program}: {err}"))
}

/// Main error type for unsort CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open input file
    #[error("cannot open input: {source}")]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create or truncate the output file
    #[error("{}: cannot create output: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input stream failed before end-of-stream
    #[error("read failed after {records} lines: {source}")]
    Read {
        /// Lines collected before the failure
        records: usize,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output stream rejected a write or flush
    #[error("write failed after {records} lines: {source}")]
    Write {
        /// Lines written before the failure
        records: usize,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Shuffle engine failure that is not an I/O fault
    #[error("shuffle failed: {0}")]
    Shuffle(#[source] unsort_core::Error),
}

/// Specialized `Result` type for unsort CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the [`io::ErrorKind`] that best describes this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::OpenInput { source, .. }
            | Error::CreateOutput { source, .. }
            | Error::Read { source, .. }
            | Error::Write { source, .. } => source.kind(),
            Error::Shuffle(_) => io::ErrorKind::Other,
        }
    }
}

impl From<unsort_core::Error> for Error {
    fn from(err: unsort_core::Error) -> Self {
        match err {
            unsort_core::Error::Read { records, source } => Error::Read { records, source },
            unsort_core::Error::Write { records, source } => Error::Write { records, source },
            other => Error::Shuffle(other),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        // Preserve the original error kind
        io::Error::new(err.kind(), err)
    }
}
