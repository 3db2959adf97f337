//! Error types and result handling for collecting and shuffling records.

use std::fmt;
use std::io;

use crate::shuffle::Phase;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a collect, permute or emit step can fail.
#[derive(Debug)]
pub enum Error {
    /// The input stream failed before end-of-stream was reached.
    Read {
        /// Number of records fully collected before the failure
        records: usize,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The output stream rejected a write or a flush.
    Write {
        /// Number of records fully written before the failure
        records: usize,
        /// Underlying I/O error
        source: io::Error,
    },

    /// An index source returned a position outside `[0, index]`.
    IndexOutOfRange {
        /// Position being filled by the permutation pass
        index: usize,
        /// Value returned by the index source
        drawn: usize,
    },

    /// An engine operation was called in the wrong phase.
    InvalidPhase {
        /// Phase the operation requires
        expected: Phase,
        /// Phase the engine was actually in
        actual: Phase,
    },
}

impl Error {
    /// Returns the underlying I/O error for read and write failures.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            Error::IndexOutOfRange { .. } | Error::InvalidPhase { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read { records, source } => {
                write!(f, "read failed after {records} lines: {source}")
            }
            Error::Write { records, source } => {
                write!(f, "write failed after {records} lines: {source}")
            }
            Error::IndexOutOfRange { index, drawn } => write!(
                f,
                "index source drew {drawn} for position {index} (must be at most {index})",
            ),
            Error::InvalidPhase { expected, actual } => {
                write!(f, "shuffle engine is {actual}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
