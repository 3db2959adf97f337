//! Input and output acquisition for the unsort CLI.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::config::{DEFAULT_BUFFER_SIZE, STDIO_PATH};
use crate::error::{Error, Result};

/// Returns `true` if `path` is the `-` placeholder for stdin/stdout.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Opens an input reader for the given path, or stdin for `-`.
///
/// # Parameters
///
/// * `path` - Path to the input file, or `-` for stdin
///
/// # Returns
///
/// A buffered trait object implementing [`io::Read`].
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn io::Read>> {
    if is_stdio(path) {
        return Ok(Box::new(io::BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdin(),
        )));
    }

    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(io::BufReader::with_capacity(
        DEFAULT_BUFFER_SIZE,
        file,
    )))
}

/// Opens an output writer for the given path, or stdout for `-`.
///
/// An existing file is truncated; a missing one is created.
///
/// # Parameters
///
/// * `path` - Path to the output file, or `-` for stdout
///
/// # Returns
///
/// A buffered trait object implementing [`io::Write`].
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the file cannot be created, e.g. because
/// its directory does not exist or is not writable.
pub fn open_output(path: &Path) -> Result<Box<dyn io::Write>> {
    if is_stdio(path) {
        return Ok(Box::new(io::BufWriter::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdout(),
        )));
    }

    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(io::BufWriter::with_capacity(
        DEFAULT_BUFFER_SIZE,
        file,
    )))
}
