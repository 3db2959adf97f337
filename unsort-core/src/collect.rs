//! Line collection: turning a byte stream into a [`RecordSequence`].

use std::io::{BufRead, BufReader, Read};

use crate::config::{CARRIAGE_RETURN, DEFAULT_INPUT_BUFFER, LINE_DELIMITER};
use crate::error::{Error, Result};
use crate::record::RecordSequence;

/// Reads `reader` to end-of-stream and returns one record per line.
///
/// Lines are split on `\n`. The delimiter is dropped, as is a single `\r`
/// right before it, so CRLF and LF input produce the same records. A final
/// line without a delimiter still counts; a trailing delimiter does not
/// start an extra empty line.
///
/// # Parameters
///
/// * `reader` - Input source implementing [`Read`]
///
/// # Returns
///
/// The records in input order. Empty input yields an empty sequence.
///
/// # Errors
///
/// Returns [`Error::Read`] if the reader fails before end-of-stream. The
/// records gathered so far are discarded.
pub fn collect<R: Read>(reader: R) -> Result<RecordSequence> {
    let mut reader = BufReader::with_capacity(DEFAULT_INPUT_BUFFER, reader);
    let mut records = RecordSequence::new();

    loop {
        let mut line = Vec::new();
        let read = reader
            .read_until(LINE_DELIMITER, &mut line)
            .map_err(|source| Error::Read {
                records: records.len(),
                source,
            })?;
        if read == 0 {
            break;
        }

        strip_line_ending(&mut line);
        records.push(line);
    }

    tracing::debug!(
        records = records.len(),
        bytes = records.total_bytes(),
        "collected input lines"
    );

    Ok(records)
}

/// Removes the trailing `\n` and then one trailing `\r`, if present.
pub(crate) fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&LINE_DELIMITER) {
        line.pop();
    }
    if line.last() == Some(&CARRIAGE_RETURN) {
        line.pop();
    }
}
