//! Asynchronous collect-shuffle-emit pipeline.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::collect::strip_line_ending;
use crate::config::{EmitSummary, RunSummary, DEFAULT_INPUT_BUFFER, LINE_DELIMITER};
use crate::error::{Error, Result};
use crate::record::RecordSequence;
use crate::rng::Seed;
use crate::shuffle::ShuffleEngine;

/// Reads `reader` to end-of-stream and returns one record per line.
///
/// Splits lines exactly like [`collect`](crate::collect::collect).
///
/// # Errors
///
/// Returns [`Error::Read`] if the reader fails before end-of-stream.
pub async fn collect_async<R>(reader: R) -> Result<RecordSequence>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::with_capacity(DEFAULT_INPUT_BUFFER, reader);
    let mut records = RecordSequence::new();

    loop {
        let mut line = Vec::new();
        let read = reader
            .read_until(LINE_DELIMITER, &mut line)
            .await
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

/// Writes every record followed by the line delimiter, then flushes.
async fn write_records_async<W>(records: &RecordSequence, writer: &mut W) -> Result<EmitSummary>
where
    W: AsyncWrite + Unpin,
{
    let mut bytes_written = 0u64;

    for (written, record) in records.iter().enumerate() {
        let result = match writer.write_all(record.as_bytes()).await {
            Ok(()) => writer.write_all(&[LINE_DELIMITER]).await,
            Err(err) => Err(err),
        };
        result.map_err(|source| Error::Write {
            records: written,
            source,
        })?;
        bytes_written += record.len() as u64 + 1;
    }

    writer.flush().await.map_err(|source| Error::Write {
        records: records.len(),
        source,
    })?;

    Ok(EmitSummary::new(records.len(), bytes_written))
}

/// Reads every line from `reader`, shuffles them with `seed` and writes the
/// result to `writer`.
///
/// Produces exactly the same bytes as [`unsort`](super::unsort) for the same
/// input and seed.
///
/// # Parameters
///
/// * `reader` - Input source implementing [`AsyncRead`] + [`Unpin`] traits
/// * `writer` - Output destination implementing [`AsyncWrite`] + [`Unpin`] traits
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
/// - The reader fails before end-of-stream; nothing is written in that case
/// - The writer rejects a write or flush
pub async fn unsort_async<R, W>(reader: R, mut writer: W, seed: Seed) -> Result<RunSummary>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut records = collect_async(reader).await?;
    let bytes_read = records.total_bytes();

    let mut engine = ShuffleEngine::new(seed);
    engine.permute(&mut records)?;
    let emitted = write_records_async(&records, &mut writer).await?;

    tracing::info!(
        %seed,
        records = emitted.records,
        bytes_read,
        bytes_written = emitted.bytes_written,
        "shuffled lines"
    );

    Ok(RunSummary::new(seed, bytes_read, emitted))
}
