//! The shuffle engine: in-place permutation followed by emission.

use std::fmt;
use std::io::Write;

use crate::config::{EmitSummary, LINE_DELIMITER};
use crate::error::{Error, Result};
use crate::record::RecordSequence;
use crate::rng::{IndexSource, Seed, ShuffleRng};

/// Lifecycle of a [`ShuffleEngine`].
///
/// `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Generator seeded, nothing permuted yet.
    Initialized,
    /// Permutation pass in progress.
    Permuting,
    /// Records permuted and being written out.
    Emitting,
    /// Every record written and the sink flushed.
    Done,
    /// Generator misuse or an output failure stopped the run.
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Initialized => "initialized",
            Phase::Permuting => "permuting",
            Phase::Emitting => "emitting",
            Phase::Done => "done",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Permutes `items` in place with an ascending Fisher–Yates pass.
///
/// For each position `i` from the front, an index `j` in `[0, i]` is drawn
/// and the items at `i` and `j` are swapped. With uniform draws every
/// permutation is equally likely.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] if `source` draws past `i`. Swaps made
/// before that point are kept.
pub fn permute<T, S>(items: &mut [T], source: &mut S) -> Result<()>
where
    S: IndexSource + ?Sized,
{
    for index in 0..items.len() {
        let drawn = source.draw(index);
        if drawn > index {
            return Err(Error::IndexOutOfRange { index, drawn });
        }
        items.swap(index, drawn);
    }
    Ok(())
}

/// Writes every record followed by the line delimiter, then flushes.
///
/// Stops at the first failed write; nothing already written is undone.
pub(crate) fn write_records<W: Write>(
    records: &RecordSequence,
    writer: &mut W,
) -> Result<EmitSummary> {
    let mut bytes_written = 0u64;

    for (written, record) in records.iter().enumerate() {
        writer
            .write_all(record.as_bytes())
            .and_then(|()| writer.write_all(&[LINE_DELIMITER]))
            .map_err(|source| Error::Write {
                records: written,
                source,
            })?;
        bytes_written += record.len() as u64 + 1;
    }

    writer.flush().map_err(|source| Error::Write {
        records: records.len(),
        source,
    })?;

    Ok(EmitSummary::new(records.len(), bytes_written))
}

/// Seeded engine that permutes a [`RecordSequence`] and writes it out.
///
/// The engine walks `Initialized → Permuting → Emitting → Done`; any
/// failure moves it to `Failed`. Each operation checks the phase first, so
/// an engine cannot emit before permuting or run twice.
///
/// # Example
/// ```
/// use unsort_core::{Phase, RecordSequence, Seed, ShuffleEngine};
///
/// let mut records: RecordSequence = ["a", "b", "c"].into_iter().collect();
/// let mut engine = ShuffleEngine::new(Seed::new(1));
/// engine.permute(&mut records).unwrap();
///
/// let mut out = Vec::new();
/// engine.emit(&records, &mut out).unwrap();
/// assert_eq!(engine.phase(), Phase::Done);
/// assert_eq!(out.len(), 6);
/// ```
#[derive(Debug)]
pub struct ShuffleEngine<S = ShuffleRng> {
    source: S,
    seed: Option<Seed>,
    phase: Phase,
}

impl ShuffleEngine<ShuffleRng> {
    /// Creates an engine backed by [`ShuffleRng`] seeded with `seed`.
    pub fn new(seed: Seed) -> Self {
        Self {
            source: ShuffleRng::new(seed),
            seed: Some(seed),
            phase: Phase::Initialized,
        }
    }
}

impl<S: IndexSource> ShuffleEngine<S> {
    /// Creates an engine that draws indices from a caller-supplied source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            seed: None,
            phase: Phase::Initialized,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seed the engine was built from, if it was built from one.
    pub fn seed(&self) -> Option<Seed> {
        self.seed
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(Error::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Permutes `records` in place.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPhase`] unless the engine is `Initialized`
    /// - [`Error::IndexOutOfRange`] if the index source misbehaves
    pub fn permute(&mut self, records: &mut RecordSequence) -> Result<()> {
        self.expect_phase(Phase::Initialized)?;
        self.phase = Phase::Permuting;

        match permute(records.as_mut_slice(), &mut self.source) {
            Ok(()) => {
                tracing::debug!(records = records.len(), "permuted records");
                self.phase = Phase::Emitting;
                Ok(())
            }
            Err(err) => {
                self.phase = Phase::Failed;
                Err(err)
            }
        }
    }

    /// Writes the permuted records to `writer`, one per line.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPhase`] unless [`permute`](Self::permute) succeeded
    /// - [`Error::Write`] on the first failed write or flush; no further
    ///   records are written
    pub fn emit<W: Write>(
        &mut self,
        records: &RecordSequence,
        mut writer: W,
    ) -> Result<EmitSummary> {
        self.expect_phase(Phase::Emitting)?;

        match write_records(records, &mut writer) {
            Ok(summary) => {
                tracing::debug!(
                    records = summary.records,
                    bytes = summary.bytes_written,
                    "emitted records"
                );
                self.phase = Phase::Done;
                Ok(summary)
            }
            Err(err) => {
                self.phase = Phase::Failed;
                Err(err)
            }
        }
    }
}

/// Shuffles `records` with a generator seeded by `seed` and writes them out.
///
/// # Parameters
///
/// * `records` - Sequence to permute in place
/// * `seed` - Seed for the index generator
/// * `writer` - Output destination implementing [`Write`]
///
/// # Returns
///
/// An [`EmitSummary`] with the number of records and bytes written.
///
/// # Errors
///
/// Returns [`Error::Write`] if the writer fails. Output already written is
/// left in place.
pub fn shuffle_and_emit<W: Write>(
    records: &mut RecordSequence,
    seed: Seed,
    writer: W,
) -> Result<EmitSummary> {
    let mut engine = ShuffleEngine::new(seed);
    engine.permute(records)?;
    engine.emit(records, writer)
}
