//! In-memory representation of collected lines.

use std::fmt;

/// One input line with its delimiter removed.
///
/// The bytes are kept exactly as read; no encoding is assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record(Vec<u8>);

impl Record {
    /// Creates a record from raw line bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the line bytes without the delimiter.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the line in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is a blank line.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the record, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl From<Vec<u8>> for Record {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Record {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<String> for Record {
    fn from(line: String) -> Self {
        Self(line.into_bytes())
    }
}

impl From<&str> for Record {
    fn from(line: &str) -> Self {
        Self(line.as_bytes().to_vec())
    }
}

/// Ordered, growable collection of every record in one run.
///
/// Built one record per input line, permuted in place, then emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSequence {
    records: Vec<Record>,
}

impl RecordSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record at the end of the sequence.
    pub fn push(&mut self, record: impl Into<Record>) {
        self.records.push(record.into());
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sequence holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterates over the records in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Borrows the records as a slice.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Mutable view used for in-place permutation.
    ///
    /// Only positions can change through this view in the shuffle engine;
    /// records themselves are never edited.
    pub fn as_mut_slice(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Sum of all record lengths, delimiters excluded.
    pub fn total_bytes(&self) -> u64 {
        self.records.iter().map(|r| r.len() as u64).sum()
    }

    /// Consumes the sequence, returning the records in their current order.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for RecordSequence {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<R: Into<Record>> FromIterator<R> for RecordSequence {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for RecordSequence {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSequence {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
