//! # unsort-core
//!
//! Reproducible in-memory shuffling of text lines.
//!
//! The crate reads every line of an input stream into a [`RecordSequence`],
//! permutes it in place with an ascending Fisher–Yates pass driven by a
//! seeded generator, and writes the permuted lines back out. The same input
//! and the same [`Seed`] always produce byte-identical output.
//!
//! ```
//! use unsort_core::{pipeline::unsort, Seed};
//!
//! let mut output = Vec::new();
//! let summary = unsort(&b"a\nb\nc\n"[..], &mut output, Seed::new(7)).unwrap();
//! assert_eq!(summary.records, 3);
//! assert_eq!(output.len(), 6);
//! ```

pub mod collect;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod rng;
pub mod shuffle;

pub use collect::collect;
pub use config::{EmitSummary, RunSummary, LINE_DELIMITER};
pub use error::{Error, Result};
pub use record::{Record, RecordSequence};
pub use rng::{IndexSource, Seed, ShuffleRng};
pub use shuffle::{permute, shuffle_and_emit, Phase, ShuffleEngine};
