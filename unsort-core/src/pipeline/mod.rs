//! End-to-end collect, shuffle and emit pipelines.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::{collect_async, unsort_async};
pub use sync::unsort;
