//! Shared functionality behind the `unsort` command-line tool.
//!
//! Turns a [`CliConfig`] into a shuffle run: acquires the input and output
//! handles, resolves the seed and hands the streams to `unsort-core`.

pub mod config;
pub mod error;
pub mod io;
pub mod process;


pub use config::{CliConfig, SeedSource, DEFAULT_BUFFER_SIZE, STDIO_PATH};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use io::{is_stdio, open_input, open_output};
pub use process::{process, resolve_seed, run_cli};
