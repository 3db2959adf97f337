//! Configuration types and constants for the unsort CLI.

use std::path::PathBuf;

use unsort_core::Seed;

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Path that stands for stdin as input and stdout as output.
pub const STDIO_PATH: &str = "-";

/// Where the seed for a run comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// Derive the seed from the wall clock when the run starts
    #[default]
    Clock,
    /// Use a fixed seed for reproducible output
    Fixed(Seed),
}

/// Configuration for a single unsort run
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// File to read lines from, or `-` for stdin
    pub input: PathBuf,
    /// File to write shuffled lines to, or `-` for stdout
    pub output: PathBuf,
    /// Seed selection
    pub seed: SeedSource,
    /// Verbose output
    pub verbose: bool,
    /// Quiet level (`-q` count); 2 or more suppresses error messages
    pub quiet: u8,
}

impl CliConfig {
    /// Creates a clock-seeded configuration for the given input and output.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            seed: SeedSource::Clock,
            verbose: false,
            quiet: 0,
        }
    }

    /// Pins the run to a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = SeedSource::Fixed(seed);
        self
    }

    /// Returns the input path for messages, or `None` when reading stdin.
    pub fn input_name(&self) -> Option<String> {
        if self.input.as_os_str() == STDIO_PATH {
            None
        } else {
            Some(self.input.display().to_string())
        }
    }
}
