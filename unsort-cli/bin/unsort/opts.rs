//! Command line argument parsing for the unsort utility.

use std::path::PathBuf;

use clap::Parser;

use unsort_cli::{CliConfig, SeedSource};
use unsort_core::Seed;

/// Reproducible line shuffling utility
///
/// Reads every line of the input into memory, shuffles them and writes the
/// result to the output.
#[derive(Debug, Parser)]
#[command(
    name = "unsort",
    version,
    about = "Shuffle the lines of a file",
    long_about = "unsort reads every line of FILE into memory, shuffles them \
                 with a seeded Fisher-Yates pass and writes them to the output. \
                 The same input and --seed always produce the same output. \
                 Use '-' to read stdin or write stdout."
)]
pub struct UnsortOpts {
    /// File to read lines from ('-' for stdin)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: PathBuf,

    /// File to write shuffled lines to, created or overwritten ('-' for stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: PathBuf,

    /// Fixed seed for reproducible output (decimal or 0x-prefixed hex)
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    seed: Option<Seed>,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (suppress warnings). Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl UnsortOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            seed: self.seed.map_or(SeedSource::Clock, SeedSource::Fixed),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }

    /// Default log filter for the selected verbosity, used when `RUST_LOG`
    /// is not set.
    pub fn log_directive(&self) -> &'static str {
        match (self.verbose, self.quiet) {
            (true, _) => "debug",
            (false, 0) => "warn",
            (false, 1) => "error",
            (false, _) => "off",
        }
    }
}
