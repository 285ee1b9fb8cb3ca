//! Command-line interface for the replayer
//!
//! Flags select the input, the replay strategy and its concurrency, the seed
//! roster, the optional responses file and the log format.

mod args;

pub use args::{CliArgs, StrategyType};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints a message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
