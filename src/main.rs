//! Session Ledger CLI
//!
//! Replays login, payment and logout commands from a CSV file against a
//! ledger seeded with a fixed roster, and prints the final balances.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > balances.csv
//! cargo run -- --roster roster.csv --account carol=250 commands.csv
//! cargo run -- --strategy async --batch-size 500 --max-concurrent 8 commands.csv
//! cargo run -- --responses responses.csv commands.csv
//! ```
//!
//! Logs are written to stderr; set `RUST_LOG=debug` for per-command detail.
//!
//! # Exit Codes
//!
//! - 0: Success (individual rejected commands do not count as failures)
//! - 1: Error (invalid roster, input file not found, output not writable, etc.)

use session_ledger::cli;
use session_ledger::core::Ledger;
use session_ledger::logging;
use session_ledger::strategy;
use session_ledger::LedgerError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    let args = cli::parse_args();
    logging::init(args.log_format);

    if let Err(e) = run(&args) {
        error!(error = %e, "replay failed");
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), LedgerError> {
    let roster = args.build_roster()?;
    info!(accounts = roster.len(), total = %roster.total(), "ledger seeded");
    let ledger = Arc::new(Ledger::new(roster));

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut responses = match &args.responses_file {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let stdout = std::io::stdout();
    let mut balances = stdout.lock();
    strategy::replay(
        strategy.as_ref(),
        &ledger,
        &args.input_file,
        &mut balances,
        responses.as_mut().map(|writer| writer as &mut dyn Write),
    )?;

    if let Some(writer) = responses.as_mut() {
        writer.flush()?;
    }

    Ok(())
}
