//! Processing strategy module for command replay
//!
//! This module defines the Strategy pattern for complete replay pipelines,
//! encompassing both CSV parsing and command dispatch. This allows different
//! implementations (sequential, concurrent batch) to be selected at runtime.

use crate::cli::StrategyType;
use crate::core::Ledger;
use crate::io::{write_balances_csv, write_responses_csv};
use crate::types::{LedgerError, Response};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete replay pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Replay every command of `input_path` against `ledger`
    ///
    /// Returns one response per valid command. Malformed rows are logged and
    /// skipped; ledger rejections become non-200 responses.
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal problems: the input file cannot be
    /// opened, or the runtime cannot be started.
    fn process(&self, ledger: &Arc<Ledger>, input_path: &Path) -> Result<Vec<Response>, LedgerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

/// Counts reported at the end of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Commands that produced a response
    pub commands: usize,
    /// Commands answered with 200
    pub succeeded: usize,
    /// Commands answered with a 4xx status
    pub rejected: usize,
}

impl ReplaySummary {
    pub fn from_responses(responses: &[Response]) -> Self {
        let succeeded = responses.iter().filter(|r| r.status.is_success()).count();
        ReplaySummary {
            commands: responses.len(),
            succeeded,
            rejected: responses.len() - succeeded,
        }
    }
}

/// Run a full replay and write its outputs
///
/// Final balances go to `balances`; when `responses` is given, the per-command
/// responses are written there sorted by sequence number.
pub fn replay(
    strategy: &dyn ProcessingStrategy,
    ledger: &Arc<Ledger>,
    input_path: &Path,
    balances: &mut dyn Write,
    responses: Option<&mut dyn Write>,
) -> Result<ReplaySummary, LedgerError> {
    let results = strategy.process(ledger, input_path)?;
    let summary = ReplaySummary::from_responses(&results);

    write_balances_csv(&ledger.snapshot(), balances)?;
    if let Some(output) = responses {
        write_responses_csv(&results, output)?;
    }

    info!(
        commands = summary.commands,
        succeeded = summary.succeeded,
        rejected = summary.rejected,
        total_balance = %ledger.total_balance(),
        "replay finished"
    );

    Ok(summary)
}
