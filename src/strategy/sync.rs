//! Synchronous processing strategy
//!
//! This module provides a sequential implementation of the ProcessingStrategy
//! trait. It streams commands from the SyncReader into the Dispatcher one at a
//! time, so responses are fully deterministic for a given input and roster.

use crate::core::{Dispatcher, Ledger};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{LedgerError, Response};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Sequential replay strategy
///
/// # Examples
///
/// ```no_run
/// use session_ledger::core::Ledger;
/// use session_ledger::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::sync::Arc;
///
/// let ledger = Arc::new(Ledger::default());
/// let responses = SyncProcessingStrategy
///     .process(&ledger, Path::new("commands.csv"))
///     .expect("Replay failed");
/// println!("{} commands answered", responses.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, ledger: &Arc<Ledger>, input_path: &Path) -> Result<Vec<Response>, LedgerError> {
        let reader = SyncReader::new(input_path)?;
        let dispatcher = Dispatcher::new(ledger);

        let mut responses = Vec::new();
        for result in reader {
            match result {
                Ok(command) => responses.push(dispatcher.dispatch(&command)),
                Err(e) => warn!(error = %e, "skipping invalid command"),
            }
        }

        Ok(responses)
    }
}
