//! Batch processing with originator-based partitioning
//!
//! This module provides the `BatchProcessor` struct, which replays a batch of
//! commands concurrently while keeping the commands of each originating
//! account in their original order.
//!
//! # Design
//!
//! A command's originator is the account whose session it acts on: the
//! `username` of a login or logout, the `from` of a payment. Partitions of
//! different originators run as separate tokio tasks against one shared
//! ledger. The ledger's lock serializes their effects; only the interleaving
//! between originators is left to the scheduler. A payment that relies on a
//! credit from another originator in the same batch may therefore observe the
//! balance before or after that credit.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── Arc<Ledger>  (shared, internally locked)
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::dispatcher::Dispatcher;
use crate::core::ledger::Ledger;
use crate::types::{CommandRecord, Response};
use tracing::error;

/// Concurrent replay of command batches
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    ledger: Arc<Ledger>,
}

impl BatchProcessor {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    /// Partition a batch by originating account
    ///
    /// # Guarantees
    ///
    /// - Each command appears in exactly one partition
    /// - Commands within a partition keep their original order
    pub fn partition_by_originator(
        &self,
        batch: Vec<CommandRecord>,
    ) -> HashMap<String, Vec<CommandRecord>> {
        let mut partitions: HashMap<String, Vec<CommandRecord>> = HashMap::new();

        for command in batch {
            partitions
                .entry(command.originator().to_string())
                .or_default()
                .push(command);
        }

        partitions
    }

    /// Replay one originator's commands in order
    pub fn process_partition(&self, commands: Vec<CommandRecord>) -> Vec<Response> {
        let dispatcher = Dispatcher::new(&self.ledger);
        commands
            .iter()
            .map(|command| dispatcher.dispatch(command))
            .collect()
    }

    /// Replay a batch, one tokio task per originator
    ///
    /// Waits for every task before returning. Responses are returned in
    /// completion order; callers sort by sequence number when needed.
    pub async fn process_batch(&self, batch: Vec<CommandRecord>) -> Vec<Response> {
        let partitions = self.partition_by_originator(batch);

        let mut tasks = Vec::with_capacity(partitions.len());
        for (_originator, commands) in partitions {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move { processor.process_partition(commands) }));
        }

        let mut responses = Vec::new();
        for task in tasks {
            match task.await {
                Ok(partition_responses) => responses.extend(partition_responses),
                Err(e) => error!(error = ?e, "replay task panicked"),
            }
        }

        responses
    }
}
