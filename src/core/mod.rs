//! Core business logic module
//!
//! This module contains the ledger components:
//! - `ledger` - The session-gated ledger aggregate and its critical section
//! - `account_book` - Account balances and fund movements
//! - `session_table` - Active session tracking
//! - `dispatcher` - Command routing and status mapping for the transport layer
//! - `batch_processor` - Concurrent replay of command batches

pub mod account_book;
pub mod batch_processor;
pub mod dispatcher;
pub mod ledger;
pub mod session_table;

pub use account_book::AccountBook;
pub use batch_processor::BatchProcessor;
pub use dispatcher::Dispatcher;
pub use ledger::{parse_amount, validate_amount, Ledger};
pub use session_table::SessionTable;
