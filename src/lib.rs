//! Session Ledger Library
//! # Overview
//!
//! This library provides a minimal ledger of named accounts whose balances can
//! only be moved by an account holding an active session, plus a CSV command
//! replayer that drives it sequentially or concurrently.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Roster, CommandRecord, Response, errors)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - The ledger aggregate and its single critical section
//!   - [`core::account_book`] - Account balances and fund movements
//!   - [`core::session_table`] - Active session tracking
//!   - [`core::dispatcher`] - Command routing and HTTP-style status mapping
//!   - [`core::batch_processor`] - Concurrent replay of command batches
//! - [`io`] - CSV command, roster and output handling
//! - [`strategy`] - Sequential and concurrent replay pipelines
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **authenticate**: open a session for a known account (idempotent)
//! - **transfer**: move a positive amount out of an account with an active
//!   session into another account, atomically
//! - **end_session**: close an active session
//!
//! # Invariants
//!
//! - The sum of all balances never changes
//! - No balance ever goes negative
//! - Only an account with an active session is ever debited
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use session_ledger::{Ledger, LedgerError};
//!
//! let ledger = Ledger::default();
//! ledger.authenticate("alice").unwrap();
//! ledger.transfer("alice", "bob", Decimal::new(200, 0)).unwrap();
//! assert_eq!(ledger.balance("alice"), Some(Decimal::new(800, 0)));
//!
//! ledger.end_session("alice").unwrap();
//! assert!(matches!(
//!     ledger.transfer("alice", "bob", Decimal::new(10, 0)),
//!     Err(LedgerError::NotAuthenticated { .. })
//! ));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{Dispatcher, Ledger};
pub use io::{write_balances_csv, write_responses_csv};
pub use types::{
    Account, AccountName, CommandRecord, CredentialCheck, LedgerError, Operation, Response,
    Roster, SessionInfo, Status,
};
