//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types
//! - `session`: Session identity returned by authenticate
//! - `roster`: Validated seed roster
//! - `command`: Replayable transport commands
//! - `response`: Transport-level responses and status codes
//! - `error`: Error types for the ledger

pub mod account;
pub mod command;
pub mod error;
pub mod response;
pub mod roster;
pub mod session;

pub use account::{Account, AccountName};
pub use command::{CommandRecord, CommandSeq, Operation};
pub use error::LedgerError;
pub use response::{Response, Status};
pub use roster::Roster;
pub use session::{CredentialCheck, SessionInfo};
