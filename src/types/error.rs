//! Error types for the session ledger
//!
//! This module defines all error types that can occur while operating the ledger
//! or replaying commands against it.
//!
//! # Error Categories
//!
//! - **Rejections**: unknown account, missing session, invalid amount, insufficient
//!   funds, balance overflow. These are expected outcomes of a bad request; the
//!   ledger state is never changed when one is returned.
//! - **Roster Errors**: the seed roster is malformed (duplicate or empty name,
//!   negative balance).
//! - **File I/O and CSV Errors**: the command or roster file cannot be read, or the
//!   output cannot be written.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every variant carries enough context to produce a useful log line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The named account is not part of the roster
    #[error("Unknown account '{account}'")]
    UnknownAccount {
        /// The name that did not match any account
        account: String,
    },

    /// The account has no active session
    ///
    /// Returned by transfer (for the debited account) and by end_session.
    #[error("Account '{account}' has no active session")]
    NotAuthenticated {
        /// Account that was expected to be logged in
        account: String,
    },

    /// Amount is malformed, zero or negative
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The rejected amount as supplied by the caller
        amount: String,
    },

    /// The debited account cannot cover the transfer
    #[error("Insufficient funds for '{account}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Debited account
        account: String,
        /// Balance at the time of the check
        balance: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// Crediting the amount would exceed the representable balance range
    #[error("Balance overflow crediting '{account}'")]
    BalanceOverflow {
        /// Credited account
        account: String,
    },

    /// The seed roster is malformed
    #[error("Invalid roster: {message}")]
    InvalidRoster {
        /// Description of the problem
        message: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// For command files this is recoverable: the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an UnknownAccount error
    pub fn unknown_account(account: &str) -> Self {
        LedgerError::UnknownAccount {
            account: account.to_string(),
        }
    }

    /// Create a NotAuthenticated error
    pub fn not_authenticated(account: &str) -> Self {
        LedgerError::NotAuthenticated {
            account: account.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: impl ToString) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(account: &str) -> Self {
        LedgerError::BalanceOverflow {
            account: account.to_string(),
        }
    }

    /// Create an InvalidRoster error
    pub fn invalid_roster(message: impl Into<String>) -> Self {
        LedgerError::InvalidRoster {
            message: message.into(),
        }
    }

    /// Whether this error is a rejected request rather than an I/O or setup fault
    ///
    /// Rejections leave the ledger untouched and are answered, not propagated.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::UnknownAccount { .. }
                | LedgerError::NotAuthenticated { .. }
                | LedgerError::InvalidAmount { .. }
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::BalanceOverflow { .. }
        )
    }
}
