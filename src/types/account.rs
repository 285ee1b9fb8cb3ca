//! Account-related types for the session ledger
//!
//! This module defines the Account structure held by the ledger's account book.

use rust_decimal::Decimal;

/// Account identifier
///
/// Accounts are addressed by their unique name (e.g. `alice`).
pub type AccountName = String;

/// A named holder of a balance
///
/// Accounts are created once from the roster when the ledger is built
/// and are never removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique account name
    pub name: AccountName,

    /// Current balance
    ///
    /// Exact decimal, never negative. Only changed by a completed transfer.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with the given seed balance
    pub fn new(name: impl Into<AccountName>, balance: Decimal) -> Self {
        Account {
            name: name.into(),
            balance,
        }
    }
}
