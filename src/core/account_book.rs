//! Account book
//!
//! This module provides the `AccountBook` struct which holds the fixed set of
//! accounts and applies balance movements between them.
//!
//! The AccountBook is responsible for:
//! - Building the account map from a validated roster
//! - Existence and balance lookups
//! - Moving funds between two accounts with checked arithmetic
//! - Providing sorted account listings for output
//!
//! The book has no locking of its own. It is only ever reached through the
//! ledger's critical section.

use crate::types::{Account, LedgerError, Roster};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Fixed set of named accounts
#[derive(Debug, Default)]
pub struct AccountBook {
    /// Map of account names to account states
    accounts: HashMap<String, Account>,
}

impl AccountBook {
    /// Create an account book from a validated roster
    ///
    /// The roster guarantees unique names and non-negative balances.
    pub fn from_roster(roster: Roster) -> Self {
        let accounts = roster
            .into_iter()
            .map(|account| (account.name.clone(), account))
            .collect();

        AccountBook { accounts }
    }

    /// Check whether an account with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.accounts.contains_key(name)
    }

    /// Current balance of an account, if it exists
    pub fn balance(&self, name: &str) -> Option<Decimal> {
        self.accounts.get(name).map(|account| account.balance)
    }

    /// Get all accounts sorted by name
    ///
    /// Sorting gives deterministic output for CSV generation.
    pub fn all_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        accounts
    }

    /// Sum of all balances
    pub fn total(&self) -> Decimal {
        self.accounts.values().map(|account| account.balance).sum()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Move `amount` from one account to another
    ///
    /// Both new balances are computed before either is written, so a failure
    /// leaves both accounts untouched. Moving funds from an account to itself
    /// still requires the balance to cover the amount and has no net effect.
    ///
    /// # Arguments
    ///
    /// * `from` - The account to debit
    /// * `to` - The account to credit
    /// * `amount` - The amount to move (callers pass a positive amount)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either account does not exist
    /// - The debited balance is lower than the amount
    /// - Crediting the amount would overflow the credited balance
    /// - Either new balance cannot hold the exact result (`InvalidAmount`)
    pub fn move_funds(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
        let from_balance = self
            .balance(from)
            .ok_or_else(|| LedgerError::unknown_account(from))?;
        let to_balance = self
            .balance(to)
            .ok_or_else(|| LedgerError::unknown_account(to))?;

        if from_balance < amount {
            return Err(LedgerError::insufficient_funds(from, from_balance, amount));
        }

        if from == to {
            return Ok(());
        }

        let new_from = from_balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::insufficient_funds(from, from_balance, amount))?;
        let new_to = to_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::balance_overflow(to))?;

        // Decimal rounds past 28 significant digits; both sides must move by
        // exactly `amount` or nothing moves.
        let exact = from_balance.checked_sub(new_from) == Some(amount)
            && new_to.checked_sub(to_balance) == Some(amount);
        if !exact {
            return Err(LedgerError::invalid_amount(amount));
        }

        if let Some(account) = self.accounts.get_mut(from) {
            account.balance = new_from;
        }
        if let Some(account) = self.accounts.get_mut(to) {
            account.balance = new_to;
        }

        Ok(())
    }
}
