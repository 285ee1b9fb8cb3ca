//! Session-gated ledger
//!
//! This module provides the `Ledger` aggregate, which owns every account and
//! every session behind one exclusive lock.
//!
//! # Operations
//!
//! - [`Ledger::authenticate`] opens a session for a known account
//! - [`Ledger::transfer`] moves funds out of an account with an active session
//! - [`Ledger::end_session`] closes a session
//!
//! # Critical Section
//!
//! Each operation takes the lock once and holds it across its whole
//! check-then-act sequence. A transfer checks, in this order:
//!
//! 1. the debited account has an active session (`NotAuthenticated`)
//! 2. both accounts exist (`UnknownAccount`)
//! 3. the amount is a positive number (`InvalidAmount`)
//! 4. the debited balance covers the amount (`InsufficientFunds`)
//!
//! and only then moves the balances, all without releasing the lock. A failed
//! check returns before anything is written, so no partial effect is ever
//! observable. Nothing under the lock performs I/O, awaits, or calls back into
//! the ledger; log lines are emitted after the lock is released.

use crate::core::account_book::AccountBook;
use crate::core::session_table::SessionTable;
use crate::types::{Account, LedgerError, Roster, SessionInfo};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// State guarded by the ledger lock
///
/// Accounts and sessions are one unit of consistency: a transfer must see
/// both as of the same instant.
#[derive(Debug)]
struct LedgerState {
    accounts: AccountBook,
    sessions: SessionTable,
}

/// Owned aggregate of accounts and sessions
///
/// `Ledger` is `Send + Sync`; share it between callers as `Arc<Ledger>`.
#[derive(Debug)]
pub struct Ledger {
    state: Mutex<LedgerState>,
}

impl Ledger {
    /// Create a ledger seeded with the given roster
    ///
    /// Every account starts without a session.
    pub fn new(roster: Roster) -> Self {
        Ledger {
            state: Mutex::new(LedgerState {
                accounts: AccountBook::from_roster(roster),
                sessions: SessionTable::new(),
            }),
        }
    }

    /// Open a session for `account`
    ///
    /// Calling this on an account that is already logged in is not an error
    /// and leaves the session table unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the name is not in the roster.
    pub fn authenticate(&self, account: &str) -> Result<SessionInfo, LedgerError> {
        let newly_opened = {
            let mut state = self.state.lock();
            if !state.accounts.contains(account) {
                return Err(LedgerError::unknown_account(account));
            }
            state.sessions.open(account)
        };

        debug!(account, newly_opened, "session opened");
        Ok(SessionInfo::unverified(account))
    }

    /// Move `amount` from `from` to `to`
    ///
    /// # Errors
    ///
    /// Checked in this order, all under one lock acquisition:
    /// - `NotAuthenticated` if `from` has no active session
    /// - `UnknownAccount` if `from` or `to` is not in the roster
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `InsufficientFunds` if `from` cannot cover `amount`
    /// - `BalanceOverflow` if crediting `to` would overflow
    /// - `InvalidAmount` if either new balance would need rounding
    pub fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
        self.transfer_with(from, to, || validate_amount(amount))
    }

    /// Like [`Ledger::transfer`], with the amount given as decimal text
    ///
    /// The text is parsed at step 3 of the check sequence, so an
    /// unauthenticated caller sending a malformed amount still gets
    /// `NotAuthenticated`.
    pub fn transfer_raw(&self, from: &str, to: &str, amount: &str) -> Result<(), LedgerError> {
        self.transfer_with(from, to, || parse_amount(amount))
    }

    fn transfer_with<F>(&self, from: &str, to: &str, resolve_amount: F) -> Result<(), LedgerError>
    where
        F: FnOnce() -> Result<Decimal, LedgerError>,
    {
        let amount = {
            let mut state = self.state.lock();

            if !state.sessions.is_active(from) {
                return Err(LedgerError::not_authenticated(from));
            }
            for account in [from, to] {
                if !state.accounts.contains(account) {
                    return Err(LedgerError::unknown_account(account));
                }
            }
            let amount = resolve_amount()?;
            state.accounts.move_funds(from, to, amount)?;
            amount
        };

        debug!(from, to, %amount, "transfer applied");
        Ok(())
    }

    /// Close the session of `account`
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` if the account has no active session
    /// (including names that are not in the roster at all).
    pub fn end_session(&self, account: &str) -> Result<(), LedgerError> {
        let closed = self.state.lock().sessions.close(account);
        if !closed {
            return Err(LedgerError::not_authenticated(account));
        }

        debug!(account, "session closed");
        Ok(())
    }

    /// Current balance of an account
    pub fn balance(&self, account: &str) -> Option<Decimal> {
        self.state.lock().accounts.balance(account)
    }

    /// Whether the account currently has an active session
    pub fn is_authenticated(&self, account: &str) -> bool {
        self.state.lock().sessions.is_active(account)
    }

    /// Number of active sessions
    pub fn active_sessions(&self) -> usize {
        self.state.lock().sessions.len()
    }

    /// Consistent copy of every account, sorted by name
    pub fn snapshot(&self) -> Vec<Account> {
        self.state.lock().accounts.all_accounts()
    }

    /// Sum of all balances
    ///
    /// Constant across any sequence of transfers.
    pub fn total_balance(&self) -> Decimal {
        self.state.lock().accounts.total()
    }
}

impl Default for Ledger {
    /// Ledger seeded with the default roster (`alice` 1000, `bob` 500)
    fn default() -> Self {
        Self::new(Roster::default())
    }
}

/// Check that an amount can be transferred
///
/// Zero and negative amounts are rejected: a negative transfer would silently
/// credit the sender.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::invalid_amount(amount));
    }
    Ok(amount)
}

/// Parse decimal text into a transferable amount
///
/// Accepts plain (`"12.50"`) and scientific (`"1e3"`) notation with
/// surrounding whitespace. The result goes through [`validate_amount`].
pub fn parse_amount(text: &str) -> Result<Decimal, LedgerError> {
    let trimmed = text.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::invalid_amount(text))?;

    validate_amount(amount).map_err(|_| LedgerError::invalid_amount(text))
}
