//! Seed roster for building a ledger
//!
//! The roster is the fixed list of accounts a ledger starts with. It is
//! validated once here so the ledger itself can assume unique names and
//! non-negative balances.

use super::account::{Account, AccountName};
use super::error::LedgerError;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Validated list of accounts and their seed balances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    accounts: Vec<Account>,
}

impl Roster {
    /// Build a roster from `(name, balance)` pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoster` if:
    /// - a name is empty (after trimming)
    /// - a name appears more than once
    /// - a balance is negative
    pub fn new<I, N>(entries: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (N, Decimal)>,
        N: Into<AccountName>,
    {
        let mut seen = HashSet::new();
        let mut accounts = Vec::new();

        for (name, balance) in entries {
            let name: AccountName = name.into();
            let name = name.trim().to_string();

            if name.is_empty() {
                return Err(LedgerError::invalid_roster("account name must not be empty"));
            }
            if balance < Decimal::ZERO {
                return Err(LedgerError::invalid_roster(format!(
                    "account '{}' has negative balance {}",
                    name, balance
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(LedgerError::invalid_roster(format!(
                    "duplicate account '{}'",
                    name
                )));
            }

            accounts.push(Account::new(name, balance));
        }

        Ok(Roster { accounts })
    }

    /// Apply `(name, balance)` overrides on top of this roster
    ///
    /// An override for an existing name replaces its balance; a new name is
    /// appended. Overrides go through the same validation as [`Roster::new`].
    pub fn with_overrides<I, N>(self, overrides: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (N, Decimal)>,
        N: Into<AccountName>,
    {
        let mut entries: Vec<(AccountName, Decimal)> = self
            .accounts
            .into_iter()
            .map(|account| (account.name, account.balance))
            .collect();

        for (name, balance) in overrides {
            let name: AccountName = name.into();
            let name = name.trim().to_string();
            match entries.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = balance,
                None => entries.push((name, balance)),
            }
        }

        Roster::new(entries)
    }

    /// Accounts in roster order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Sum of all seed balances
    pub fn total(&self) -> Decimal {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for Roster {
    /// The reference fixture: `alice` with 1000 and `bob` with 500
    fn default() -> Self {
        Roster {
            accounts: vec![
                Account::new("alice", Decimal::new(1000, 0)),
                Account::new("bob", Decimal::new(500, 0)),
            ],
        }
    }
}

impl IntoIterator for Roster {
    type Item = Account;
    type IntoIter = std::vec::IntoIter<Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_roster_is_alice_and_bob() {
        let roster = Roster::default();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.accounts()[0], Account::new("alice", Decimal::new(1000, 0)));
        assert_eq!(roster.accounts()[1], Account::new("bob", Decimal::new(500, 0)));
        assert_eq!(roster.total(), Decimal::new(1500, 0));
    }

    #[test]
    fn test_new_trims_names() {
        let roster = Roster::new([("  carol ", Decimal::new(10, 0))]).unwrap();
        assert_eq!(roster.accounts()[0].name, "carol");
    }

    #[test]
    fn test_zero_balance_is_allowed() {
        let roster = Roster::new([("dave", Decimal::ZERO)]).unwrap();
        assert_eq!(roster.accounts()[0].balance, Decimal::ZERO);
    }

    #[rstest]
    #[case::empty_name(vec![("", Decimal::ONE)])]
    #[case::blank_name(vec![("   ", Decimal::ONE)])]
    #[case::negative_balance(vec![("alice", Decimal::new(-1, 0))])]
    #[case::duplicate(vec![("alice", Decimal::ONE), ("alice", Decimal::TWO)])]
    fn test_new_rejects_invalid_entries(#[case] entries: Vec<(&str, Decimal)>) {
        let result = Roster::new(entries);
        assert!(matches!(result, Err(LedgerError::InvalidRoster { .. })));
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let roster = Roster::default()
            .with_overrides([("bob", Decimal::new(50, 0)), ("carol", Decimal::new(7, 0))])
            .unwrap();

        let balances: Vec<(&str, Decimal)> = roster
            .accounts()
            .iter()
            .map(|a| (a.name.as_str(), a.balance))
            .collect();
        assert_eq!(
            balances,
            vec![
                ("alice", Decimal::new(1000, 0)),
                ("bob", Decimal::new(50, 0)),
                ("carol", Decimal::new(7, 0)),
            ]
        );
    }

    #[test]
    fn test_overrides_are_validated() {
        let result = Roster::default().with_overrides([("alice", Decimal::new(-5, 0))]);
        assert!(matches!(result, Err(LedgerError::InvalidRoster { .. })));
    }
}
