//! Session table
//!
//! Tracks which accounts currently have an active session. An account is
//! either present (logged in) or absent; there are no tokens and no expiry.
//!
//! Like the account book, the table is only touched from inside the ledger's
//! critical section.

use std::collections::HashSet;

/// Set of account names with an active session
#[derive(Debug, Default)]
pub struct SessionTable {
    active: HashSet<String>,
}

impl SessionTable {
    /// Create an empty table (every account starts logged out)
    pub fn new() -> Self {
        SessionTable {
            active: HashSet::new(),
        }
    }

    /// Mark a session as active
    ///
    /// Idempotent. Returns `true` if the session was newly opened and `false`
    /// if it was already active.
    pub fn open(&mut self, account: &str) -> bool {
        if self.active.contains(account) {
            return false;
        }
        self.active.insert(account.to_string())
    }

    /// Remove a session
    ///
    /// Returns `true` if a session was removed, `false` if there was none.
    pub fn close(&mut self, account: &str) -> bool {
        self.active.remove(account)
    }

    /// Check whether an account has an active session
    pub fn is_active(&self, account: &str) -> bool {
        self.active.contains(account)
    }

    /// Number of active sessions
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = SessionTable::new();
        assert!(table.is_empty());
        assert!(!table.is_active("alice"));
    }

    #[test]
    fn test_open_marks_active() {
        let mut table = SessionTable::new();

        assert!(table.open("alice"));
        assert!(table.is_active("alice"));
        assert!(!table.is_active("bob"));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut table = SessionTable::new();

        assert!(table.open("alice"));
        assert!(!table.open("alice"));
        assert_eq!(table.len(), 1);
        assert!(table.is_active("alice"));
    }

    #[test]
    fn test_close_removes_session() {
        let mut table = SessionTable::new();
        table.open("alice");

        assert!(table.close("alice"));
        assert!(!table.is_active("alice"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_close_without_session() {
        let mut table = SessionTable::new();
        assert!(!table.close("alice"));
    }

    #[test]
    fn test_session_cycle() {
        let mut table = SessionTable::new();

        for _ in 0..3 {
            assert!(table.open("bob"));
            assert!(table.close("bob"));
        }
        assert!(!table.is_active("bob"));
    }
}
