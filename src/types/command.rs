//! Command-related types for replaying requests against the ledger
//!
//! A command is one login, payment or logout request as it would arrive from
//! the transport layer: a set of optional string fields, not yet validated.

use std::fmt;

/// Command sequence number (1-based position in the input)
pub type CommandSeq = u64;

/// Operations exposed to the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Start a session for `username`
    Login,

    /// Transfer `amount` from `from` to `to`
    Payment,

    /// End the session of `username`
    Logout,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Payment => "payment",
            Operation::Logout => "logout",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request to replay against the ledger
///
/// Fields are kept as raw strings. A missing field is `None`; the dispatcher
/// decides what that means for each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    /// Position of this command in the input
    pub seq: CommandSeq,

    /// Requested operation
    pub op: Operation,

    /// Account for login/logout
    pub username: Option<String>,

    /// Debited account for payment
    pub from: Option<String>,

    /// Credited account for payment
    pub to: Option<String>,

    /// Payment amount as decimal text
    pub amount: Option<String>,
}

impl CommandRecord {
    /// Build a login command
    pub fn login(seq: CommandSeq, username: &str) -> Self {
        CommandRecord {
            seq,
            op: Operation::Login,
            username: Some(username.to_string()),
            from: None,
            to: None,
            amount: None,
        }
    }

    /// Build a payment command
    pub fn payment(seq: CommandSeq, from: &str, to: &str, amount: &str) -> Self {
        CommandRecord {
            seq,
            op: Operation::Payment,
            username: None,
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            amount: Some(amount.to_string()),
        }
    }

    /// Build a logout command
    pub fn logout(seq: CommandSeq, username: &str) -> Self {
        CommandRecord {
            seq,
            op: Operation::Logout,
            username: Some(username.to_string()),
            from: None,
            to: None,
            amount: None,
        }
    }

    /// The account whose session this command acts on
    ///
    /// `username` for login/logout, `from` for payment. Missing fields map to
    /// the empty name.
    pub fn originator(&self) -> &str {
        let field = match self.op {
            Operation::Login | Operation::Logout => &self.username,
            Operation::Payment => &self.from,
        };
        field.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::login(CommandRecord::login(1, "alice"), "alice")]
    #[case::logout(CommandRecord::logout(2, "bob"), "bob")]
    #[case::payment(CommandRecord::payment(3, "alice", "bob", "10"), "alice")]
    fn test_originator(#[case] command: CommandRecord, #[case] expected: &str) {
        assert_eq!(command.originator(), expected);
    }

    #[test]
    fn test_originator_of_incomplete_command_is_empty() {
        let mut command = CommandRecord::payment(1, "alice", "bob", "10");
        command.from = None;
        assert_eq!(command.originator(), "");
    }

    #[rstest]
    #[case(Operation::Login, "login")]
    #[case(Operation::Payment, "payment")]
    #[case(Operation::Logout, "logout")]
    fn test_operation_display(#[case] op: Operation, #[case] expected: &str) {
        assert_eq!(op.to_string(), expected);
    }
}
