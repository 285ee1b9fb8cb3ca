//! Command dispatcher
//!
//! Maps transport commands (login, payment, logout) onto ledger operations and
//! ledger results onto HTTP-style responses.
//!
//! # Status Mapping
//!
//! | Outcome                         | Status | Message                   |
//! |---------------------------------|--------|---------------------------|
//! | success                         | 200    | `<Op> successful`         |
//! | `UnknownAccount` on login       | 401    | `Customer does not exist` |
//! | `UnknownAccount` on payment     | 400    | `Invalid customer(s)`     |
//! | `UnknownAccount` on logout      | 401    | `User not logged in`      |
//! | `NotAuthenticated` (any op)     | 401    | `User not logged in`      |
//! | `InvalidAmount`                 | 400    | `Invalid amount`          |
//! | `InsufficientFunds`             | 400    | `Insufficient balance`    |
//! | `BalanceOverflow`               | 400    | `Balance overflow`        |
//!
//! A missing field is treated as the empty string, which never names an
//! account, so it surfaces as the same rejection an unknown name would.

use crate::core::ledger::Ledger;
use crate::types::{CommandRecord, LedgerError, Operation, Response, Status};
use tracing::{debug, info, warn};

/// Routes commands to a shared ledger
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    ledger: &'a Ledger,
}

impl<'a> Dispatcher<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Dispatcher { ledger }
    }

    /// Execute one command and produce its response
    ///
    /// Never fails: every ledger rejection becomes a non-200 response.
    pub fn dispatch(&self, command: &CommandRecord) -> Response {
        let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

        let result = match command.op {
            Operation::Login => self
                .ledger
                .authenticate(&field(&command.username))
                .map(|_| ()),
            Operation::Payment => self.ledger.transfer_raw(
                &field(&command.from),
                &field(&command.to),
                &field(&command.amount),
            ),
            Operation::Logout => self.ledger.end_session(&field(&command.username)),
        };

        let response = respond(command, result);
        if response.status.is_success() {
            debug!(seq = command.seq, op = %command.op, "command succeeded");
        } else {
            info!(
                seq = command.seq,
                op = %command.op,
                status = response.status.code(),
                message = %response.message,
                "command rejected"
            );
        }
        response
    }
}

/// Build the response for a command from its ledger result
pub fn respond(command: &CommandRecord, result: Result<(), LedgerError>) -> Response {
    let (status, message) = match result {
        Ok(()) => (Status::Ok, success_message(command.op)),
        Err(error) => error_status(command.op, &error),
    };
    Response::new(command.seq, command.op, status, message)
}

fn success_message(op: Operation) -> &'static str {
    match op {
        Operation::Login => "Login successful",
        Operation::Payment => "Payment successful",
        Operation::Logout => "Logout successful",
    }
}

/// Status and message for a rejected operation
pub fn error_status(op: Operation, error: &LedgerError) -> (Status, &'static str) {
    match error {
        LedgerError::UnknownAccount { .. } => match op {
            Operation::Login => (Status::Unauthorized, "Customer does not exist"),
            Operation::Payment => (Status::BadRequest, "Invalid customer(s)"),
            // end_session reports unknown names as NotAuthenticated
            Operation::Logout => (Status::Unauthorized, "User not logged in"),
        },
        LedgerError::NotAuthenticated { .. } => (Status::Unauthorized, "User not logged in"),
        LedgerError::InvalidAmount { .. } => (Status::BadRequest, "Invalid amount"),
        LedgerError::InsufficientFunds { .. } => (Status::BadRequest, "Insufficient balance"),
        LedgerError::BalanceOverflow { .. } => (Status::BadRequest, "Balance overflow"),
        other => {
            warn!(%op, error = %other, "unexpected error from ledger operation");
            (Status::BadRequest, "Request failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    #[fixture]
    fn ledger() -> Ledger {
        Ledger::default()
    }

    fn run(ledger: &Ledger, command: CommandRecord) -> (u16, String) {
        let response = Dispatcher::new(ledger).dispatch(&command);
        (response.status.code(), response.message)
    }

    #[rstest]
    fn test_login_success(ledger: Ledger) {
        let (status, message) = run(&ledger, CommandRecord::login(1, "alice"));

        assert_eq!(status, 200);
        assert_eq!(message, "Login successful");
        assert!(ledger.is_authenticated("alice"));
    }

    #[rstest]
    fn test_login_unknown_customer(ledger: Ledger) {
        let (status, message) = run(&ledger, CommandRecord::login(1, "carol"));

        assert_eq!(status, 401);
        assert_eq!(message, "Customer does not exist");
    }

    #[rstest]
    fn test_login_without_username(ledger: Ledger) {
        let mut command = CommandRecord::login(1, "alice");
        command.username = None;

        let (status, message) = run(&ledger, command);

        assert_eq!(status, 401);
        assert_eq!(message, "Customer does not exist");
    }

    #[rstest]
    fn test_payment_flow(ledger: Ledger) {
        run(&ledger, CommandRecord::login(1, "alice"));

        let (status, message) = run(&ledger, CommandRecord::payment(2, "alice", "bob", "200"));

        assert_eq!(status, 200);
        assert_eq!(message, "Payment successful");
        assert_eq!(ledger.balance("alice"), Some(Decimal::new(800, 0)));
        assert_eq!(ledger.balance("bob"), Some(Decimal::new(700, 0)));
    }

    #[rstest]
    #[case::not_logged_in("bob", "alice", "10", false, 401, "User not logged in")]
    #[case::unknown_recipient("alice", "carol", "10", true, 400, "Invalid customer(s)")]
    #[case::bad_amount("alice", "bob", "ten", true, 400, "Invalid amount")]
    #[case::negative_amount("alice", "bob", "-10", true, 400, "Invalid amount")]
    #[case::insufficient("alice", "bob", "9000", true, 400, "Insufficient balance")]
    fn test_payment_rejections(
        ledger: Ledger,
        #[case] from: &str,
        #[case] to: &str,
        #[case] amount: &str,
        #[case] login_first: bool,
        #[case] expected_status: u16,
        #[case] expected_message: &str,
    ) {
        if login_first {
            ledger.authenticate(from).unwrap();
        }

        let (status, message) = run(&ledger, CommandRecord::payment(1, from, to, amount));

        assert_eq!(status, expected_status);
        assert_eq!(message, expected_message);
        assert_eq!(ledger.total_balance(), Decimal::new(1500, 0));
        assert_eq!(ledger.balance("alice"), Some(Decimal::new(1000, 0)));
    }

    #[rstest]
    fn test_payment_without_amount(ledger: Ledger) {
        ledger.authenticate("alice").unwrap();
        let mut command = CommandRecord::payment(1, "alice", "bob", "1");
        command.amount = None;

        let (status, message) = run(&ledger, command);

        assert_eq!(status, 400);
        assert_eq!(message, "Invalid amount");
    }

    #[rstest]
    fn test_logout_flow(ledger: Ledger) {
        run(&ledger, CommandRecord::login(1, "bob"));

        let (status, message) = run(&ledger, CommandRecord::logout(2, "bob"));
        assert_eq!(status, 200);
        assert_eq!(message, "Logout successful");

        let (status, message) = run(&ledger, CommandRecord::logout(3, "bob"));
        assert_eq!(status, 401);
        assert_eq!(message, "User not logged in");
    }

    #[rstest]
    fn test_logout_unknown_customer(ledger: Ledger) {
        let (status, message) = run(&ledger, CommandRecord::logout(1, "carol"));

        assert_eq!(status, 401);
        assert_eq!(message, "User not logged in");
    }

    #[rstest]
    fn test_response_carries_command_identity(ledger: Ledger) {
        let response = Dispatcher::new(&ledger).dispatch(&CommandRecord::logout(42, "alice"));

        assert_eq!(response.seq, 42);
        assert_eq!(response.op, Operation::Logout);
        assert_eq!(response.status, Status::Unauthorized);
    }

    #[rstest]
    #[case::not_authenticated_login(Operation::Login, LedgerError::not_authenticated("a"), Status::Unauthorized)]
    #[case::not_authenticated_payment(Operation::Payment, LedgerError::not_authenticated("a"), Status::Unauthorized)]
    #[case::not_authenticated_logout(Operation::Logout, LedgerError::not_authenticated("a"), Status::Unauthorized)]
    #[case::unknown_login(Operation::Login, LedgerError::unknown_account("a"), Status::Unauthorized)]
    #[case::unknown_payment(Operation::Payment, LedgerError::unknown_account("a"), Status::BadRequest)]
    #[case::unknown_logout(Operation::Logout, LedgerError::unknown_account("a"), Status::Unauthorized)]
    #[case::io_fault(Operation::Payment, LedgerError::IoError { message: "x".to_string() }, Status::BadRequest)]
    fn test_error_status(#[case] op: Operation, #[case] error: LedgerError, #[case] expected: Status) {
        assert_eq!(error_status(op, &error).0, expected);
    }
}
