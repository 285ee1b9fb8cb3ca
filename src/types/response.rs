//! Transport-level responses
//!
//! Each replayed command produces one [`Response`] with an HTTP-style status
//! and a human readable message.

use super::command::{CommandSeq, Operation};
use std::fmt;

/// HTTP-equivalent status families used by the transport mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// 200
    Ok,
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
}

impl Status {
    /// Numeric status code
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Outcome of one replayed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Sequence number of the command this answers
    pub seq: CommandSeq,

    /// Operation that was requested
    pub op: Operation,

    /// Status family
    pub status: Status,

    /// Confirmation or rejection message
    pub message: String,
}

impl Response {
    pub fn new(seq: CommandSeq, op: Operation, status: Status, message: impl Into<String>) -> Self {
        Response {
            seq,
            op,
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Status::Ok, 200, true)]
    #[case(Status::BadRequest, 400, false)]
    #[case(Status::Unauthorized, 401, false)]
    fn test_status_code(#[case] status: Status, #[case] code: u16, #[case] success: bool) {
        assert_eq!(status.code(), code);
        assert_eq!(status.to_string(), code.to_string());
        assert_eq!(status.is_success(), success);
    }
}
