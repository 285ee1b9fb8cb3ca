//! CSV format handling for commands, rosters, balances and responses
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvCommand structure for deserialization of command rows
//! - RosterRow structure for deserialization of seed rows
//! - Conversion from CSV rows to domain types
//! - Balance and response output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Account, CommandRecord, CommandSeq, LedgerError, Operation, Response};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV command row
///
/// Matches the input CSV format with columns: op, username, from, to, amount.
/// Every column except `op` may be empty or absent.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CsvCommand {
    pub op: String,
    pub username: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// CSV roster row with columns: account, balance
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RosterRow {
    pub account: String,
    pub balance: String,
}

/// Convert a CsvCommand to a CommandRecord
///
/// This function:
/// - Parses the op string (case-insensitive) into an Operation
/// - Trims every field and turns blank fields into `None`
///
/// Field presence is not validated here; the dispatcher answers incomplete
/// commands the same way the transport would.
///
/// # Errors
///
/// Returns an error message if the op is not one of login, payment, logout.
pub fn convert_csv_command(csv_command: CsvCommand, seq: CommandSeq) -> Result<CommandRecord, String> {
    let op = match csv_command.op.trim().to_lowercase().as_str() {
        "login" => Operation::Login,
        "payment" => Operation::Payment,
        "logout" => Operation::Logout,
        _ => {
            return Err(format!(
                "Invalid op '{}' for command {}",
                csv_command.op, seq
            ))
        }
    };

    Ok(CommandRecord {
        seq,
        op,
        username: non_blank(csv_command.username),
        from: non_blank(csv_command.from),
        to: non_blank(csv_command.to),
        amount: non_blank(csv_command.amount),
    })
}

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Convert a RosterRow to a `(name, balance)` pair
///
/// # Errors
///
/// Returns `ParseError` if the balance is not a decimal number.
pub fn convert_roster_row(row: RosterRow) -> Result<(String, Decimal), LedgerError> {
    let balance = Decimal::from_str(row.balance.trim()).map_err(|e| LedgerError::ParseError {
        line: None,
        message: format!(
            "Invalid balance '{}' for account '{}': {}",
            row.balance, row.account, e
        ),
    })?;

    Ok((row.account, balance))
}

/// Parse a `NAME=BALANCE` account override
///
/// Used for command-line roster overrides.
pub fn parse_account_override(text: &str) -> Result<(String, Decimal), String> {
    let (name, balance) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=BALANCE, got '{}'", text))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing account name in '{}'", text));
    }

    let balance = Decimal::from_str(balance.trim())
        .map_err(|e| format!("invalid balance in '{}': {}", text, e))?;

    Ok((name.to_string(), balance))
}

/// Write account balances to CSV format
///
/// Writes accounts in CSV format with columns: account, balance.
/// Accounts are sorted by name for deterministic output and balances are
/// printed with four decimal places.
pub fn write_balances_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["account", "balance"])?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by(|a, b| a.name.cmp(&b.name));

    for account in sorted_accounts {
        writer.write_record(&[account.name, format!("{:.4}", account.balance)])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write command responses to CSV format
///
/// Writes responses in CSV format with columns: seq, op, status, message,
/// sorted by sequence number.
pub fn write_responses_csv(responses: &[Response], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["seq", "op", "status", "message"])?;

    let mut sorted_responses = responses.to_vec();
    sorted_responses.sort_by_key(|response| response.seq);

    for response in sorted_responses {
        writer.write_record(&[
            response.seq.to_string(),
            response.op.to_string(),
            response.status.to_string(),
            response.message,
        ])?;
    }

    writer.flush()?;

    Ok(())
}
