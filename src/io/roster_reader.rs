//! Roster file reader
//!
//! Loads the seed accounts from a CSV file with columns `account,balance`.
//! Unlike command files, a bad roster row is fatal: a ledger must never start
//! from a partially loaded roster.

use crate::io::csv_format::{convert_roster_row, RosterRow};
use crate::io::sync_reader::open_file;
use crate::types::{LedgerError, Roster};
use csv::{ReaderBuilder, Trim};
use std::path::Path;
use tracing::info;

/// Read and validate a roster file
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a row cannot be parsed,
/// or the resulting roster is invalid (duplicates, negative balances).
pub fn read_roster(path: &Path) -> Result<Roster, LedgerError> {
    let file = open_file(path)?;
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let mut entries = Vec::new();
    for row in reader.deserialize::<RosterRow>() {
        entries.push(convert_roster_row(row?)?);
    }

    let roster = Roster::new(entries)?;
    info!(path = %path.display(), accounts = roster.len(), "roster loaded");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_read_roster() {
        let file = create_temp_csv("account,balance\nalice,1000\n bob , 500.25 \n");

        let roster = read_roster(file.path()).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.accounts()[1].name, "bob");
        assert_eq!(roster.accounts()[1].balance, Decimal::new(50025, 2));
    }

    #[test]
    fn test_read_roster_missing_file() {
        let result = read_roster(Path::new("no-such-roster.csv"));
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_roster_bad_balance() {
        let file = create_temp_csv("account,balance\nalice,plenty\n");
        assert!(matches!(
            read_roster(file.path()),
            Err(LedgerError::ParseError { .. })
        ));
    }

    #[test]
    fn test_read_roster_duplicate_account() {
        let file = create_temp_csv("account,balance\nalice,1\nalice,2\n");
        assert!(matches!(
            read_roster(file.path()),
            Err(LedgerError::InvalidRoster { .. })
        ));
    }

    #[test]
    fn test_read_roster_missing_column() {
        let file = create_temp_csv("account\nalice\n");
        assert!(matches!(
            read_roster(file.path()),
            Err(LedgerError::ParseError { .. })
        ));
    }
}
