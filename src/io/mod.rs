//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output serialization)
//! - `sync_reader` - Synchronous command reader with iterator interface
//! - `async_reader` - Asynchronous command reader with batch reading interface
//! - `roster_reader` - Seed roster loading

pub mod async_reader;
pub mod csv_format;
pub mod roster_reader;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    convert_csv_command, parse_account_override, write_balances_csv, write_responses_csv,
    CsvCommand,
};
pub use roster_reader::read_roster;
pub use sync_reader::SyncReader;
