use crate::io::{parse_account_override, read_roster};
use crate::logging::LogFormat;
use crate::strategy::BatchConfig;
use crate::types::{LedgerError, Roster};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay login, payment and logout commands against a session-gated ledger
#[derive(Parser, Debug)]
#[command(name = "session-ledger")]
#[command(about = "Replay login, payment and logout commands against a session-gated ledger", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing commands
    #[arg(value_name = "INPUT", help = "Path to the input CSV file (op,username,from,to,amount)")]
    pub input_file: PathBuf,

    /// Replay strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Replay strategy: 'sync' for sequential or 'async' for concurrent"
    )]
    pub strategy: StrategyType,

    /// Number of commands per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of commands per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads replaying in parallel (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Seed roster file
    #[arg(
        long = "roster",
        value_name = "FILE",
        help = "CSV file with columns account,balance (default: alice=1000, bob=500)"
    )]
    pub roster_file: Option<PathBuf>,

    /// Extra or overriding seed accounts
    #[arg(
        long = "account",
        value_name = "NAME=BALANCE",
        value_parser = parse_account_override,
        help = "Add or override a seed account; may be repeated"
    )]
    pub accounts: Vec<(String, Decimal)>,

    /// Where to write per-command responses
    #[arg(
        long = "responses",
        value_name = "FILE",
        help = "Write one response per command to this CSV file"
    )]
    pub responses_file: Option<PathBuf>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}

/// Available replay strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments, falling back to defaults
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Assemble the seed roster
    ///
    /// Starts from `--roster` if given, otherwise from the default roster,
    /// then applies every `--account` override in order.
    pub fn build_roster(&self) -> Result<Roster, LedgerError> {
        let base = match &self.roster_file {
            Some(path) => read_roster(path)?,
            None => Roster::default(),
        };

        base.with_overrides(self.accounts.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case::default_strategy(&["program", "input.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
    }

    #[rstest]
    #[case::batch_size(&["program", "--batch-size", "2000", "input.csv"], Some(2000), None)]
    #[case::max_concurrent(&["program", "--max-concurrent", "8", "input.csv"], None, Some(8))]
    #[case::no_options(&["program", "input.csv"], None, None)]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] batch_size: Option<usize>,
        #[case] max_concurrent: Option<usize>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.batch_size, batch_size);
        assert_eq!(parsed.max_concurrent_batches, max_concurrent);
    }

    #[rstest]
    #[case::all_defaults(&["program", "input.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "input.csv"], 2000, num_cpus::get())]
    #[case::custom_max_concurrent(&["program", "--max-concurrent", "8", "input.csv"], 1000, 8)]
    #[case::zero_falls_back(&["program", "--batch-size", "0", "input.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_max_concurrent);
    }

    #[test]
    fn test_default_roster() {
        let parsed = CliArgs::try_parse_from(["program", "input.csv"]).unwrap();
        assert_eq!(parsed.build_roster().unwrap(), Roster::default());
    }

    #[test]
    fn test_account_overrides() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--account",
            "carol=25.5",
            "--account",
            "alice=10",
            "input.csv",
        ])
        .unwrap();

        let roster = parsed.build_roster().unwrap();

        let balances: Vec<(String, Decimal)> = roster
            .accounts()
            .iter()
            .map(|a| (a.name.clone(), a.balance))
            .collect();
        assert_eq!(
            balances,
            vec![
                ("alice".to_string(), Decimal::new(10, 0)),
                ("bob".to_string(), Decimal::new(500, 0)),
                ("carol".to_string(), Decimal::new(255, 1)),
            ]
        );
    }

    #[test]
    fn test_roster_file_with_override() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"account,balance\nzed,5\n").unwrap();
        file.flush().unwrap();
        let roster_path = file.path().to_str().unwrap().to_string();

        let parsed = CliArgs::try_parse_from([
            "program",
            "--roster",
            roster_path.as_str(),
            "--account",
            "zed=6",
            "input.csv",
        ])
        .unwrap();

        let roster = parsed.build_roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.accounts()[0].balance, Decimal::new(6, 0));
    }

    #[test]
    fn test_log_format_parsing() {
        let parsed =
            CliArgs::try_parse_from(["program", "--log-format", "json", "input.csv"]).unwrap();
        assert_eq!(parsed.log_format, LogFormat::Json);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "input.csv"])]
    #[case::malformed_account(&["program", "--account", "carol", "input.csv"])]
    #[case::bad_balance(&["program", "--account", "carol=lots", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
