//! Asynchronous CSV reader with batch interface
//!
//! Provides batch reading over command records for the concurrent replay
//! strategy.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of CommandRecords
//!                  ↓
//!           csv_format module
//!           (CsvCommand, convert_csv_command)
//! ```

use crate::io::csv_format::{convert_csv_command, CsvCommand};
use crate::types::{CommandRecord, CommandSeq};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV command reader
///
/// Sequence numbers continue across batches and are consumed by invalid rows
/// too, matching [`crate::io::SyncReader`].
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    seq: CommandSeq,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader, seq: 0 }
    }

    /// Read a batch of command records
    ///
    /// Reads up to `batch_size` rows. Invalid rows are logged and skipped, so
    /// a batch may hold fewer records than rows consumed, or none at all.
    ///
    /// Returns `None` once the end of the input is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Option<Vec<CommandRecord>> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut rows_read = 0;
        let mut records = self.csv_reader.deserialize::<CsvCommand>();

        while rows_read < batch_size {
            let Some(next) = records.next().await else {
                break;
            };
            rows_read += 1;
            self.seq += 1;
            let line = self.seq + 1;

            match next {
                Ok(csv_command) => match convert_csv_command(csv_command, self.seq) {
                    Ok(command) => batch.push(command),
                    Err(e) => warn!(line, error = %e, "skipping invalid command"),
                },
                Err(e) => warn!(line, error = %e, "CSV parse error"),
            }
        }

        (rows_read > 0).then_some(batch)
    }
}
