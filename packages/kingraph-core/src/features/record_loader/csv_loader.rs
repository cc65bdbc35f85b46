//! CSV record loader
//!
//! Expected header columns: `ID, Name, Gender, Birth, Death, Metadata, Father,
//! Mother, MarriedTo`. Only `ID` is required; missing optional columns and
//! unknown extra columns are tolerated. Fields are trimmed, and blank optional
//! fields become absent.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::shared::models::PersonRecord;

#[derive(Debug, Clone, Copy)]
pub struct CsvRecordLoader {
    delimiter: u8,
}

impl CsvRecordLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load records from a CSV file
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<PersonRecord>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading family records");
        let file = File::open(path)?;
        self.load_reader(file)
    }

    /// Load records from any CSV source
    ///
    /// Rows without an `ID` are skipped. References are *not* validated here;
    /// run the result through [`super::RecordSanitizer`].
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<PersonRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for row in csv_reader.deserialize::<PersonRecord>() {
            let record = row?.normalized();
            if record.id.is_empty() {
                skipped += 1;
                continue;
            }
            records.push(record);
        }

        debug!(records = records.len(), skipped, "CSV rows read");
        Ok(records)
    }
}

impl Default for CsvRecordLoader {
    fn default() -> Self {
        Self::new()
    }
}
