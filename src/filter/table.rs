use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::{fs, path::Path};

use crate::filter::decode::decode_text;

/// Field separator used by the accident-data exports.
pub const DELIMITER: u8 = b';';

#[derive(Debug)]
pub struct RawTable {
    /// Column names, from the first row of the file.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field).
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Load a `;`-delimited file fully into memory. All cells stay strings;
    /// coercion happens later, at predicate time.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let text = decode_text(&bytes);

        let mut rdr = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .with_context(|| format!("reading header row of {}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record =
                record.with_context(|| format!("parsing data row of {}", path.display()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Serialize header + rows back to `path`, `;`-separated, one record per
    /// line. Overwrites whatever is there; no backup is kept.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut wtr = WriterBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening {} for writing", path.display()))?;

        wtr.write_record(&self.headers)
            .context("writing header row")?;
        for row in &self.rows {
            wtr.write_record(row).context("writing data row")?;
        }
        wtr.flush()
            .with_context(|| format!("flushing {}", path.display()))?;
        Ok(())
    }
}
