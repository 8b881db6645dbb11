//! CSV loading
//!
//! Turns the raw bytes of a simulation export into a sorted [`Dataset`].

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use super::Dataset;
use crate::error::Result;
use crate::parser::ColumnLayout;

impl Dataset {
    /// Parse CSV bytes into a dataset sorted by time
    ///
    /// The header is checked for a `Time` column before any record is read.
    /// Malformed numbers in recognized columns fail the whole load.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let layout = ColumnLayout::from_headers(reader.headers()?)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            rows.push(layout.parse_row(&record, line)?);
        }

        let (bid_levels, ask_levels) = layout.complete_levels();
        debug!(
            rows = rows.len(),
            bid_levels,
            ask_levels,
            "Loaded simulation dataset"
        );

        Ok(Self::from_rows(rows))
    }

    /// Read a file and parse it with [`Dataset::load`]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read simulation file");
        Self::load(&bytes)
    }
}
