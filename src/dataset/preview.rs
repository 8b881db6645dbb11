//! Head of the uploaded table
//!
//! Rows come in file order, before the time sort, with every column of the
//! file. Null cells are shown as `NaN`.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::parser::parse_cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Preview {
    /// First `n` records of the CSV
    pub fn from_csv(bytes: &[u8], n: usize) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::with_capacity(n);
        for record in reader.records().take(n) {
            let record = record?;
            rows.push(record.iter().map(display_cell).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn from_path(path: impl AsRef<Path>, n: usize) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_csv(&bytes, n)
    }
}

fn display_cell(raw: &str) -> String {
    match parse_cell(raw) {
        Some(None) => "NaN".to_string(),
        _ => raw.trim().to_string(),
    }
}
