//! Parser module for simulation CSV exports
//!
//! Resolves the header into column positions and turns each record into a
//! typed [`Row`]. Only the columns the viewer understands are read; anything
//! else in the file is ignored.

use csv::StringRecord;

use crate::dataset::{QuoteCells, Row, DEPTH_LEVELS};
use crate::error::{Result, ViewerError};

pub const TIME: &str = "Time";
pub const PRICE: &str = "Price";
pub const BID_ASK_SPREAD: &str = "BidAskSpread";
pub const VARIANCE: &str = "Variance";

/// Cell contents treated as a missing value, the default pandas `na_values`
const NULL_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column positions of a per-level quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct QuoteColumns {
    price: Option<usize>,
    size: Option<usize>,
}

/// Positions of every recognized column in a CSV header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    headers: Vec<String>,
    time: usize,
    price: Option<usize>,
    bid_ask_spread: Option<usize>,
    variance: Option<usize>,
    bids: [QuoteColumns; DEPTH_LEVELS],
    asks: [QuoteColumns; DEPTH_LEVELS],
}

impl ColumnLayout {
    /// Build the layout from a header record
    ///
    /// Fails when there is no `Time` column. When a name repeats, the first
    /// occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let find = |name: &str| names.iter().position(|h| h == name);

        let time = find(TIME).ok_or_else(|| {
            ViewerError::ParseError(format!("missing required column `{TIME}`"))
        })?;

        let mut bids = [QuoteColumns::default(); DEPTH_LEVELS];
        let mut asks = [QuoteColumns::default(); DEPTH_LEVELS];
        for (idx, name) in names.iter().enumerate() {
            let Some((column, level)) = split_level(name) else {
                continue;
            };
            let slot = match column {
                "BidPrice" => &mut bids[level - 1].price,
                "BidSize" => &mut bids[level - 1].size,
                "AskPrice" => &mut asks[level - 1].price,
                "AskSize" => &mut asks[level - 1].size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }

        Ok(Self {
            time,
            price: find(PRICE),
            bid_ask_spread: find(BID_ASK_SPREAD),
            variance: find(VARIANCE),
            bids,
            asks,
            headers: names,
        })
    }

    /// Number of depth levels with both price and size columns on each side
    pub fn complete_levels(&self) -> (usize, usize) {
        let count = |side: &[QuoteColumns; DEPTH_LEVELS]| {
            side.iter()
                .filter(|q| q.price.is_some() && q.size.is_some())
                .count()
        };
        (count(&self.bids), count(&self.asks))
    }

    /// Parse one data record into a row
    ///
    /// `line` is only used for error messages.
    pub fn parse_row(&self, record: &StringRecord, line: u64) -> Result<Row> {
        let time = self.read(record, Some(self.time), line)?.ok_or_else(|| {
            ViewerError::ParseError(format!("line {line}: `{TIME}` is empty"))
        })?;
        if !time.is_finite() {
            return Err(ViewerError::ParseError(format!(
                "line {line}: `{TIME}` must be finite, got `{time}`"
            )));
        }

        let mut bids = [QuoteCells::default(); DEPTH_LEVELS];
        let mut asks = [QuoteCells::default(); DEPTH_LEVELS];
        for level in 0..DEPTH_LEVELS {
            bids[level] = self.read_quote(record, self.bids[level], line)?;
            asks[level] = self.read_quote(record, self.asks[level], line)?;
        }

        Ok(Row {
            time,
            price: self.read(record, self.price, line)?,
            bid_ask_spread: self.read(record, self.bid_ask_spread, line)?,
            variance: self.read(record, self.variance, line)?,
            bids,
            asks,
        })
    }

    fn read_quote(
        &self,
        record: &StringRecord,
        columns: QuoteColumns,
        line: u64,
    ) -> Result<QuoteCells> {
        Ok(QuoteCells {
            price: self.read(record, columns.price, line)?,
            size: self.read(record, columns.size, line)?,
        })
    }

    fn read(&self, record: &StringRecord, column: Option<usize>, line: u64) -> Result<Option<f64>> {
        let Some(idx) = column else {
            return Ok(None);
        };
        let raw = record.get(idx).unwrap_or("");
        parse_cell(raw).ok_or_else(|| {
            ViewerError::ParseError(format!(
                "line {line}, column `{}`: invalid number `{raw}`",
                self.headers[idx]
            ))
        })
    }
}

/// Parse a numeric cell
///
/// Returns `Some(None)` for a null cell, `None` when the text is not a number.
pub fn parse_cell(raw: &str) -> Option<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NULL_MARKERS.contains(&trimmed) {
        return Some(None);
    }
    let value: f64 = trimmed.parse().ok()?;
    Some(if value.is_nan() { None } else { Some(value) })
}

/// Split `BidPrice_3` into `("BidPrice", 3)` for levels within the fixed depth
fn split_level(name: &str) -> Option<(&str, usize)> {
    let (column, level) = name.rsplit_once('_')?;
    let level: usize = level.parse().ok()?;
    (1..=DEPTH_LEVELS).contains(&level).then_some((column, level))
}
