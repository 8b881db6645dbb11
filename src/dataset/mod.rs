//! Dataset module
//!
//! In-memory table of order book snapshots loaded from a simulation export.

mod loader;
mod preview;
mod range;

pub use preview::Preview;
pub use range::TimeRange;

use serde::Serialize;

/// Number of price levels read per side
pub const DEPTH_LEVELS: usize = 5;

/// Price and size cells of one depth level, either may be null
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QuoteCells {
    pub price: Option<f64>,
    pub size: Option<f64>,
}

impl QuoteCells {
    pub fn new(price: f64, size: f64) -> Self {
        Self {
            price: Some(price),
            size: Some(size),
        }
    }

    /// Both cells, when both are present
    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.price?, self.size?))
    }
}

/// One row of the simulation export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub time: f64,
    pub price: Option<f64>,
    pub bid_ask_spread: Option<f64>,
    pub variance: Option<f64>,
    /// Level 1 first
    pub bids: [QuoteCells; DEPTH_LEVELS],
    /// Level 1 first
    pub asks: [QuoteCells; DEPTH_LEVELS],
}

impl Row {
    /// Create a row with only a timestamp
    pub fn new(time: f64) -> Self {
        Self {
            time,
            price: None,
            bid_ask_spread: None,
            variance: None,
            bids: [QuoteCells::default(); DEPTH_LEVELS],
            asks: [QuoteCells::default(); DEPTH_LEVELS],
        }
    }
}

/// Rows sorted ascending by time
///
/// Never mutated after construction; every query borrows it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from rows in any order
    ///
    /// Rows are stably sorted by time, so equal timestamps keep their
    /// relative order.
    pub fn from_rows(mut rows: Vec<Row>) -> Self {
        rows.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
