//! Snapshot module
//!
//! Extracted state of the order book at one selected row.

mod metrics;
mod selector;

pub use metrics::SnapshotMetrics;

use serde::{Deserialize, Serialize};

/// Side of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Bid => "Bids",
            Side::Ask => "Asks",
        }
    }
}

/// A single level in the order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub size: f64,
}

/// Order book state at the selected row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Timestamp of the selected row, not the requested time
    pub time: f64,
    /// Position of the selected row in the sorted dataset
    pub row_index: usize,
    /// Complete bid levels, level 1 first
    pub bids: Vec<Level>,
    /// Complete ask levels, level 1 first
    pub asks: Vec<Level>,
    pub spread: f64,
    pub price: f64,
    pub variance: Option<f64>,
}

impl Snapshot {
    pub fn levels(&self, side: Side) -> &[Level] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// Prices of one side in extraction order
    pub fn prices(&self, side: Side) -> Vec<f64> {
        self.levels(side).iter().map(|l| l.price).collect()
    }

    /// Sizes of one side, parallel to [`Snapshot::prices`]
    pub fn sizes(&self, side: Side) -> Vec<f64> {
        self.levels(side).iter().map(|l| l.size).collect()
    }

    pub fn metrics(&self) -> SnapshotMetrics {
        SnapshotMetrics::from_snapshot(self)
    }
}
