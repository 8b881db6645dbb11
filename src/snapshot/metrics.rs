//! Snapshot metrics calculation

use serde::{Deserialize, Serialize};

use super::{Level, Snapshot};

/// Aggregates over the displayed levels of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetrics {
    /// Price of the first displayed bid level
    pub best_bid: Option<f64>,

    /// Price of the first displayed ask level
    pub best_ask: Option<f64>,

    /// Mid price (average of best bid and ask)
    pub mid_price: Option<f64>,

    /// Simple imbalance: (bid_vol - ask_vol) / (bid_vol + ask_vol)
    pub imbalance: Option<f64>,

    /// Bid over ask displayed volume
    pub volume_ratio: Option<f64>,

    /// Total displayed bid volume
    pub bid_depth: f64,

    /// Total displayed ask volume
    pub ask_depth: f64,

    /// Number of bid levels
    pub bid_levels: usize,

    /// Number of ask levels
    pub ask_levels: usize,
}

impl SnapshotMetrics {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let best_bid = snapshot.bids.first().map(|l| l.price);
        let best_ask = snapshot.asks.first().map(|l| l.price);
        let bid_depth = depth(&snapshot.bids);
        let ask_depth = depth(&snapshot.asks);

        let mid_price = match (best_bid, best_ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        };

        let total = bid_depth + ask_depth;
        let imbalance = (total > 0.0).then(|| (bid_depth - ask_depth) / total);
        let volume_ratio = (ask_depth > 0.0).then(|| bid_depth / ask_depth);

        Self {
            best_bid,
            best_ask,
            mid_price,
            imbalance,
            volume_ratio,
            bid_depth,
            ask_depth,
            bid_levels: snapshot.bids.len(),
            ask_levels: snapshot.asks.len(),
        }
    }
}

fn depth(levels: &[Level]) -> f64 {
    levels.iter().map(|l| l.size).sum()
}
