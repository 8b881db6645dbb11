//! JSON output of a snapshot

use serde::Serialize;

use crate::error::Result;
use crate::snapshot::{Side, Snapshot, SnapshotMetrics};

/// Parallel price/size sequences of one side
#[derive(Debug, Serialize)]
struct SideSeries {
    prices: Vec<f64>,
    sizes: Vec<f64>,
}

impl SideSeries {
    fn new(snapshot: &Snapshot, side: Side) -> Self {
        Self {
            prices: snapshot.prices(side),
            sizes: snapshot.sizes(side),
        }
    }
}

#[derive(Debug, Serialize)]
struct SnapshotDocument<'a> {
    title: String,
    time: f64,
    row_index: usize,
    spread: f64,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    variance: Option<f64>,
    bids: SideSeries,
    asks: SideSeries,
    metrics: &'a SnapshotMetrics,
}

/// Pretty-printed JSON document for a snapshot
pub fn render(snapshot: &Snapshot) -> Result<String> {
    let metrics = snapshot.metrics();
    let document = SnapshotDocument {
        title: super::title(snapshot),
        time: snapshot.time,
        row_index: snapshot.row_index,
        spread: snapshot.spread,
        price: snapshot.price,
        variance: snapshot.variance,
        bids: SideSeries::new(snapshot, Side::Bid),
        asks: SideSeries::new(snapshot, Side::Ask),
        metrics: &metrics,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
