//! Nearest-row snapshot selection

use tracing::debug;

use super::{Level, Snapshot};
use crate::dataset::{Dataset, QuoteCells};
use crate::error::{Result, ViewerError};
use crate::parser::{BID_ASK_SPREAD, PRICE};

impl Dataset {
    /// Index of the row whose time is closest to `requested`
    ///
    /// Ties go to the lowest index. `None` only for an empty dataset.
    pub fn nearest_index(&self, requested: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, row) in self.rows().iter().enumerate() {
            let distance = (row.time - requested).abs();
            match best {
                Some((_, d)) if distance >= d => {}
                _ => best = Some((idx, distance)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Extract the snapshot nearest to `requested`
    pub fn select(&self, requested: f64) -> Result<Snapshot> {
        if !requested.is_finite() {
            return Err(ViewerError::InvalidTime(requested));
        }
        let idx = self
            .nearest_index(requested)
            .ok_or(ViewerError::EmptyDataset)?;
        let row = &self.rows()[idx];

        let spread = row.bid_ask_spread.ok_or(ViewerError::MissingField {
            field: BID_ASK_SPREAD,
            time: row.time,
        })?;
        let price = row.price.ok_or(ViewerError::MissingField {
            field: PRICE,
            time: row.time,
        })?;

        let snapshot = Snapshot {
            time: row.time,
            row_index: idx,
            bids: complete_levels(&row.bids),
            asks: complete_levels(&row.asks),
            spread,
            price,
            variance: row.variance,
        };

        debug!(
            requested,
            time = snapshot.time,
            row = idx,
            bid_levels = snapshot.bids.len(),
            ask_levels = snapshot.asks.len(),
            "Selected snapshot"
        );

        Ok(snapshot)
    }
}

/// Levels with both price and size present, in level order
fn complete_levels(cells: &[QuoteCells]) -> Vec<Level> {
    cells
        .iter()
        .filter_map(QuoteCells::pair)
        .map(|(price, size)| Level { price, size })
        .collect()
}
