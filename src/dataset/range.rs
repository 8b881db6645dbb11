//! Time axis bounds

use serde::Serialize;

use super::Dataset;
use crate::error::{Result, ViewerError};

/// Bounds and increment of the selectable time axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
    /// `(max - min) / row_count`, zero when every row shares one timestamp
    pub step: f64,
    pub rows: usize,
}

impl TimeRange {
    /// Whether the axis collapses to a single selectable value
    pub fn is_degenerate(&self) -> bool {
        self.step <= 0.0
    }
}

impl Dataset {
    /// Compute the time axis for this dataset
    pub fn range(&self) -> Result<TimeRange> {
        // Sorted, so the ends hold the extremes
        let (Some(first), Some(last)) = (self.rows.first(), self.rows.last()) else {
            return Err(ViewerError::EmptyDataset);
        };
        let rows = self.rows.len();
        let (min, max) = (first.time, last.time);

        Ok(TimeRange {
            min,
            max,
            step: (max - min) / rows as f64,
            rows,
        })
    }
}
