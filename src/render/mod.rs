//! Snapshot renderers
//!
//! Renderers only ever see a [`Snapshot`]; the dataset stays with the caller.

pub mod json;
pub mod text;

use crate::snapshot::{Level, Snapshot};

pub const PRICE_AXIS: &str = "Price";
pub const VOLUME_AXIS: &str = "Volume";

/// Chart title carrying the selected row's time
pub fn title(snapshot: &Snapshot) -> String {
    format!("Order Book at Time: {}", format_time(snapshot.time))
}

/// Currency amount with two decimals
pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_time(time: f64) -> String {
    format!("{time:.4}")
}

pub fn format_variance(variance: f64) -> String {
    format!("{variance:.4}")
}

/// Exact price and size of a bar
pub fn tooltip(level: &Level) -> String {
    format!("Price: ${}  Volume: {}", level.price, level.size)
}

/// Bar length in cells for `size`, scaled so `max_size` fills `width`
///
/// Positive sizes always get at least one cell.
pub fn bar_len(size: f64, max_size: f64, width: usize) -> usize {
    if !(size > 0.0) || !(max_size > 0.0) {
        return 0;
    }
    let scaled = (size / max_size * width as f64).round() as usize;
    scaled.clamp(1, width.max(1))
}

/// Largest size among levels, zero when there are none
pub fn max_size(levels: &[Level]) -> f64 {
    levels.iter().map(|l| l.size).fold(0.0, f64::max)
}

/// Label/value pairs for the metrics display
///
/// Variance is listed only when the row carries it.
pub fn metric_lines(snapshot: &Snapshot) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Spread", format_money(snapshot.spread)),
        ("Time", format_time(snapshot.time)),
        ("Price", format_money(snapshot.price)),
    ];
    if let Some(variance) = snapshot.variance {
        lines.push(("Variance", format_variance(variance)));
    }
    lines
}
