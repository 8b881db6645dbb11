//! Plain-text rendering for terminals and pipes

use std::fmt::Write;

use super::{bar_len, format_money, max_size, metric_lines, title, tooltip, PRICE_AXIS, VOLUME_AXIS};
use crate::dataset::Preview;
use crate::snapshot::{Side, Snapshot};

const BAR: char = '█';
const GAP: &str = "   ";

/// Lines of one chart panel, each bar followed by its tooltip
fn panel(snapshot: &Snapshot, side: Side, width: usize) -> Vec<String> {
    let levels = snapshot.levels(side);
    let max = max_size(levels);

    let mut lines = vec![
        side.label().to_string(),
        format!("{PRICE_AXIS:>10} | {VOLUME_AXIS}"),
    ];
    if levels.is_empty() {
        lines.push(format!("{:>10} | (no levels)", "-"));
    }
    for level in levels {
        let bar: String = std::iter::repeat(BAR)
            .take(bar_len(level.size, max, width))
            .collect();
        lines.push(format!(
            "{:>10} | {bar:<width$} {}",
            format_money(level.price),
            tooltip(level)
        ));
    }
    lines
}

/// Render the two-panel chart with bids left, asks right, then the metrics
pub fn render(snapshot: &Snapshot, width: usize) -> String {
    let bids = panel(snapshot, Side::Bid, width);
    let asks = panel(snapshot, Side::Ask, width);
    let left_width = bids.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", title(snapshot));
    let _ = writeln!(out);
    for i in 0..bids.len().max(asks.len()) {
        let left = bids.get(i).map(String::as_str).unwrap_or("");
        let right = asks.get(i).map(String::as_str).unwrap_or("");
        let pad = left_width - left.chars().count();
        let line = format!("{left}{:pad$}{GAP}{right}", "");
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Bid-Ask Spread");
    let mut metrics = metric_lines(snapshot).into_iter();
    if let Some((label, value)) = metrics.next() {
        let _ = writeln!(out, "  {label}: {value}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Additional Information");
    for (label, value) in metrics {
        let _ = writeln!(out, "  {label}: {value}");
    }
    out
}

/// Aligned table of the preview rows with every column of the file
pub fn preview_table(preview: &Preview) -> String {
    let mut widths: Vec<usize> = preview.headers.iter().map(|h| h.chars().count()).collect();
    for row in &preview.rows {
        for (idx, value) in row.iter().enumerate() {
            let len = value.chars().count();
            match widths.get_mut(idx) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    let format_line = |cells: &[String]| -> String {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{v:>w$}"))
            .collect();
        line.join("  ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", format_line(preview.headers.as_slice()));
    for row in &preview.rows {
        let _ = writeln!(out, "{}", format_line(row.as_slice()));
    }
    out
}
