//! Widgets for the interactive viewer

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::App;
use crate::render::{self, bar_len, format_money, format_time, max_size, tooltip};
use crate::snapshot::{Side, Snapshot};

/// Width of the price label in front of each bar
const PRICE_LABEL_WIDTH: usize = 12;

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App) {
    let metrics = app.snapshot().map(metrics_lines).unwrap_or_default();
    // Metrics lines plus the panel borders
    let metrics_height = if metrics.is_empty() { 0 } else { metrics.len() as u16 + 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Min(8),                 // Chart
            Constraint::Length(metrics_height), // Metrics
            Constraint::Length(3),              // Slider
            Constraint::Length(1),              // Key help
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    match app.snapshot() {
        Ok(snapshot) => {
            draw_chart(frame, snapshot, chunks[1]);
            let block = Block::default().borders(Borders::ALL).title(" Bid-Ask Spread ");
            frame.render_widget(Paragraph::new(metrics).block(block), chunks[2]);
        }
        Err(message) => {
            let error = Paragraph::new(format!(" {message}"))
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" Order Book "));
            frame.render_widget(error, chunks[1]);
        }
    }
    draw_slider(frame, app, chunks[3]);
    draw_footer(frame, chunks[4]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.snapshot() {
        Ok(snapshot) => format!(" {} | Rows: {}", render::title(snapshot), app.rows()),
        Err(_) => format!(" Order Book | Rows: {}", app.rows()),
    };
    let header = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Order Book Simulation "));
    frame.render_widget(header, area);
}

fn draw_chart(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_side(frame, snapshot, Side::Bid, columns[0]);
    draw_side(frame, snapshot, Side::Ask, columns[1]);
}

fn draw_side(frame: &mut Frame, snapshot: &Snapshot, side: Side, area: Rect) {
    let color = match side {
        Side::Bid => Color::Green,
        Side::Ask => Color::Red,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", side.label()))
        .title_bottom(format!(" {} ", render::VOLUME_AXIS));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let levels = snapshot.levels(side);
    if levels.is_empty() {
        let empty = Paragraph::new(" No complete levels").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // Each level takes a bar line and a tooltip line
    let bar_width = (inner.width as usize).saturating_sub(PRICE_LABEL_WIDTH + 1);
    let max = max_size(levels);
    let mut lines = Vec::with_capacity(levels.len() * 2);
    for level in levels {
        lines.push(Line::from(vec![
            Span::raw(format!("{:>w$} ", format_money(level.price), w = PRICE_LABEL_WIDTH)),
            Span::styled(
                "█".repeat(bar_len(level.size, max, bar_width)),
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{:w$} {}", "", tooltip(level), w = PRICE_LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Scalar metrics of the row followed by the level aggregates
fn metrics_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let metrics = snapshot.metrics();
    let mut lines: Vec<Line> = render::metric_lines(snapshot)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!(" {label}: "), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(value),
            ])
        })
        .collect();

    let price = |p: Option<f64>| or_dash(p.map(format_money));
    let dim = Style::default().fg(Color::DarkGray);
    lines.push(Line::from(Span::styled(
        format!(
            " Best bid: {} | Best ask: {} | Mid: {}",
            price(metrics.best_bid),
            price(metrics.best_ask),
            price(metrics.mid_price)
        ),
        dim,
    )));
    lines.push(Line::from(Span::styled(
        format!(
            " Levels: {} bid / {} ask | Depth: {} bid / {} ask",
            metrics.bid_levels, metrics.ask_levels, metrics.bid_depth, metrics.ask_depth
        ),
        dim,
    )));
    lines.push(Line::from(Span::styled(
        format!(
            " Imbalance: {} | Volume ratio: {}",
            or_dash(metrics.imbalance.map(|i| format!("{i:+.3}"))),
            or_dash(metrics.volume_ratio.map(|v| format!("{v:.3}")))
        ),
        dim,
    )));
    lines
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn draw_slider(frame: &mut Frame, app: &App, area: Rect) {
    let slider = app.slider();
    let range = slider.range();
    let label = format!(
        "{} [{} .. {}] {}/{}",
        format_time(slider.value()),
        format_time(range.min),
        format_time(range.max),
        slider.position() + 1,
        slider.positions()
    );
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Select Time Step "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(slider.ratio())
        .label(label);
    frame.render_widget(gauge, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(" q=quit ←/→=step PgUp/PgDn=±10 Home/End=first/last")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
