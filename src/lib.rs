//! ORPflow - Order Book Snapshot Viewer Library
//!
//! Loads simulated order book snapshots from a CSV export, finds the row
//! nearest to a requested time and renders its bid/ask ladder.

pub mod config;
pub mod dataset;
pub mod error;
pub mod parser;
pub mod render;
pub mod slider;
pub mod snapshot;
pub mod viewer;

pub use config::Config;
pub use dataset::{Dataset, Row, TimeRange, DEPTH_LEVELS};
pub use error::{Result, ViewerError};
pub use slider::TimeSlider;
pub use snapshot::{Level, Side, Snapshot, SnapshotMetrics};
