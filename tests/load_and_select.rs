//! End-to-end tests: CSV file on disk through load, range and select

use std::io::Write;

use book_viewer::render;
use book_viewer::{Dataset, Level, Side, TimeSlider, ViewerError};
use tempfile::NamedTempFile;

const HEADER: &str = "Time,Price,BidAskSpread,Variance,\
BidPrice_1,BidSize_1,AskPrice_1,AskSize_1,\
BidPrice_2,BidSize_2,AskPrice_2,AskSize_2,\
BidPrice_3,BidSize_3,AskPrice_3,AskSize_3,\
BidPrice_4,BidSize_4,AskPrice_4,AskSize_4,\
BidPrice_5,BidSize_5,AskPrice_5,AskSize_5,\
BidPrice_6,BidSize_6,AskPrice_6,AskSize_6";

fn write_csv(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{body}").unwrap();
    file.flush().unwrap();
    file
}

fn full_row(time: f64, mid: f64) -> String {
    let mut cells = vec![
        time.to_string(),
        mid.to_string(),
        "0.5".to_string(),
        "0.001".to_string(),
    ];
    for i in 1..=6 {
        let offset = i as f64 * 0.25;
        cells.push((mid - offset).to_string());
        cells.push((10 * i).to_string());
        cells.push((mid + offset).to_string());
        cells.push((5 * i).to_string());
    }
    cells.join(",")
}

#[test]
fn nearest_row_from_file() {
    let body = format!(
        "{HEADER}\n{}\n{}\n{}\n",
        full_row(2.0, 102.0),
        full_row(0.0, 100.0),
        full_row(1.0, 101.0)
    );
    let file = write_csv(&body);

    let dataset = Dataset::from_path(file.path()).unwrap();
    let snapshot = dataset.select(0.6).unwrap();
    assert_eq!(snapshot.time, 1.0);
    assert_eq!(snapshot.price, 101.0);
    assert_eq!(snapshot.spread, 0.5);
    assert_eq!(snapshot.variance, Some(0.001));

    // Level 6 columns are ignored
    assert_eq!(snapshot.bids.len(), 5);
    assert_eq!(snapshot.asks.len(), 5);
    assert_eq!(
        snapshot.bids[0],
        Level {
            price: 100.75,
            size: 10.0
        }
    );
    assert_eq!(snapshot.sizes(Side::Ask), vec![5.0, 10.0, 15.0, 20.0, 25.0]);
}

#[test]
fn range_and_slider_from_file() {
    let body = format!(
        "{HEADER}\n{}\n{}\n{}\n{}\n",
        full_row(0.0, 100.0),
        full_row(1.0, 100.0),
        full_row(3.0, 100.0),
        full_row(4.0, 100.0)
    );
    let file = write_csv(&body);
    let dataset = Dataset::from_path(file.path()).unwrap();

    let range = dataset.range().unwrap();
    assert_eq!((range.min, range.max, range.step), (0.0, 4.0, 1.0));

    // Slider position 2 sits at 2.0, equidistant from 1.0 and 3.0
    let mut slider = TimeSlider::new(range);
    slider.forward(2);
    assert_eq!(slider.value(), 2.0);
    assert_eq!(dataset.select(slider.value()).unwrap().time, 1.0);
}

#[test]
fn partial_levels_are_skipped() {
    let body = "Time,Price,BidAskSpread,Variance,BidPrice_1,BidSize_1,BidPrice_2,BidSize_2\n\
                0.0,100,0.5,,100,,99,50\n";
    let file = write_csv(body);
    let dataset = Dataset::from_path(file.path()).unwrap();
    let snapshot = dataset.select(0.0).unwrap();
    assert_eq!(snapshot.prices(Side::Bid), vec![99.0]);
    assert_eq!(snapshot.sizes(Side::Bid), vec![50.0]);
    assert!(snapshot.asks.is_empty());
    assert_eq!(snapshot.variance, None);
}

#[test]
fn identical_timestamps() {
    let body = "Time,Price,BidAskSpread\n5.0,100,0.5\n5.0,101,0.6\n5.0,102,0.7\n";
    let file = write_csv(body);
    let dataset = Dataset::from_path(file.path()).unwrap();

    let range = dataset.range().unwrap();
    assert_eq!((range.min, range.max, range.step), (5.0, 5.0, 0.0));
    assert_eq!(TimeSlider::new(range).positions(), 1);

    for requested in [-1.0, 5.0, 42.0] {
        let snapshot = dataset.select(requested).unwrap();
        assert_eq!(snapshot.row_index, 0);
        assert_eq!(snapshot.price, 100.0);
    }
}

#[test]
fn missing_spread_column() {
    let body = "Time,Price\n0.0,100\n";
    let file = write_csv(body);
    let dataset = Dataset::from_path(file.path()).unwrap();
    let err = dataset.select(0.0).unwrap_err();
    assert!(matches!(
        err,
        ViewerError::MissingField {
            field: "BidAskSpread",
            ..
        }
    ));
}

#[test]
fn missing_time_column() {
    let file = write_csv("Price,BidAskSpread\n100,0.5\nnot,even,valid\n");
    assert!(matches!(
        Dataset::from_path(file.path()),
        Err(ViewerError::ParseError(_))
    ));
}

#[test]
fn empty_dataset() {
    let file = write_csv(&format!("{HEADER}\n"));
    let dataset = Dataset::from_path(file.path()).unwrap();
    assert!(dataset.is_empty());
    assert!(matches!(dataset.range(), Err(ViewerError::EmptyDataset)));
    assert!(matches!(dataset.select(0.0), Err(ViewerError::EmptyDataset)));
}

#[test]
fn text_render_from_file() {
    let body = format!("{HEADER}\n{}\n", full_row(0.25, 100.0));
    let file = write_csv(&body);
    let dataset = Dataset::from_path(file.path()).unwrap();
    let out = render::text::render(&dataset.select(0.0).unwrap(), 20);
    assert!(out.starts_with("Order Book at Time: 0.2500"));
    assert!(out.contains("Spread: $0.50"));
    assert!(out.contains("Variance: 0.0010"));
}
