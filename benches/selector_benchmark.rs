//! Benchmarks for dataset loading and snapshot selection

use book_viewer::Dataset;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_csv(rows: usize) -> String {
    let mut csv = String::from("Time,Price,BidAskSpread,Variance");
    for i in 1..=5 {
        csv.push_str(&format!(",BidPrice_{i},BidSize_{i},AskPrice_{i},AskSize_{i}"));
    }
    csv.push('\n');

    for r in 0..rows {
        let time = r as f64 * 0.01;
        let mid = 100.0 + (r % 50) as f64 * 0.1;
        csv.push_str(&format!("{time},{mid},0.2,0.0004"));
        for i in 1..=5 {
            let offset = i as f64 * 0.1;
            csv.push_str(&format!(",{},{},{},{}", mid - offset, 10 * i, mid + offset, 12 * i));
        }
        csv.push('\n');
    }
    csv
}

fn benchmark_load(c: &mut Criterion) {
    let csv = create_csv(10_000);

    c.bench_function("load_10k_rows", |b| {
        b.iter(|| Dataset::load(black_box(csv.as_bytes())).unwrap())
    });
}

fn benchmark_select(c: &mut Criterion) {
    let dataset = Dataset::load(create_csv(10_000).as_bytes()).unwrap();
    let range = dataset.range().unwrap();
    let mid = (range.min + range.max) / 2.0;

    c.bench_function("select_10k_rows", |b| {
        b.iter(|| black_box(dataset.select(black_box(mid)).unwrap()))
    });

    c.bench_function("range_10k_rows", |b| {
        b.iter(|| black_box(dataset.range().unwrap()))
    });
}

criterion_group!(benches, benchmark_load, benchmark_select);
criterion_main!(benches);
