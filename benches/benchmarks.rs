//! Performance benchmarks for status-report.
//!
//! Covers phase classification, progress aggregation and full report
//! rendering.
//!
//! Run with: `cargo bench`

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use status_report::{classify, Config, ReportRenderer, Schedule};

fn instant(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let start = instant(1, 31);
    let end = instant(2, 2);

    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(instant(2, 1)), black_box(start), black_box(end)));
    });
}

fn bench_progress(c: &mut Criterion) {
    let schedule = Schedule::deployment().unwrap();
    let now = instant(2, 1);

    c.bench_function("overall_progress", |b| {
        b.iter(|| black_box(&schedule).overall_progress(black_box(now)));
    });
}

fn bench_render(c: &mut Criterion) {
    let schedule = Schedule::deployment().unwrap();
    let config = Config::default();
    let renderer = ReportRenderer::new(&schedule, &config);

    let mut group = c.benchmark_group("render");
    for (label, now) in [
        ("before", instant(1, 15)),
        ("during", instant(2, 1) + Duration::hours(12)),
        ("after", instant(2, 15)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &now, |b, &now| {
            b.iter(|| renderer.render(black_box(now)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_progress, bench_render);
criterion_main!(benches);
