//! Criterion benchmarks for calendar layout and zone bars

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rolltrack::services::{calendar, zones};
use rolltrack::types::{DayRecord, ZoneDurations};
use std::hint::black_box;

/// Contiguous run of synthetic training days
fn synthetic_days(len: usize) -> Vec<DayRecord> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 4).unwrap();
    (0..len)
        .map(|i| {
            let count = (i % 4 == 0) as u32 + (i % 7 == 3) as u32;
            DayRecord::new(start + Duration::days(i as i64), count, (i % 6) as f64 * 0.9)
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_layout");

    for len in [90, 365, 3650] {
        let days = synthetic_days(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &days, |b, days| {
            b.iter(|| calendar::layout(black_box(days)))
        });
    }

    group.finish();
}

fn bench_color_for(c: &mut Criterion) {
    let days = synthetic_days(365);
    c.bench_function("color_for_year", |b| {
        b.iter(|| {
            for day in &days {
                black_box(calendar::color_for(day.count, day.intensity));
            }
        })
    });
}

fn bench_zone_bar(c: &mut Criterion) {
    let zones = ZoneDurations::new([9, 120_000, 900_000, 300_000, 60_000]);
    c.bench_function("zone_bar_render", |b| {
        b.iter(|| zones::render(black_box(&zones)))
    });
}

criterion_group!(benches, bench_layout, bench_color_for, bench_zone_bar);
criterion_main!(benches);
