//! Benchmarks for Aevum formatting operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aevum_core::{Timespan, TimespanBuilder};
use aevum_format::TimespanFormatter;

fn sample_span() -> Timespan {
    TimespanBuilder::new()
        .years(12)
        .days(100)
        .hours(7)
        .minutes(40)
        .seconds(5)
        .millis(123)
        .nanos(456)
        .yoctos(789)
        .build()
        .unwrap()
}

fn bench_general_long(c: &mut Criterion) {
    let formatter = TimespanFormatter::new();
    let span = sample_span();

    c.bench_function("format_general_long", |b| {
        b.iter(|| black_box(formatter.format(black_box(&span), "F")))
    });
}

fn bench_extended_pattern(c: &mut Criterion) {
    let formatter = TimespanFormatter::new();
    let span = sample_span();

    c.bench_function("format_extended", |b| {
        b.iter(|| black_box(formatter.format(black_box(&span), "E")))
    });
}

fn bench_extensible(c: &mut Criterion) {
    let formatter = TimespanFormatter::new();
    let span = sample_span();

    c.bench_function("format_extensible", |b| {
        b.iter(|| black_box(formatter.format(black_box(&span), "X")))
    });
}

fn bench_format_into(c: &mut Criterion) {
    let formatter = TimespanFormatter::new();
    let span = sample_span();
    let mut buf = [0u8; 128];

    c.bench_function("format_into_buffer", |b| {
        b.iter(|| {
            let written = formatter
                .format_into(black_box(&span), "T", &mut buf)
                .unwrap();
            black_box(&buf[..written]);
        })
    });
}

criterion_group!(
    benches,
    bench_general_long,
    bench_extended_pattern,
    bench_extensible,
    bench_format_into,
);
criterion_main!(benches);
