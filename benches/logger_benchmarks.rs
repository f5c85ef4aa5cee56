//! Criterion benchmarks for linelog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linelog::prelude::*;

fn sample_value() -> LogValue {
    LogValue::map(vec![
        ("user", LogValue::from("alice")),
        ("attempts", LogValue::from(3)),
        (
            "tags",
            LogValue::array(vec![LogValue::from("auth"), LogValue::from("retry")]),
        ),
    ])
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let value = sample_value();
    group.bench_function("structured_map", |b| {
        b.iter(|| linelog::render(black_box(&value)));
    });

    let text = LogValue::from("plain message");
    group.bench_function("string_passthrough", |b| {
        b.iter(|| linelog::render(black_box(&text)));
    });

    group.finish();
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");
    group.throughput(Throughput::Elements(1));

    let value = sample_value();
    group.bench_function("build_info", |b| {
        b.iter(|| {
            let record =
                linelog::build_record(LogLevel::Info, black_box(&value), &[], Some("api"), None);
            black_box(linelog::stringify(&record))
        });
    });

    group.finish();
}

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let text_logger = Logger::builder()
        .env_source(Box::new(MapEnv::new().with("NO_COLOR", "1")))
        .min_level(LogLevel::Debug)
        .primary_stream(linelog::discard())
        .secondary_stream(linelog::discard())
        .build()
        .expect("logger builds");

    group.bench_function("text_info", |b| {
        b.iter(|| text_logger.info(black_box("request handled")));
    });

    group.bench_function("text_filtered_out", |b| {
        text_logger.set_min_level(LogLevel::Error);
        b.iter(|| text_logger.debug(black_box("dropped")));
    });

    let jsonl_logger = Logger::builder()
        .env_source(Box::new(MapEnv::new().with("NO_COLOR", "1")))
        .format(OutputFormat::Jsonl)
        .primary_stream(linelog::discard())
        .secondary_stream(linelog::discard())
        .build()
        .expect("logger builds");

    group.bench_function("jsonl_info", |b| {
        b.iter(|| jsonl_logger.info(black_box("request handled")));
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_record, bench_logging);
criterion_main!(benches);
