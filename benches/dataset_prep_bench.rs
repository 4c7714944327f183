use chart_hooks::api::{
    CategoricalChartAdapter, ChartHook, DataPushEvent, ElementAttributes, TimeSeriesChartAdapter,
};
use chart_hooks::core::{MissingValuePolicy, Row, prepare_categorical, prepare_time_series};
use chart_hooks::render::RecordingBackend;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn metric_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let minute = (count - i) as i64;
            let time = chrono::DateTime::from_timestamp(1_700_000_000 + minute * 60, 0)
                .expect("valid generated time")
                .to_rfc3339();
            Row::new()
                .with("timestamp", time)
                .with("category", format!("c{}", i % 50))
                .with("value", i as f64 * 0.5)
                .with("cpu", (i % 100) as f64)
                .with("mem", (i % 7) as f64 * 10.0)
        })
        .collect()
}

fn bench_prepare_categorical_10k(c: &mut Criterion) {
    let rows = metric_rows(10_000);
    c.bench_function("prepare_categorical_10k", |b| {
        b.iter(|| {
            black_box(prepare_categorical(
                black_box(&rows),
                "category",
                "value",
                MissingValuePolicy::Present,
            ))
        })
    });
}

fn bench_prepare_time_series_10k(c: &mut Criterion) {
    let rows = metric_rows(10_000);
    c.bench_function("prepare_time_series_10k_x2", |b| {
        b.iter(|| {
            black_box(prepare_time_series(
                black_box(&rows),
                "timestamp",
                &["cpu", "mem"],
            ))
        })
    });
}

fn bench_adapter_push_cycle(c: &mut Criterion) {
    let rows = metric_rows(1_000);
    let bar_element = ElementAttributes::new("{}", "bench");
    let line_element = ElementAttributes::new(
        r#"{"y_fields": [{"field": "cpu"}, {"field": "mem"}]}"#,
        "bench",
    );
    let mut bar =
        CategoricalChartAdapter::mount(RecordingBackend::new(), &bar_element).expect("mount bar");
    let mut line = TimeSeriesChartAdapter::mount(RecordingBackend::new(), &line_element)
        .expect("mount line");

    c.bench_function("adapter_push_cycle_1k", |b| {
        b.iter(|| {
            bar.on_external_data_push(DataPushEvent::new(rows.clone()))
                .expect("bar push");
            line.on_external_data_push(DataPushEvent::new(rows.clone()))
                .expect("line push");
        })
    });
}

criterion_group!(
    benches,
    bench_prepare_categorical_10k,
    bench_prepare_time_series_10k,
    bench_adapter_push_cycle
);
criterion_main!(benches);
