use chart_hooks::api::{
    CategoricalChartAdapter, ChartHook, ElementAttributes, IgnoreReason, TimeSeriesChartAdapter,
    UpdateOutcome,
};
use chart_hooks::render::RecordingBackend;
use serde_json::json;

fn bar_rows(values: &[i64]) -> String {
    let rows: Vec<_> = values
        .iter()
        .enumerate()
        .map(|(i, v)| json!({"category": format!("c{i}"), "value": v}))
        .collect();
    serde_json::Value::Array(rows).to_string()
}

fn mounted_bar(
    config: &str,
    values: &[i64],
) -> (CategoricalChartAdapter<RecordingBackend>, RecordingBackend) {
    let backend = RecordingBackend::new();
    let element = ElementAttributes::new(config, "w").with_initial_data(bar_rows(values));
    let adapter = CategoricalChartAdapter::mount(backend.clone(), &element).expect("mount");
    (adapter, backend)
}

#[test]
fn equal_row_count_does_not_redraw() {
    let (mut adapter, backend) = mounted_bar("{}", &[1, 2]);
    let patched = ElementAttributes::new("{}", "w").with_initial_data(bar_rows(&[8, 9]));

    let outcome = adapter.on_host_patch(&patched).expect("patch");
    assert_eq!(outcome, UpdateOutcome::Ignored(IgnoreReason::Unchanged));
    let snapshot = backend.snapshot(0).expect("chart");
    assert_eq!(snapshot.update_count, 0);
    assert_eq!(
        snapshot.spec.data.datasets[0].data.as_values(),
        Some(&[1.0, 2.0][..])
    );
}

#[test]
fn one_row_more_or_less_redraws() {
    for next in [&[1, 2, 3][..], &[7][..]] {
        let (mut adapter, backend) = mounted_bar("{}", &[1, 2]);
        let patched = ElementAttributes::new("{}", "w").with_initial_data(bar_rows(next));

        let outcome = adapter.on_host_patch(&patched).expect("patch");
        assert_eq!(outcome, UpdateOutcome::Applied);
        assert_eq!(adapter.dataset().len(), next.len());
        let snapshot = backend.snapshot(0).expect("chart");
        assert_eq!(snapshot.update_count, 1);
        assert_eq!(snapshot.spec.data.labels.len(), next.len());
    }
}

#[test]
fn patch_without_initial_data_is_ignored() {
    let (mut adapter, backend) = mounted_bar("{}", &[1, 2]);
    for patched in [
        ElementAttributes::new("{}", "w"),
        ElementAttributes::new("{}", "w").with_initial_data(""),
    ] {
        let outcome = adapter.on_host_patch(&patched).expect("patch");
        assert_eq!(outcome, UpdateOutcome::Ignored(IgnoreReason::NoData));
    }
    assert_eq!(backend.snapshot(0).expect("chart").update_count, 0);
}

#[test]
fn patch_to_empty_rows_does_not_clear_the_chart() {
    let (mut adapter, backend) = mounted_bar("{}", &[1, 2]);
    let patched = ElementAttributes::new("{}", "w").with_initial_data("[]");
    let outcome = adapter.on_host_patch(&patched).expect("patch");
    assert_eq!(outcome, UpdateOutcome::Ignored(IgnoreReason::NoData));
    assert_eq!(adapter.dataset().len(), 2);
    assert_eq!(backend.snapshot(0).expect("chart").update_count, 0);
}

#[test]
fn malformed_patch_data_is_an_error() {
    let (mut adapter, _backend) = mounted_bar("{}", &[1]);
    let patched = ElementAttributes::new("{}", "w").with_initial_data("[1,");
    assert!(adapter.on_host_patch(&patched).is_err());
}

#[test]
fn content_policy_detects_same_length_changes() {
    let (mut adapter, backend) = mounted_bar(r#"{"refresh": "content"}"#, &[1, 2]);

    let same = ElementAttributes::new("{}", "w").with_initial_data(bar_rows(&[1, 2]));
    assert_eq!(
        adapter.on_host_patch(&same).expect("patch"),
        UpdateOutcome::Ignored(IgnoreReason::Unchanged)
    );

    let changed = ElementAttributes::new("{}", "w").with_initial_data(bar_rows(&[8, 9]));
    assert_eq!(adapter.on_host_patch(&changed).expect("patch"), UpdateOutcome::Applied);
    let snapshot = backend.snapshot(0).expect("chart");
    assert_eq!(snapshot.update_count, 1);
    assert_eq!(
        snapshot.spec.data.datasets[0].data.as_values(),
        Some(&[8.0, 9.0][..])
    );
}

#[test]
fn line_chart_uses_the_same_row_count_rule() {
    let backend = RecordingBackend::new();
    let config = r#"{"y_fields": [{"field": "cpu"}]}"#;
    let rows = json!([{"timestamp": "2024-05-01T10:00:00Z", "cpu": 1}]);
    let element = ElementAttributes::new(config, "m").with_initial_data(rows.to_string());
    let mut adapter = TimeSeriesChartAdapter::mount(backend.clone(), &element).expect("mount");

    let same_len = json!([{"timestamp": "2024-05-01T11:00:00Z", "cpu": 5}]);
    let patched = ElementAttributes::new(config, "m").with_initial_data(same_len.to_string());
    assert_eq!(
        adapter.on_host_patch(&patched).expect("patch"),
        UpdateOutcome::Ignored(IgnoreReason::Unchanged)
    );

    let longer = json!([
        {"timestamp": "2024-05-01T10:00:00Z", "cpu": 1},
        {"timestamp": "2024-05-01T10:01:00Z", "cpu": 2}
    ]);
    let patched = ElementAttributes::new(config, "m").with_initial_data(longer.to_string());
    assert_eq!(adapter.on_host_patch(&patched).expect("patch"), UpdateOutcome::Applied);
    let snapshot = backend.snapshot(0).expect("chart");
    assert_eq!(snapshot.update_count, 1);
    assert_eq!(snapshot.spec.data.datasets[0].data.len(), 2);
}

#[test]
fn patch_after_dispose_is_a_no_op() {
    let (mut adapter, backend) = mounted_bar("{}", &[1, 2]);
    adapter.dispose();
    let patched = ElementAttributes::new("{}", "w").with_initial_data(bar_rows(&[1, 2, 3]));
    assert_eq!(
        adapter.on_host_patch(&patched).expect("patch"),
        UpdateOutcome::Ignored(IgnoreReason::NoChart)
    );
    assert_eq!(adapter.dataset().len(), 2);
    assert_eq!(backend.snapshot(0).expect("chart").update_count, 0);
}
