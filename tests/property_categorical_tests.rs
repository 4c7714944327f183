use chart_hooks::core::{MissingValuePolicy, Row, UNKNOWN_CATEGORY, prepare_categorical};
use proptest::prelude::*;

proptest! {
    #[test]
    fn one_label_and_value_per_row_in_order(
        samples in proptest::collection::vec(
            (proptest::option::of("[a-z]{1,8}"), proptest::option::of(-1_000i64..1_000)),
            0..64
        )
    ) {
        let rows: Vec<Row> = samples
            .iter()
            .map(|(category, value)| {
                let mut row = Row::new();
                if let Some(category) = category {
                    row = row.with("category", category.clone());
                }
                if let Some(value) = value {
                    row = row.with("value", *value);
                }
                row
            })
            .collect();

        let series = prepare_categorical(&rows, "category", "value", MissingValuePolicy::Present);
        prop_assert_eq!(series.len(), rows.len());
        prop_assert_eq!(series.values.len(), rows.len());
        for (index, (category, value)) in samples.iter().enumerate() {
            let expected_label = category.as_deref().unwrap_or(UNKNOWN_CATEGORY);
            prop_assert_eq!(series.labels[index].as_str(), expected_label);
            prop_assert_eq!(series.values[index], value.unwrap_or(0) as f64);
        }
    }

    #[test]
    fn falsy_and_present_policies_agree_on_integer_values(
        values in proptest::collection::vec(-1_000i64..1_000, 0..64)
    ) {
        let rows: Vec<Row> = values
            .iter()
            .map(|value| Row::new().with("category", "c").with("value", *value))
            .collect();
        let present = prepare_categorical(&rows, "category", "value", MissingValuePolicy::Present);
        let falsy = prepare_categorical(&rows, "category", "value", MissingValuePolicy::Falsy);
        prop_assert_eq!(present, falsy);
    }
}
