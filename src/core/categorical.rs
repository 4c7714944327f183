use serde::{Deserialize, Serialize};

use super::value::{label_text, numeric};
use super::{MissingValuePolicy, Row};

/// Label used for rows without a usable category.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Parallel label/value arrays for a bar chart, one entry per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl CategoricalSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Reshapes rows into bar labels and values, preserving row order.
///
/// Missing categories become [`UNKNOWN_CATEGORY`]; missing or non-numeric
/// values become `0`. What counts as missing is decided by `policy`.
#[must_use]
pub fn prepare_categorical(
    rows: &[Row],
    x_field: &str,
    y_field: &str,
    policy: MissingValuePolicy,
) -> CategoricalSeries {
    let mut labels = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        labels.push(
            policy
                .lookup(row, x_field)
                .map_or_else(|| UNKNOWN_CATEGORY.to_owned(), label_text),
        );
        values.push(policy.lookup(row, y_field).and_then(numeric).unwrap_or(0.0));
    }
    CategoricalSeries { labels, values }
}
