use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::Row;
use super::timestamp::{datetime_to_unix_millis, parse_timestamp};
use super::value::numeric;

/// One line-series sample.
///
/// `x` is Unix epoch milliseconds, or `None` when the row's timestamp could
/// not be parsed. `y` holds numeric values as JSON floats and any other
/// present value unchanged; the chart library decides how to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub x: Option<f64>,
    pub y: Value,
}

impl TimePoint {
    #[must_use]
    pub fn new(x: f64, y: impl Into<Value>) -> Self {
        Self {
            x: Some(x),
            y: y.into(),
        }
    }

    /// A sample whose timestamp is unknown.
    #[must_use]
    pub fn untimed(y: impl Into<Value>) -> Self {
        Self {
            x: None,
            y: y.into(),
        }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, y: impl Into<Value>) -> Self {
        Self::new(datetime_to_unix_millis(time), y)
    }

    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.x
            .and_then(|millis| DateTime::from_timestamp_millis(millis as i64))
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.x.is_some()
    }

    /// The sample value as a number, when it is one.
    #[must_use]
    pub fn y_value(&self) -> Option<f64> {
        numeric(&self.y)
    }
}

/// Orders timed points ascending by `x`, untimed points after all of them.
fn time_order(a: &TimePoint, b: &TimePoint) -> Ordering {
    match (a.x, b.x) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sample_value(value: &Value) -> Value {
    numeric(value).map_or_else(|| value.clone(), Value::from)
}

/// Builds the points of one line series from `rows`.
///
/// Every row whose `y_field` is present and not null yields exactly one
/// point. Points are stably sorted ascending by time; rows whose `x_field`
/// is missing or unparseable keep their relative order at the end with no
/// `x`.
#[must_use]
pub fn prepare_time_points(rows: &[Row], x_field: &str, y_field: &str) -> Vec<TimePoint> {
    let mut points: Vec<TimePoint> = rows
        .iter()
        .filter_map(|row| {
            let y = row.get(y_field).filter(|value| !value.is_null())?;
            let y = sample_value(y);
            Some(match row.get(x_field).and_then(parse_timestamp) {
                Some(time) => TimePoint::from_datetime(time, y),
                None => TimePoint::untimed(y),
            })
        })
        .collect();

    let untimed = points.iter().filter(|point| !point.is_timed()).count();
    if untimed > 0 {
        debug!(
            x_field,
            y_field,
            untimed,
            "placed points without a parseable timestamp last"
        );
    }

    points.sort_by(time_order);
    points
}

/// Builds one point list per y field, in the order given.
#[must_use]
pub fn prepare_time_series(rows: &[Row], x_field: &str, y_fields: &[&str]) -> Vec<Vec<TimePoint>> {
    #[cfg(feature = "parallel-prep")]
    {
        use rayon::prelude::*;

        y_fields
            .par_iter()
            .map(|y_field| prepare_time_points(rows, x_field, y_field))
            .collect()
    }

    #[cfg(not(feature = "parallel-prep"))]
    {
        y_fields
            .iter()
            .map(|y_field| prepare_time_points(rows, x_field, y_field))
            .collect()
    }
}
