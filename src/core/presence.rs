use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Row;

/// Decides which field values count as "missing" during category/value
/// extraction, where missing values are replaced with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Only absent fields and JSON `null` are missing. `0`, `false` and `""`
    /// are kept as real data.
    #[default]
    Present,
    /// Any falsy value is missing: absent, `null`, `false`, `0` and `""`.
    Falsy,
}

impl MissingValuePolicy {
    /// Returns the value of `field` unless this policy treats it as missing.
    #[must_use]
    pub fn lookup<'a>(self, row: &'a Row, field: &str) -> Option<&'a Value> {
        let value = row.get(field)?;
        let missing = match self {
            Self::Present => value.is_null(),
            Self::Falsy => is_falsy(value),
        };
        (!missing).then_some(value)
    }
}

#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
