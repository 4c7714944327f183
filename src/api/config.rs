use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{MissingValuePolicy, RefreshPolicy, palette_color};
use crate::error::{HookError, HookResult};

pub const DEFAULT_CATEGORY_FIELD: &str = "category";
pub const DEFAULT_VALUE_FIELD: &str = "value";
pub const DEFAULT_TIME_FIELD: &str = "timestamp";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// Bar chart configuration read from the element's config attribute.
///
/// Field names that are absent, `null` or empty fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalChartConfig {
    pub x_field: Option<String>,
    pub y_field: Option<String>,
    pub missing_values: MissingValuePolicy,
    pub refresh: RefreshPolicy,
}

impl CategoricalChartConfig {
    #[must_use]
    pub fn category_field(&self) -> &str {
        non_empty(self.x_field.as_deref()).unwrap_or(DEFAULT_CATEGORY_FIELD)
    }

    #[must_use]
    pub fn value_field(&self) -> &str {
        non_empty(self.y_field.as_deref()).unwrap_or(DEFAULT_VALUE_FIELD)
    }
}

/// One configured line: source field plus optional label and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub field: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Legend label: explicit label, else the field name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        non_empty(self.label.as_deref()).unwrap_or(self.field.as_str())
    }

    /// Line color: explicit color, else the palette entry for `index`.
    #[must_use]
    pub fn line_color(&self, index: usize) -> &str {
        non_empty(self.color.as_deref()).unwrap_or_else(|| palette_color(index))
    }
}

/// Line chart configuration read from the element's config attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeriesChartConfig {
    pub x_field: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub y_fields: Vec<SeriesDescriptor>,
    pub refresh: RefreshPolicy,
}

impl TimeSeriesChartConfig {
    #[must_use]
    pub fn time_field(&self) -> &str {
        non_empty(self.x_field.as_deref()).unwrap_or(DEFAULT_TIME_FIELD)
    }

    #[must_use]
    pub fn series_fields(&self) -> Vec<&str> {
        self.y_fields
            .iter()
            .map(|descriptor| descriptor.field.as_str())
            .collect()
    }

    pub fn validate(&self) -> HookResult<()> {
        if let Some(index) = self.y_fields.iter().position(|d| d.field.is_empty()) {
            return Err(HookError::InvalidData(format!(
                "y_fields[{index}].field must not be empty"
            )));
        }
        Ok(())
    }
}
