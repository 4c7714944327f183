use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::error::{HookError, HookResult};

pub const BAR_CHART_EVENT_PREFIX: &str = "bar_chart_data_";
pub const LINE_CHART_EVENT_PREFIX: &str = "chart_data_";

/// Element-scoped event name: fixed prefix followed by the widget id.
#[must_use]
pub fn event_name(prefix: &str, widget_id: &str) -> String {
    format!("{prefix}{widget_id}")
}

/// Payload of a host data push: `{ "data": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPushEvent {
    #[serde(default)]
    pub data: Option<Dataset>,
}

impl DataPushEvent {
    #[must_use]
    pub fn new(data: Dataset) -> Self {
        Self { data: Some(data) }
    }

    pub fn from_json_str(payload: &str) -> HookResult<Self> {
        serde_json::from_str(payload).map_err(HookError::MalformedPayload)
    }

    pub fn from_value(payload: serde_json::Value) -> HookResult<Self> {
        serde_json::from_value(payload).map_err(HookError::MalformedPayload)
    }

    /// Dataset carried by the event, or `None` when there is nothing to draw.
    ///
    /// An empty sequence is treated like an absent one: pushes never clear a
    /// chart.
    #[must_use]
    pub fn into_rows(self) -> Option<Dataset> {
        self.data.filter(|rows| !rows.is_empty())
    }
}
