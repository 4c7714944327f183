use serde::{Deserialize, Serialize};

use crate::error::{HookError, HookResult};

use super::ChartSnapshot;

pub const CHART_SNAPSHOTS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotsJsonContractV1 {
    pub schema_version: u32,
    pub charts: Vec<ChartSnapshot>,
}

impl ChartSnapshotsJsonContractV1 {
    #[must_use]
    pub fn new(charts: Vec<ChartSnapshot>) -> Self {
        Self {
            schema_version: CHART_SNAPSHOTS_JSON_SCHEMA_V1,
            charts,
        }
    }

    pub fn to_json_pretty(&self) -> HookResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            HookError::InvalidData(format!("failed to serialize chart snapshots v1: {e}"))
        })
    }

    /// Accepts either the versioned envelope or a bare snapshot array.
    pub fn from_json_compat_str(input: &str) -> HookResult<Self> {
        if let Ok(charts) = serde_json::from_str::<Vec<ChartSnapshot>>(input) {
            return Ok(Self::new(charts));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            HookError::InvalidData(format!("failed to parse chart snapshots payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOTS_JSON_SCHEMA_V1 {
            return Err(HookError::InvalidData(format!(
                "unsupported chart snapshots schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}
