//! Recorded host lifecycles that can be replayed through a [`HookRegistry`].
//!
//! ```json
//! {
//!   "steps": [
//!     {"action": "mount", "element": "sales", "hook": "BarChart",
//!      "attributes": {"config": {"x_field": "region"}, "widget_id": "7",
//!                     "initial_data": [{"region": "north", "value": 3}]}},
//!     {"action": "push", "event": "bar_chart_data_7", "payload": {"data": []}},
//!     {"action": "unmount", "element": "sales"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::{DataPushEvent, ElementAttributes};
use crate::error::{HookError, HookResult};
use crate::render::ChartBackend;

use super::HookRegistry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TraceStep {
    Mount {
        element: String,
        hook: String,
        attributes: TraceAttributes,
    },
    Push {
        event: String,
        payload: Value,
    },
    Patch {
        element: String,
        attributes: TraceAttributes,
    },
    Unmount {
        element: String,
    },
}

/// Element attributes with JSON-valued fields inlined rather than encoded
/// as strings.
///
/// When `canvas` is true the element gets a canvas named
/// `<element>-canvas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceAttributes {
    #[serde(default)]
    pub config: Option<Value>,
    #[serde(default)]
    pub widget_id: Option<String>,
    #[serde(default)]
    pub initial_data: Option<Value>,
    #[serde(default = "default_has_canvas")]
    pub canvas: bool,
}

fn default_has_canvas() -> bool {
    true
}

impl TraceAttributes {
    #[must_use]
    pub fn to_element(&self, element_id: &str) -> ElementAttributes {
        ElementAttributes {
            config: self.config.as_ref().map(Value::to_string),
            widget_id: self.widget_id.clone(),
            initial_data: self.initial_data.as_ref().map(Value::to_string),
            canvas: self.canvas.then(|| format!("{element_id}-canvas")),
        }
    }
}

impl Trace {
    pub fn from_json_str(input: &str) -> HookResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| HookError::InvalidData(format!("invalid trace: {err}")))
    }

    /// Runs every step against `registry` in order, stopping at the first
    /// failing step.
    pub fn replay<B>(&self, registry: &mut HookRegistry<B>) -> HookResult<()>
    where
        B: ChartBackend + Clone + 'static,
    {
        for (index, step) in self.steps.iter().enumerate() {
            step.apply(registry).map_err(|source| HookError::TraceStep {
                index,
                source: Box::new(source),
            })?;
        }
        debug!(steps = self.steps.len(), "replayed trace");
        Ok(())
    }
}

impl TraceStep {
    pub fn apply<B>(&self, registry: &mut HookRegistry<B>) -> HookResult<()>
    where
        B: ChartBackend + Clone + 'static,
    {
        match self {
            Self::Mount {
                element,
                hook,
                attributes,
            } => registry.mount(element, hook, &attributes.to_element(element)),
            Self::Push { event, payload } => {
                registry.push(event, DataPushEvent::from_value(payload.clone())?)?;
                Ok(())
            }
            Self::Patch {
                element,
                attributes,
            } => {
                registry.patch(element, &attributes.to_element(element))?;
                Ok(())
            }
            Self::Unmount { element } => registry.unmount(element),
        }
    }
}
