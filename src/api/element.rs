use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::error::{HookError, HookResult};

pub const CONFIG_ATTRIBUTE: &str = "data-config";
pub const WIDGET_ID_ATTRIBUTE: &str = "data-widget-id";
pub const INITIAL_DATA_ATTRIBUTE: &str = "data-initial-data";

/// Attribute view of the host element an adapter is attached to.
///
/// `config` and `initial_data` hold raw JSON text exactly as the host
/// rendered it. `canvas` names the drawing surface inside the element, when
/// there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementAttributes {
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub widget_id: Option<String>,
    #[serde(default)]
    pub initial_data: Option<String>,
    #[serde(default)]
    pub canvas: Option<String>,
}

impl ElementAttributes {
    /// Element with a config, a widget id and a canvas named `<widget_id>-canvas`.
    #[must_use]
    pub fn new(config: impl Into<String>, widget_id: impl Into<String>) -> Self {
        let widget_id = widget_id.into();
        Self {
            config: Some(config.into()),
            canvas: Some(format!("{widget_id}-canvas")),
            widget_id: Some(widget_id),
            initial_data: None,
        }
    }

    #[must_use]
    pub fn with_initial_data(mut self, initial_data: impl Into<String>) -> Self {
        self.initial_data = Some(initial_data.into());
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, canvas: impl Into<String>) -> Self {
        self.canvas = Some(canvas.into());
        self
    }

    #[must_use]
    pub fn without_canvas(mut self) -> Self {
        self.canvas = None;
        self
    }

    pub fn parse_config<T: DeserializeOwned>(&self) -> HookResult<T> {
        let raw = self
            .config
            .as_deref()
            .ok_or(HookError::MissingAttribute(CONFIG_ATTRIBUTE))?;
        serde_json::from_str(raw).map_err(|source| HookError::MalformedAttribute {
            attribute: CONFIG_ATTRIBUTE,
            source,
        })
    }

    pub fn require_widget_id(&self) -> HookResult<&str> {
        self.widget_id
            .as_deref()
            .ok_or(HookError::MissingAttribute(WIDGET_ID_ATTRIBUTE))
    }

    /// Initial dataset, if the element carries one.
    ///
    /// An absent or empty attribute and a JSON `null` all mean "no data".
    pub fn parse_initial_data(&self) -> HookResult<Option<Dataset>> {
        match self.initial_data.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => serde_json::from_str::<Option<Dataset>>(raw).map_err(|source| {
                HookError::MalformedAttribute {
                    attribute: INITIAL_DATA_ATTRIBUTE,
                    source,
                }
            }),
        }
    }
}
