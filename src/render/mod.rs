mod chart_spec;
mod json_contract;
mod options;
mod recording;

pub use chart_spec::{
    BAR_BACKGROUND_COLOR, BAR_BORDER_COLOR, ChartData, ChartKind, ChartSpec, DatasetSpec,
    SeriesData,
};
pub use json_contract::{CHART_SNAPSHOTS_JSON_SCHEMA_V1, ChartSnapshotsJsonContractV1};
pub use options::{
    AnimationOptions, AxisOptions, ChartOptions, FontOptions, GridOptions, InteractionMode,
    InteractionOptions, LegendLabelOptions, LegendOptions, LegendPosition, PluginOptions,
    ScaleOptions, ScaleType, TickOptions, TimeAxisOptions, TimeUnit, TooltipOptions,
};
pub use recording::{ChartSnapshot, RecordingBackend, RecordingChart};

use serde::{Deserialize, Serialize};

use crate::error::HookResult;

/// How a chart redraws after its data was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Animate the transition using the configured animation options.
    Default,
    /// Redraw immediately without a transition.
    #[serde(rename = "none")]
    NoAnimation,
}

/// A live chart owned by exactly one adapter.
///
/// Adapters mutate the `ChartSpec` in place and then call `update`; backends only
/// redraw on `update`.
pub trait ChartInstance {
    fn spec(&self) -> &ChartSpec;
    fn spec_mut(&mut self) -> &mut ChartSpec;
    fn update(&mut self, mode: UpdateMode) -> HookResult<()>;
    /// Releases the chart. Further updates are invalid.
    fn destroy(&mut self);
}

/// Contract implemented by the charting library binding.
///
/// Rendering, scaling, animation and tooltips all live behind this trait;
/// adapters only hand over a fully materialized [`ChartSpec`].
pub trait ChartBackend {
    type Instance: ChartInstance;

    fn create(&mut self, canvas: &str, spec: ChartSpec) -> HookResult<Self::Instance>;
}
