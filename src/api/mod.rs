mod categorical_adapter;
mod config;
mod element;
mod event;
mod lifecycle;
mod time_series_adapter;

pub use categorical_adapter::CategoricalChartAdapter;
pub use config::{
    CategoricalChartConfig, DEFAULT_CATEGORY_FIELD, DEFAULT_TIME_FIELD, DEFAULT_VALUE_FIELD,
    SeriesDescriptor, TimeSeriesChartConfig,
};
pub use element::{
    CONFIG_ATTRIBUTE, ElementAttributes, INITIAL_DATA_ATTRIBUTE, WIDGET_ID_ATTRIBUTE,
};
pub use event::{BAR_CHART_EVENT_PREFIX, DataPushEvent, LINE_CHART_EVENT_PREFIX, event_name};
pub use lifecycle::{ChartHook, IgnoreReason, UpdateOutcome};
pub use time_series_adapter::TimeSeriesChartAdapter;
