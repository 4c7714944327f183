//! chart-hooks: lifecycle adapters between a host UI and a chart library.
//!
//! A host attaches an element, the matching adapter reads its configuration
//! and initial rows, builds a chart through a [`render::ChartBackend`], and
//! then replaces series data whenever the host pushes a new dataset.
//! Rendering itself stays behind the backend trait.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{CategoricalChartAdapter, ChartHook, ElementAttributes, TimeSeriesChartAdapter};
pub use error::{HookError, HookResult};
pub use host::{HookKind, HookRegistry};
