use tracing::{debug, error, trace};

use crate::core::{CategoricalSeries, Dataset, Row, prepare_categorical};
use crate::error::HookResult;
use crate::render::{ChartBackend, ChartInstance, ChartSpec, DatasetSpec, SeriesData, UpdateMode};

use super::lifecycle::patched_rows;
use super::{
    BAR_CHART_EVENT_PREFIX, CategoricalChartConfig, ChartHook, DataPushEvent, ElementAttributes,
    IgnoreReason, UpdateOutcome, event_name,
};

/// Binds one element to a bar chart of `row[x_field]` against `row[y_field]`.
pub struct CategoricalChartAdapter<B: ChartBackend> {
    backend: B,
    config: CategoricalChartConfig,
    event_name: Option<String>,
    data: Dataset,
    chart: Option<B::Instance>,
}

impl<B: ChartBackend> CategoricalChartAdapter<B> {
    pub const HOOK_NAME: &'static str = "BarChart";

    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: CategoricalChartConfig::default(),
            event_name: None,
            data: Vec::new(),
            chart: None,
        }
    }

    /// Creates and initializes an adapter in one step.
    pub fn mount(backend: B, element: &ElementAttributes) -> HookResult<Self> {
        let mut adapter = Self::new(backend);
        adapter.initialize(element)?;
        Ok(adapter)
    }

    #[must_use]
    pub fn config(&self) -> &CategoricalChartConfig {
        &self.config
    }

    #[must_use]
    pub fn chart(&self) -> Option<&B::Instance> {
        self.chart.as_ref()
    }

    fn prepare(&self) -> CategoricalSeries {
        prepare_categorical(
            &self.data,
            self.config.category_field(),
            self.config.value_field(),
            self.config.missing_values,
        )
    }

    fn init_chart(&mut self, canvas: Option<&str>) -> HookResult<()> {
        let Some(canvas) = canvas else {
            error!(
                hook = Self::HOOK_NAME,
                event = self.event_name.as_deref().unwrap_or_default(),
                "canvas element not found"
            );
            return Ok(());
        };

        let series = self.prepare();
        let spec = ChartSpec::bar(
            series.labels,
            DatasetSpec::bar(self.config.value_field(), series.values),
        );
        self.chart = Some(self.backend.create(canvas, spec)?);
        Ok(())
    }
}

impl<B: ChartBackend> ChartHook for CategoricalChartAdapter<B> {
    fn hook_name(&self) -> &'static str {
        Self::HOOK_NAME
    }

    fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    fn dataset(&self) -> &[Row] {
        &self.data
    }

    fn is_active(&self) -> bool {
        self.chart.is_some()
    }

    fn initialize(&mut self, element: &ElementAttributes) -> HookResult<()> {
        let config: CategoricalChartConfig = element.parse_config()?;
        let widget_id = element.require_widget_id()?;
        let data = element.parse_initial_data()?.unwrap_or_default();

        self.dispose();
        self.config = config;
        self.data = data;
        self.event_name = Some(event_name(BAR_CHART_EVENT_PREFIX, widget_id));

        self.init_chart(element.canvas.as_deref())?;
        debug!(
            widget_id,
            rows = self.data.len(),
            active = self.chart.is_some(),
            "mounted bar chart"
        );
        Ok(())
    }

    fn on_external_data_push(&mut self, event: DataPushEvent) -> HookResult<UpdateOutcome> {
        if self.chart.is_none() {
            trace!(hook = Self::HOOK_NAME, "ignoring data push without chart");
            return Ok(UpdateOutcome::Ignored(IgnoreReason::NoChart));
        }
        let Some(rows) = event.into_rows() else {
            trace!(hook = Self::HOOK_NAME, "ignoring data push without rows");
            return Ok(UpdateOutcome::Ignored(IgnoreReason::NoData));
        };

        self.data = rows;
        let series = self.prepare();
        let Some(chart) = self.chart.as_mut() else {
            return Ok(UpdateOutcome::Ignored(IgnoreReason::NoChart));
        };

        let chart_data = &mut chart.spec_mut().data;
        chart_data.labels = series.labels;
        if let Some(dataset) = chart_data.datasets.first_mut() {
            dataset.data = SeriesData::Values(series.values);
        }
        chart.update(UpdateMode::NoAnimation)?;

        debug!(rows = self.data.len(), "updated bar chart");
        Ok(UpdateOutcome::Applied)
    }

    fn on_host_patch(&mut self, element: &ElementAttributes) -> HookResult<UpdateOutcome> {
        match patched_rows(element, &self.data, self.config.refresh)? {
            Ok(rows) => self.on_external_data_push(DataPushEvent::new(rows)),
            Err(reason) => Ok(UpdateOutcome::Ignored(reason)),
        }
    }

    fn dispose(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            chart.destroy();
            debug!(hook = Self::HOOK_NAME, "released bar chart");
        }
    }
}
