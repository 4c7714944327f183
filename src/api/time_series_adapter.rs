use tracing::{debug, error, trace};

use crate::core::{Dataset, Row, TimePoint, prepare_time_series};
use crate::error::HookResult;
use crate::render::{ChartBackend, ChartInstance, ChartSpec, DatasetSpec, SeriesData, UpdateMode};

use super::lifecycle::patched_rows;
use super::{
    ChartHook, DataPushEvent, ElementAttributes, IgnoreReason, LINE_CHART_EVENT_PREFIX,
    TimeSeriesChartConfig, UpdateOutcome, event_name,
};

/// Binds one element to a line chart with one series per configured y field.
///
/// The series count is fixed at mount; pushes only replace point data of the
/// series that exist.
pub struct TimeSeriesChartAdapter<B: ChartBackend> {
    backend: B,
    config: TimeSeriesChartConfig,
    event_name: Option<String>,
    data: Dataset,
    chart: Option<B::Instance>,
}

impl<B: ChartBackend> TimeSeriesChartAdapter<B> {
    pub const HOOK_NAME: &'static str = "LineChart";

    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: TimeSeriesChartConfig::default(),
            event_name: None,
            data: Vec::new(),
            chart: None,
        }
    }

    pub fn mount(backend: B, element: &ElementAttributes) -> HookResult<Self> {
        let mut adapter = Self::new(backend);
        adapter.initialize(element)?;
        Ok(adapter)
    }

    #[must_use]
    pub fn config(&self) -> &TimeSeriesChartConfig {
        &self.config
    }

    #[must_use]
    pub fn chart(&self) -> Option<&B::Instance> {
        self.chart.as_ref()
    }

    fn prepare(&self) -> Vec<Vec<TimePoint>> {
        prepare_time_series(
            &self.data,
            self.config.time_field(),
            &self.config.series_fields(),
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

        let datasets = self
            .config
            .y_fields
            .iter()
            .zip(self.prepare())
            .enumerate()
            .map(|(index, (descriptor, points))| {
                DatasetSpec::line(
                    descriptor.display_label(),
                    descriptor.line_color(index),
                    points,
                )
            })
            .collect();
        self.chart = Some(self.backend.create(canvas, ChartSpec::line(datasets))?);
        Ok(())
    }
}

impl<B: ChartBackend> ChartHook for TimeSeriesChartAdapter<B> {
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
        let config: TimeSeriesChartConfig = element.parse_config()?;
        config.validate()?;
        let widget_id = element.require_widget_id()?;
        let data = element.parse_initial_data()?.unwrap_or_default();

        self.dispose();
        self.config = config;
        self.data = data;
        self.event_name = Some(event_name(LINE_CHART_EVENT_PREFIX, widget_id));

        self.init_chart(element.canvas.as_deref())?;
        debug!(
            widget_id,
            rows = self.data.len(),
            series = self.config.y_fields.len(),
            active = self.chart.is_some(),
            "mounted line chart"
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
        let prepared = self.prepare();
        let Some(chart) = self.chart.as_mut() else {
            return Ok(UpdateOutcome::Ignored(IgnoreReason::NoChart));
        };

        let datasets = &mut chart.spec_mut().data.datasets;
        for (dataset, points) in datasets.iter_mut().zip(prepared) {
            dataset.data = SeriesData::Points(points);
        }
        chart.update(UpdateMode::NoAnimation)?;

        debug!(rows = self.data.len(), "updated line chart");
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
            debug!(hook = Self::HOOK_NAME, "released line chart");
        }
    }
}
