use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{HookError, HookResult};

use super::{ChartBackend, ChartInstance, ChartSpec, UpdateMode};

/// Last rendered state of one chart created by a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub canvas: String,
    pub spec: ChartSpec,
    pub update_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_mode: Option<UpdateMode>,
    pub destroyed: bool,
}

type SharedSnapshot = Rc<RefCell<ChartSnapshot>>;

/// Headless chart backend used by tests, the trace tool and hosts without a
/// real renderer.
///
/// Every chart it creates shares its rendered state with the backend, so a
/// caller can keep a clone of the backend and observe charts after handing
/// them to an adapter. Only `update` publishes data mutations, matching
/// libraries that redraw on an explicit update call.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    charts: Rc<RefCell<Vec<SharedSnapshot>>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots of every chart created so far, in creation order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<ChartSnapshot> {
        self.charts
            .borrow()
            .iter()
            .map(|chart| chart.borrow().clone())
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self, index: usize) -> Option<ChartSnapshot> {
        self.charts
            .borrow()
            .get(index)
            .map(|chart| chart.borrow().clone())
    }

    /// Most recent chart created on `canvas`.
    #[must_use]
    pub fn snapshot_for_canvas(&self, canvas: &str) -> Option<ChartSnapshot> {
        self.charts
            .borrow()
            .iter()
            .rev()
            .find(|chart| chart.borrow().canvas == canvas)
            .map(|chart| chart.borrow().clone())
    }

    #[must_use]
    pub fn created_count(&self) -> usize {
        self.charts.borrow().len()
    }

    /// Marks every live chart on `canvas` destroyed without telling its
    /// owner, as when the host removes the canvas underneath a chart.
    /// Returns how many charts were affected.
    pub fn detach_canvas(&self, canvas: &str) -> usize {
        let mut detached = 0;
        for chart in self.charts.borrow().iter() {
            let mut chart = chart.borrow_mut();
            if chart.canvas == canvas && !chart.destroyed {
                chart.destroyed = true;
                detached += 1;
            }
        }
        detached
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.charts
            .borrow()
            .iter()
            .filter(|chart| !chart.borrow().destroyed)
            .count()
    }
}

impl ChartBackend for RecordingBackend {
    type Instance = RecordingChart;

    fn create(&mut self, canvas: &str, spec: ChartSpec) -> HookResult<RecordingChart> {
        trace!(canvas, kind = ?spec.kind, "create recording chart");
        let shared = Rc::new(RefCell::new(ChartSnapshot {
            canvas: canvas.to_owned(),
            spec: spec.clone(),
            update_count: 0,
            last_update_mode: None,
            destroyed: false,
        }));
        self.charts.borrow_mut().push(Rc::clone(&shared));
        Ok(RecordingChart {
            spec,
            rendered: shared,
        })
    }
}

/// Chart instance owned by an adapter; see [`RecordingBackend`].
#[derive(Debug)]
pub struct RecordingChart {
    spec: ChartSpec,
    rendered: SharedSnapshot,
}

impl ChartInstance for RecordingChart {
    fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut ChartSpec {
        &mut self.spec
    }

    fn update(&mut self, mode: UpdateMode) -> HookResult<()> {
        let mut rendered = self.rendered.borrow_mut();
        if rendered.destroyed {
            return Err(HookError::InvalidData(format!(
                "chart on canvas `{}` was destroyed",
                rendered.canvas
            )));
        }
        rendered.spec = self.spec.clone();
        rendered.update_count += 1;
        rendered.last_update_mode = Some(mode);
        Ok(())
    }

    fn destroy(&mut self) {
        self.rendered.borrow_mut().destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingBackend;
    use crate::render::{ChartBackend, ChartInstance, ChartSpec, DatasetSpec, UpdateMode};

    fn bar_spec(values: Vec<f64>) -> ChartSpec {
        let labels = values.iter().map(|v| v.to_string()).collect();
        ChartSpec::bar(labels, DatasetSpec::bar("value", values))
    }

    #[test]
    fn mutations_are_published_only_on_update() {
        let mut backend = RecordingBackend::new();
        let mut chart = backend.create("c1", bar_spec(vec![1.0])).expect("create");

        chart.spec_mut().data.datasets[0].data = crate::render::SeriesData::Values(vec![9.0]);
        let before = backend.snapshot(0).expect("snapshot");
        assert_eq!(before.update_count, 0);
        assert_eq!(before.spec, bar_spec(vec![1.0]));

        chart.update(UpdateMode::NoAnimation).expect("update");
        let after = backend.snapshot(0).expect("snapshot");
        assert_eq!(after.update_count, 1);
        assert_eq!(after.last_update_mode, Some(UpdateMode::NoAnimation));
        assert_eq!(after.spec.data.datasets[0].data.as_values(), Some(&[9.0][..]));
    }

    #[test]
    fn destroyed_chart_rejects_updates() {
        let mut backend = RecordingBackend::new();
        let mut chart = backend.create("c1", bar_spec(vec![])).expect("create");
        assert_eq!(backend.live_count(), 1);
        chart.destroy();
        assert_eq!(backend.live_count(), 0);
        assert_eq!(backend.created_count(), 1);
        assert!(chart.update(UpdateMode::Default).is_err());
    }
}
