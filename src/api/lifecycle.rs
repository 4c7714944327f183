use crate::core::{Dataset, RefreshPolicy, Row};
use crate::error::HookResult;

use super::{DataPushEvent, ElementAttributes};

/// Why an update left the chart untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No chart instance: not mounted, mounted without a canvas, or disposed.
    NoChart,
    /// The push or patch carried no rows.
    NoData,
    /// The patched dataset did not differ under the refresh policy.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl UpdateOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Lifecycle driven by the host for one mounted element.
///
/// The host calls `initialize` once when the element is attached, forwards
/// every push addressed to `event_name`, calls `on_host_patch` whenever it
/// re-renders the element, and `dispose` when the element is removed. All
/// calls happen on one thread, in host delivery order.
pub trait ChartHook {
    /// Host-side hook name this adapter is registered under.
    fn hook_name(&self) -> &'static str;

    /// Push event this hook listens to; `None` until initialized.
    fn event_name(&self) -> Option<&str>;

    /// Rows currently held by the adapter.
    fn dataset(&self) -> &[Row];

    /// `true` while the adapter owns a chart instance.
    fn is_active(&self) -> bool;

    fn initialize(&mut self, element: &ElementAttributes) -> HookResult<()>;

    fn on_external_data_push(&mut self, event: DataPushEvent) -> HookResult<UpdateOutcome>;

    fn on_host_patch(&mut self, element: &ElementAttributes) -> HookResult<UpdateOutcome>;

    /// Releases the chart instance. Safe to call repeatedly.
    fn dispose(&mut self);
}

/// Shared patch rule: re-read the initial-data attribute and hand it on only
/// when `policy` sees a change against the held rows.
pub(crate) fn patched_rows(
    element: &ElementAttributes,
    held: &[Row],
    policy: RefreshPolicy,
) -> HookResult<Result<Dataset, IgnoreReason>> {
    let Some(incoming) = element.parse_initial_data()? else {
        return Ok(Err(IgnoreReason::NoData));
    };
    if !policy.detects_change(held, &incoming) {
        return Ok(Err(IgnoreReason::Unchanged));
    }
    Ok(Ok(incoming))
}
