//! Host-side plumbing: the hook registry a host environment drives.

mod hook_kind;
mod registry;
mod trace;

pub use hook_kind::HookKind;
pub use registry::HookRegistry;
pub use trace::{Trace, TraceAttributes, TraceStep};
