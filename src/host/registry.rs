use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::api::{ChartHook, DataPushEvent, ElementAttributes, UpdateOutcome};
use crate::error::{HookError, HookResult};
use crate::render::ChartBackend;

use super::HookKind;

struct MountedElement {
    kind: HookKind,
    hook: Box<dyn ChartHook>,
}

/// Single-threaded stand-in for the host framework.
///
/// Owns every mounted hook, keyed by element id, and routes named data
/// pushes to the hooks listening on that name. Events are handled one at a
/// time in call order; nothing is queued, merged or reordered.
pub struct HookRegistry<B> {
    backend: B,
    elements: IndexMap<String, MountedElement>,
    routes: HashMap<String, Vec<String>>,
}

impl<B> HookRegistry<B>
where
    B: ChartBackend + Clone + 'static,
{
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            elements: IndexMap::new(),
            routes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    #[must_use]
    pub fn hook(&self, element_id: &str) -> Option<&dyn ChartHook> {
        self.elements.get(element_id).map(|mounted| mounted.hook.as_ref())
    }

    #[must_use]
    pub fn kind(&self, element_id: &str) -> Option<HookKind> {
        self.elements.get(element_id).map(|mounted| mounted.kind)
    }

    /// Attaches the hook named `hook_name` to a new element.
    ///
    /// A failed initialization leaves the registry unchanged.
    pub fn mount(
        &mut self,
        element_id: &str,
        hook_name: &str,
        element: &ElementAttributes,
    ) -> HookResult<()> {
        if self.elements.contains_key(element_id) {
            return Err(HookError::DuplicateElement(element_id.to_owned()));
        }
        let kind: HookKind = hook_name.parse()?;
        let mut hook = kind.build(self.backend.clone());
        hook.initialize(element)?;

        if let Some(event) = hook.event_name() {
            self.routes
                .entry(event.to_owned())
                .or_default()
                .push(element_id.to_owned());
        }
        debug!(element_id, hook = %kind, "mounted element");
        self.elements
            .insert(element_id.to_owned(), MountedElement { kind, hook });
        Ok(())
    }

    /// Delivers a raw JSON payload to every hook listening on `event`.
    pub fn push_json(&mut self, event: &str, payload: &str) -> HookResult<usize> {
        self.push(event, DataPushEvent::from_json_str(payload)?)
    }

    /// Delivers `payload` to every hook listening on `event`, in mount order.
    ///
    /// Returns how many charts were redrawn. A failing hook does not stop
    /// delivery to the rest; failures are reported together as
    /// [`HookError::PartialDelivery`] once every listener has been called.
    pub fn push(&mut self, event: &str, payload: DataPushEvent) -> HookResult<usize> {
        let Some(element_ids) = self.routes.get(event) else {
            warn!(event, "no mounted element listens to event");
            return Ok(0);
        };

        let mut applied = 0;
        let mut failures = Vec::new();
        for element_id in element_ids {
            let Some(mounted) = self.elements.get_mut(element_id) else {
                continue;
            };
            match mounted.hook.on_external_data_push(payload.clone()) {
                Ok(outcome) if outcome.is_applied() => applied += 1,
                Ok(_) => {}
                Err(err) => {
                    warn!(event, element_id = %element_id, error = %err, "data push failed");
                    failures.push((element_id.clone(), err));
                }
            }
        }

        if failures.is_empty() {
            Ok(applied)
        } else {
            Err(HookError::PartialDelivery {
                event: event.to_owned(),
                applied,
                failures,
            })
        }
    }

    /// Forwards a host re-render of `element_id` with its new attributes.
    pub fn patch(
        &mut self,
        element_id: &str,
        element: &ElementAttributes,
    ) -> HookResult<UpdateOutcome> {
        let mounted = self
            .elements
            .get_mut(element_id)
            .ok_or_else(|| HookError::UnknownElement(element_id.to_owned()))?;
        mounted.hook.on_host_patch(element)
    }

    /// Detaches `element_id`, releasing its chart.
    pub fn unmount(&mut self, element_id: &str) -> HookResult<()> {
        let mut mounted = self
            .elements
            .shift_remove(element_id)
            .ok_or_else(|| HookError::UnknownElement(element_id.to_owned()))?;
        mounted.hook.dispose();

        if let Some(event) = mounted.hook.event_name() {
            if let Some(listeners) = self.routes.get_mut(event) {
                listeners.retain(|id| id != element_id);
                if listeners.is_empty() {
                    self.routes.remove(event);
                }
            }
        }
        debug!(element_id, hook = %mounted.kind, "unmounted element");
        Ok(())
    }

    /// Detaches every element, in mount order.
    pub fn unmount_all(&mut self) {
        for (element_id, mut mounted) in self.elements.drain(..) {
            mounted.hook.dispose();
            debug!(element_id = %element_id, hook = %mounted.kind, "unmounted element");
        }
        self.routes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::HookRegistry;
    use crate::api::ElementAttributes;
    use crate::error::HookError;
    use crate::render::RecordingBackend;

    #[test]
    fn duplicate_and_unknown_elements_are_rejected() {
        let mut registry = HookRegistry::new(RecordingBackend::new());
        let element = ElementAttributes::new("{}", "w1");
        registry.mount("el", "BarChart", &element).expect("mount");
        assert!(matches!(
            registry.mount("el", "BarChart", &element),
            Err(HookError::DuplicateElement(_))
        ));
        assert!(matches!(
            registry.unmount("missing"),
            Err(HookError::UnknownElement(_))
        ));
        assert!(matches!(
            registry.mount("other", "PieChart", &element),
            Err(HookError::UnknownHook(_))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn failed_mount_leaves_registry_unchanged() {
        let backend = RecordingBackend::new();
        let mut registry = HookRegistry::new(backend.clone());
        let element = ElementAttributes::new("{broken", "w1");
        assert!(registry.mount("el", "BarChart", &element).is_err());
        assert!(registry.is_empty());
        assert_eq!(backend.created_count(), 0);
    }
}
