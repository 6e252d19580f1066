use crate::decision::{Decision, RequestKind};
use crate::error::{OverridesError, OverridesErrorExt};
use slugeq_domain::element::Element;
use slugeq_domain::overrides::OverrideState;
use slugeq_domain::settings::SettingsProvider;
use slugeq_registry::Registry;
use slugeq_store::OverrideStore;
use std::sync::Arc;
use tracing::{debug, instrument, trace, warn};

/// Answers whether slug forcing is overridden for an element.
///
/// Precedence, first match wins:
/// 1. a stored per-element override,
/// 2. no descriptor for the element class means `false`,
/// 3. membership of the element's type handle in the descriptor's setting list.
///
/// Resolution never fails. A store that cannot be read is logged and treated as holding
/// no record.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Registry,
    store: Arc<dyn OverrideStore>,
    settings: Arc<dyn SettingsProvider>,
}

impl Resolver {
    pub fn new(
        registry: Registry,
        store: Arc<dyn OverrideStore>,
        settings: Arc<dyn SettingsProvider>,
    ) -> Self {
        Self { registry, store, settings }
    }

    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &Arc<dyn OverrideStore> {
        &self.store
    }

    pub fn settings(&self) -> &Arc<dyn SettingsProvider> {
        &self.settings
    }

    /// The stored per-element state; unreadable storage reads as no record.
    pub fn override_state(&self, element: &dyn Element) -> OverrideState {
        let id = element.id();
        self.store.get_override(id).unwrap_or_else(|err| {
            warn!(element_id = %id, error = %err, "Override lookup failed, using content-type default");
            OverrideState::NotOverridden
        })
    }

    /// Resolves the decision together with the tier that produced it.
    #[instrument(level = "debug", skip_all, fields(element_id = %element.id(), class = %element.class_id()))]
    pub fn decide(&self, element: &dyn Element) -> Decision {
        if let Some(enabled) = self.override_state(element).explicit() {
            trace!(enabled, "Decided by element override");
            return Decision::Element { enabled };
        }

        let Some(descriptor) = self.registry.descriptor_for(element) else {
            trace!("No descriptor for element class");
            return Decision::Unsupported;
        };
        let Some(handle) = descriptor.type_of(element) else {
            debug!(family = descriptor.family(), "Element shape not recognized by its family");
            return Decision::Unsupported;
        };

        let enabled = self.settings.is_enabled(descriptor.setting_key(), &handle);
        trace!(%handle, enabled, "Decided by content type");
        Decision::ContentType { handle, enabled }
    }

    pub fn is_overridden(&self, element: &dyn Element) -> bool {
        self.decide(element).is_overridden()
    }

    /// Whether a render of `template` should offer the override toggle. Toggles are a
    /// control-panel affordance only.
    pub fn is_toggle_template(&self, template: &str, kind: RequestKind) -> bool {
        kind == RequestKind::ControlPanel && self.registry.is_applicable_template(template)
    }

    /// Persists an administrator's explicit choice for `element`.
    ///
    /// # Errors
    ///
    /// Returns [`OverridesError::Storage`] when the store rejects the write. Nothing is
    /// retried and the previous record stays in place.
    #[instrument(level = "debug", skip_all, fields(element_id = %element.id(), enabled = enabled))]
    pub fn set_override(&self, element: &dyn Element, enabled: bool) -> Result<(), OverridesError> {
        let id = element.id();
        self.store.set_override(id, enabled).context(format!("element {id}"))?;
        debug!("Override recorded");
        Ok(())
    }
}
