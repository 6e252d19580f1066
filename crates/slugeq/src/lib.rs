//! Facade crate for the slug override engine.
//! Re-exports the shared crates and wires registry, store, and resolver into [`SlugEq`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`SlugEqConfig`] (see [`kernel::config::load_config`]).
//! - Call [`SlugEq::init`] once at startup and share the handle.
//! - On an edit-screen render call [`SlugEq::toggle_for`]; on save call
//!   [`SlugEq::record_toggle`] with the administrator's choice.

mod error;

pub use error::{SlugEqError, SlugEqErrorExt};
pub use slugeq_context as context;
pub use slugeq_domain as domain;
pub use slugeq_kernel as kernel;
pub use slugeq_overrides as overrides;
pub use slugeq_registry as registry;
pub use slugeq_store as store;

use serde::Serialize;
use slugeq_context::RenderContext;
use slugeq_domain::capabilities::Capabilities;
use slugeq_domain::config::SlugEqConfig;
use slugeq_domain::element::{Element, ElementId};
use slugeq_overrides::{Decision, RequestKind, Resolver};
use slugeq_registry::{Registry, TypeCatalog};
use slugeq_store::{FileOverrideStore, OverrideStore};
use std::sync::Arc;
use tracing::{debug, info};

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "commerce")]
        "commerce",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// What the edit screen needs to render the override toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggle {
    pub element_id: ElementId,
    /// Current state of the checkbox.
    pub overridden: bool,
    pub decision: Decision,
}

/// The wired engine. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SlugEq {
    resolver: Resolver,
}

impl SlugEq {
    /// Opens the configured file store and builds the registry against `catalog`.
    ///
    /// # Errors
    /// Returns an error if the store cannot be opened or the registry is inconsistent.
    pub fn init(config: &SlugEqConfig, catalog: &dyn TypeCatalog) -> Result<Self, SlugEqError> {
        let store = FileOverrideStore::builder()
            .root(&config.store.data_dir)
            .create(config.store.create)
            .cache_capacity(config.store.cache_capacity)
            .open()
            .context("Opening override store")?;

        let registry = Registry::builder()
            .capabilities(capabilities(config))
            .catalog(catalog)
            .build()
            .context("Building descriptor registry")?;

        info!(
            store = %store.root().display(),
            families = registry.descriptors().len(),
            "Slug override engine initialized"
        );

        Ok(Self::from_parts(registry, Arc::new(store), Arc::new(config.settings.clone())))
    }

    /// Wires already constructed parts, for hosts with their own store or settings.
    pub fn from_parts(
        registry: Registry,
        store: Arc<dyn OverrideStore>,
        settings: Arc<dyn slugeq_domain::settings::SettingsProvider>,
    ) -> Self {
        Self { resolver: Resolver::new(registry, store, settings) }
    }

    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub const fn registry(&self) -> &Registry {
        self.resolver.registry()
    }

    pub fn is_overridden(&self, element: &dyn Element) -> bool {
        self.resolver.is_overridden(element)
    }

    /// The element edited in `ctx`, if any.
    pub fn element_for(&self, ctx: &RenderContext) -> Option<Arc<dyn Element>> {
        slugeq_context::resolve_element(self.registry(), ctx)
    }

    /// Toggle state for a page render, `None` if the page should not show one.
    pub fn toggle_for(&self, ctx: &RenderContext, kind: RequestKind) -> Option<Toggle> {
        if !self.resolver.is_toggle_template(ctx.template(), kind) {
            return None;
        }
        let element = self.element_for(ctx)?;
        let decision = self.resolver.decide(element.as_ref());

        debug!(element_id = %element.id(), %decision, "Toggle prepared");
        Some(Toggle { element_id: element.id(), overridden: decision.is_overridden(), decision })
    }

    /// Persists the toggle value submitted with an element save.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn record_toggle(&self, element: &dyn Element, overridden: bool) -> Result<(), SlugEqError> {
        self.resolver.set_override(element, overridden)?;
        Ok(())
    }
}

fn capabilities(config: &SlugEqConfig) -> Capabilities {
    let mut caps = config.plugins.capabilities();
    if features::is_enabled("commerce") {
        caps |= Capabilities::COMMERCE;
    }
    caps
}
