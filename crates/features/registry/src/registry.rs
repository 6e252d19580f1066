use crate::catalog::{StaticCatalog, TypeCatalog};
use crate::descriptor::{ContentTypeDescriptor, FamilyDefinition, families};
use crate::error::RegistryError;
use crate::options::{SelectOption, SettingOptions};
use fxhash::FxHashSet;
use slugeq_domain::capabilities::Capabilities;
use slugeq_domain::element::Element;
use slugeq_domain::settings::SettingsProvider;
use std::sync::Arc;
use tracing::info;

/// Immutable table of the supported content families.
///
/// Built once at startup and shared read-only; cloning is cheap.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Arc<[ContentTypeDescriptor]>,
}

impl Registry {
    #[must_use = "The registry is not built until you call .build()"]
    pub fn builder<'a>() -> RegistryBuilder<'a> {
        RegistryBuilder::default()
    }

    /// Descriptors in presentation order: built-ins first, optional and custom families after.
    pub fn descriptors(&self) -> &[ContentTypeDescriptor] {
        &self.descriptors
    }

    /// The descriptor whose element class matches `element`. `None` means the behavior
    /// does not apply to this element.
    pub fn descriptor_for(&self, element: &dyn Element) -> Option<&ContentTypeDescriptor> {
        self.descriptors.iter().find(|d| d.matches(element))
    }

    /// Lookup by the textual class identifier.
    pub fn descriptor_by_class(&self, class_id: &str) -> Option<&ContentTypeDescriptor> {
        self.descriptors.iter().find(|d| d.class_id().as_str() == class_id)
    }

    /// Whether `template` is the edit screen of a supported family.
    pub fn is_applicable_template(&self, template: &str) -> bool {
        self.descriptors.iter().any(|d| d.template() == template)
    }

    /// Context slots to probe for the edited element, in descriptor order.
    pub fn slots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().flat_map(|d| d.slots().iter().copied())
    }

    /// Checkbox lists for the administrator settings screen.
    pub fn setting_options(&self, settings: &dyn SettingsProvider) -> Vec<SettingOptions> {
        self.descriptors
            .iter()
            .map(|d| {
                let enabled = settings.enabled_types(d.setting_key());
                let options = d
                    .all_types()
                    .iter()
                    .map(|t| SelectOption {
                        label: t.name.clone(),
                        value: t.handle.to_string(),
                        checked: enabled.contains(&t.handle),
                    })
                    .collect();

                SettingOptions {
                    template_variable: d.template_variable(),
                    setting_key: d.setting_key(),
                    options,
                }
            })
            .collect()
    }
}

/// Assembles a [`Registry`] from the built-in families, the host capabilities, and any
/// families contributed by the host.
#[derive(Debug, Default)]
pub struct RegistryBuilder<'a> {
    capabilities: Capabilities,
    catalog: Option<&'a dyn TypeCatalog>,
    extra: Vec<FamilyDefinition>,
}

impl<'a> RegistryBuilder<'a> {
    #[must_use = "Sets the optional host modules that are present"]
    pub const fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use = "Sets the host catalog listing every type per family"]
    pub fn catalog(mut self, catalog: &'a dyn TypeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Registers an additional family after the built-in ones.
    #[must_use = "Adds a custom content family"]
    pub fn family(mut self, definition: FamilyDefinition) -> Self {
        self.extra.push(definition);
        self
    }

    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateClass`] if two families share an element class.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let empty = StaticCatalog::new();
        let catalog = self.catalog.unwrap_or(&empty);

        let mut definitions = vec![families::CATEGORIES, families::ENTRIES];
        if self.capabilities.contains(Capabilities::COMMERCE) {
            definitions.push(families::PRODUCTS);
        }
        definitions.extend(self.extra);

        let mut seen = FxHashSet::default();
        if let Some(dup) = definitions.iter().find(|d| !seen.insert(d.class_id)) {
            return Err(RegistryError::DuplicateClass {
                message: dup.class_id.as_str().into(),
                context: Some(format!("family `{}`", dup.family()).into()),
            });
        }

        let descriptors: Arc<[ContentTypeDescriptor]> = definitions
            .into_iter()
            .map(|d| ContentTypeDescriptor::resolve(d, catalog))
            .collect();

        info!(
            count = descriptors.len(),
            families = ?descriptors.iter().map(ContentTypeDescriptor::family).collect::<Vec<_>>(),
            "Descriptor registry built"
        );

        Ok(Registry { descriptors })
    }
}
