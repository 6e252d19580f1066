use crate::catalog::TypeCatalog;
use crate::extractor::{
    CategoryGroupExtractor, ProductTypeExtractor, SectionExtractor, TypeExtractor,
};
use slugeq_domain::constants::{classes, setting_keys, slots, templates};
use slugeq_domain::element::{ClassId, ContentType, Element, TypeHandle};

/// Host events fired around an element save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveEvents {
    pub before: &'static str,
    pub after: &'static str,
}

impl SaveEvents {
    pub const DEFAULT: Self = Self { before: "beforeSave", after: "afterSave" };
}

/// Static description of a content-type family, known at compile time.
#[derive(Debug, Clone, Copy)]
pub struct FamilyDefinition {
    pub class_id: ClassId,
    pub setting_key: &'static str,
    /// Control-panel template rendering the edit screen of this family.
    pub template: &'static str,
    /// Rendering-context slots that may carry an element of this family.
    pub slots: &'static [&'static str],
    /// Name under which the settings screen receives this family's options.
    pub template_variable: &'static str,
    pub events: SaveEvents,
    pub extractor: &'static dyn TypeExtractor,
}

impl FamilyDefinition {
    pub fn family(&self) -> &'static str {
        self.extractor.family()
    }
}

/// Built-in families.
pub mod families {
    use super::{
        CategoryGroupExtractor, FamilyDefinition, ProductTypeExtractor, SaveEvents,
        SectionExtractor, classes, setting_keys, slots, templates,
    };

    pub const CATEGORIES: FamilyDefinition = FamilyDefinition {
        class_id: classes::CATEGORY,
        setting_key: setting_keys::CATEGORY_GROUPS,
        template: templates::CATEGORY_EDIT,
        slots: &[slots::CATEGORY, slots::ELEMENT],
        template_variable: "categoryGroups",
        events: SaveEvents::DEFAULT,
        extractor: &CategoryGroupExtractor,
    };

    pub const ENTRIES: FamilyDefinition = FamilyDefinition {
        class_id: classes::ENTRY,
        setting_key: setting_keys::SECTIONS,
        template: templates::ENTRY_EDIT,
        slots: &[slots::ENTRY],
        template_variable: "sections",
        events: SaveEvents::DEFAULT,
        extractor: &SectionExtractor,
    };

    pub const PRODUCTS: FamilyDefinition = FamilyDefinition {
        class_id: classes::PRODUCT,
        setting_key: setting_keys::PRODUCT_TYPES,
        template: templates::PRODUCT_EDIT,
        slots: &[slots::PRODUCT],
        template_variable: "productTypes",
        events: SaveEvents::DEFAULT,
        extractor: &ProductTypeExtractor,
    };
}

/// One supported content family, resolved against the host catalog at startup.
#[derive(Debug, Clone)]
pub struct ContentTypeDescriptor {
    definition: FamilyDefinition,
    all_types: Vec<ContentType>,
}

impl ContentTypeDescriptor {
    pub(crate) fn resolve(definition: FamilyDefinition, catalog: &dyn TypeCatalog) -> Self {
        let all_types = catalog.all_types(definition.family());
        Self { definition, all_types }
    }

    pub const fn class_id(&self) -> ClassId {
        self.definition.class_id
    }

    pub fn family(&self) -> &'static str {
        self.definition.family()
    }

    pub const fn setting_key(&self) -> &'static str {
        self.definition.setting_key
    }

    pub const fn template(&self) -> &'static str {
        self.definition.template
    }

    pub const fn slots(&self) -> &'static [&'static str] {
        self.definition.slots
    }

    pub const fn template_variable(&self) -> &'static str {
        self.definition.template_variable
    }

    pub const fn events(&self) -> SaveEvents {
        self.definition.events
    }

    /// Every type of the family, as the catalog reported it when the registry was built.
    pub fn all_types(&self) -> &[ContentType] {
        &self.all_types
    }

    pub fn matches(&self, element: &dyn Element) -> bool {
        element.class_id() == self.definition.class_id
    }

    /// Concrete type handle of `element`, `None` if the extractor does not recognize it.
    pub fn type_of(&self, element: &dyn Element) -> Option<TypeHandle> {
        self.definition.extractor.extract(element)
    }
}
