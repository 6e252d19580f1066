use fxhash::FxHashMap;
use slugeq_domain::element::ContentType;
use std::fmt::Debug;

/// Host view of every concrete type inside a family, in presentation order.
pub trait TypeCatalog: Debug + Send + Sync {
    fn all_types(&self, family: &str) -> Vec<ContentType>;
}

/// Fixed catalog, for hosts that snapshot their type registries and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    families: FxHashMap<String, Vec<ContentType>>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `types` to `family`.
    #[must_use]
    pub fn with_types(
        mut self,
        family: impl Into<String>,
        types: impl IntoIterator<Item = ContentType>,
    ) -> Self {
        self.families.entry(family.into()).or_default().extend(types);
        self
    }
}

impl TypeCatalog for StaticCatalog {
    fn all_types(&self, family: &str) -> Vec<ContentType> {
        self.families.get(family).cloned().unwrap_or_default()
    }
}
