use slugeq_domain::element::{Element, TypeHandle};
use slugeq_domain::elements::{Category, Entry, Product};
use std::fmt::Debug;

/// Pulls the concrete content type out of an element of one family.
///
/// Extractors are stateless values keyed by a stable family identifier. They return
/// `None` when handed an element of a different shape.
pub trait TypeExtractor: Debug + Send + Sync {
    /// Stable identifier of the family this extractor understands.
    fn family(&self) -> &'static str;

    fn extract(&self, element: &dyn Element) -> Option<TypeHandle>;
}

/// Category -> category group.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryGroupExtractor;

impl TypeExtractor for CategoryGroupExtractor {
    fn family(&self) -> &'static str {
        "category"
    }

    fn extract(&self, element: &dyn Element) -> Option<TypeHandle> {
        element.downcast_ref::<Category>().map(|c| c.group.handle.clone())
    }
}

/// Entry -> section.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionExtractor;

impl TypeExtractor for SectionExtractor {
    fn family(&self) -> &'static str {
        "entry"
    }

    fn extract(&self, element: &dyn Element) -> Option<TypeHandle> {
        element.downcast_ref::<Entry>().map(|e| e.section.handle.clone())
    }
}

/// Product -> product type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductTypeExtractor;

impl TypeExtractor for ProductTypeExtractor {
    fn family(&self) -> &'static str {
        "product"
    }

    fn extract(&self, element: &dyn Element) -> Option<TypeHandle> {
        element.downcast_ref::<Product>().map(|p| p.product_type.handle.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slugeq_domain::element::{ContentType, ElementId};

    #[test]
    fn extractors_reject_foreign_shapes() {
        let entry = Entry {
            id: ElementId(1),
            title: "Hello".into(),
            section: ContentType::new("blog", "Blog"),
        };

        assert_eq!(SectionExtractor.extract(&entry), Some("blog".into()));
        assert_eq!(CategoryGroupExtractor.extract(&entry), None);
        assert_eq!(ProductTypeExtractor.extract(&entry), None);
    }
}
