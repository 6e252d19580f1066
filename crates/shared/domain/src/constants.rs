//! Well-known identifiers shared by the host glue and the feature slices.

/// Names of the administrator settings holding enabled type handles.
pub mod setting_keys {
    pub const CATEGORY_GROUPS: &str = "enabledCategoryGroups";
    pub const SECTIONS: &str = "enabledSections";
    pub const PRODUCT_TYPES: &str = "enabledProductTypes";
}

/// Runtime class identifiers of the built-in element families.
pub mod classes {
    use crate::element::ClassId;

    pub const CATEGORY: ClassId = ClassId::new("element.category");
    pub const ENTRY: ClassId = ClassId::new("element.entry");
    pub const PRODUCT: ClassId = ClassId::new("commerce.product");
}

/// Control-panel edit templates for each family.
pub mod templates {
    pub const CATEGORY_EDIT: &str = "categories/_edit";
    pub const ENTRY_EDIT: &str = "entries/_edit";
    pub const PRODUCT_EDIT: &str = "commerce/products/_edit";
}

/// Names of the rendering-context slots that may carry the edited element.
pub mod slots {
    pub const CATEGORY: &str = "category";
    pub const ELEMENT: &str = "element";
    pub const ENTRY: &str = "entry";
    pub const PRODUCT: &str = "product";
    pub const DETAILS: &str = "details";
}

/// Marker inside the `details` payload of the unified element editor.
pub const SLUG_FIELD_MARKER: &str = "slug-field";
