use slugeq_domain::capabilities::Capabilities;
use slugeq_domain::constants::{classes, setting_keys, templates};
use slugeq_domain::element::{ContentType, Element, ElementId, TypeHandle};
use slugeq_domain::elements::{Category, Entry, Product};
use slugeq_domain::settings::Settings;
use slugeq_registry::*;
use std::any::Any;

fn category(handle: &str) -> Category {
    Category { id: ElementId(1), title: "Cat".into(), group: ContentType::new(handle, handle) }
}

fn product() -> Product {
    Product { id: ElementId(3), title: "Mug".into(), product_type: ContentType::new("mugs", "Mugs") }
}

#[test]
fn built_ins_are_always_present() {
    let registry = Registry::builder().build().unwrap();
    let families: Vec<_> = registry.descriptors().iter().map(ContentTypeDescriptor::family).collect();

    assert_eq!(families, vec!["category", "entry"]);
    assert!(registry.descriptor_for(&product()).is_none());
    assert!(!registry.is_applicable_template(templates::PRODUCT_EDIT));
}

#[test]
fn commerce_capability_adds_products() {
    let registry = Registry::builder().capabilities(Capabilities::COMMERCE).build().unwrap();

    let descriptor = registry.descriptor_for(&product()).unwrap();
    assert_eq!(descriptor.class_id(), classes::PRODUCT);
    assert_eq!(descriptor.setting_key(), setting_keys::PRODUCT_TYPES);
    assert_eq!(descriptor.type_of(&product()), Some(TypeHandle::from("mugs")));
    assert!(registry.is_applicable_template(templates::PRODUCT_EDIT));
}

#[test]
fn descriptor_dispatches_on_class() {
    let registry = Registry::builder().build().unwrap();
    let entry = Entry {
        id: ElementId(2),
        title: "Post".into(),
        section: ContentType::new("blog", "Blog"),
    };

    assert_eq!(registry.descriptor_for(&entry).map(|d| d.family()), Some("entry"));
    assert_eq!(registry.descriptor_for(&category("news")).map(|d| d.family()), Some("category"));
    assert_eq!(registry.descriptor_by_class("element.entry").map(|d| d.family()), Some("entry"));
    assert!(registry.descriptor_by_class("element.tag").is_none());
}

#[test]
fn templates_and_slots_follow_descriptors() {
    let registry = Registry::builder().capabilities(Capabilities::COMMERCE).build().unwrap();

    assert!(registry.is_applicable_template("categories/_edit"));
    assert!(registry.is_applicable_template("entries/_edit"));
    assert!(!registry.is_applicable_template("users/_edit"));
    assert_eq!(registry.slots().collect::<Vec<_>>(), vec!["category", "element", "entry", "product"]);
}

#[test]
fn save_events_are_exposed_per_family() {
    let registry = Registry::builder().build().unwrap();
    for descriptor in registry.descriptors() {
        assert_eq!(descriptor.events(), SaveEvents { before: "beforeSave", after: "afterSave" });
    }
}

#[test]
fn setting_options_reflect_catalog_and_settings() {
    let catalog = StaticCatalog::new()
        .with_types("category", [ContentType::new("news", "News"), ContentType::new("faq", "FAQ")])
        .with_types("entry", [ContentType::new("blog", "Blog")]);
    let settings = Settings::default().enable(setting_keys::CATEGORY_GROUPS, "news");

    let registry = Registry::builder().catalog(&catalog).build().unwrap();
    let options = registry.setting_options(&settings);

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].template_variable, "categoryGroups");
    assert_eq!(
        options[0].options,
        vec![
            SelectOption { label: "News".into(), value: "news".into(), checked: true },
            SelectOption { label: "FAQ".into(), value: "faq".into(), checked: false },
        ]
    );
    assert_eq!(options[1].template_variable, "sections");
    assert!(!options[1].options[0].checked);

    let json = serde_json::to_value(&options[1]).unwrap();
    assert_eq!(json["templateVariable"], "sections");
    assert_eq!(json["options"][0]["label"], "Blog");
}

#[test]
fn catalog_is_captured_at_build() {
    let catalog = StaticCatalog::new().with_types("entry", [ContentType::new("blog", "Blog")]);
    let registry = Registry::builder().catalog(&catalog).build().unwrap();

    let entry = registry.descriptor_by_class("element.entry").unwrap();
    assert_eq!(entry.all_types(), &[ContentType::new("blog", "Blog")]);
    assert!(registry.descriptor_by_class("element.category").unwrap().all_types().is_empty());
}

#[derive(Debug)]
struct Tag {
    id: ElementId,
    group: TypeHandle,
}

impl Element for Tag {
    fn id(&self) -> ElementId {
        self.id
    }

    fn class_id(&self) -> slugeq_domain::element::ClassId {
        slugeq_domain::element::ClassId::new("element.tag")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct TagGroupExtractor;

impl TypeExtractor for TagGroupExtractor {
    fn family(&self) -> &'static str {
        "tag"
    }

    fn extract(&self, element: &dyn Element) -> Option<TypeHandle> {
        element.downcast_ref::<Tag>().map(|t| t.group.clone())
    }
}

const TAGS: FamilyDefinition = FamilyDefinition {
    class_id: slugeq_domain::element::ClassId::new("element.tag"),
    setting_key: "enabledTagGroups",
    template: "tags/_edit",
    slots: &["tag"],
    template_variable: "tagGroups",
    events: SaveEvents::DEFAULT,
    extractor: &TagGroupExtractor,
};

#[test]
fn custom_families_extend_the_registry() {
    let registry = Registry::builder().family(TAGS).build().unwrap();
    let tag = Tag { id: ElementId(9), group: "topics".into() };

    let descriptor = registry.descriptor_for(&tag).unwrap();
    assert_eq!(descriptor.family(), "tag");
    assert_eq!(descriptor.type_of(&tag), Some("topics".into()));
    assert!(registry.is_applicable_template("tags/_edit"));
}

#[test]
fn duplicate_classes_are_rejected() {
    let shadow = FamilyDefinition { template: "entries/_other", ..families::ENTRIES };
    let err = Registry::builder().family(shadow).build().unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateClass { .. }));
    assert!(err.to_string().contains("element.entry"));
}
