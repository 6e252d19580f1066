use anyhow::{Context, Result};
use slugeq::SlugEq;
use slugeq::domain::constants::classes;
use slugeq::domain::element::{ClassId, ContentType, Element, ElementId};
use slugeq::domain::elements::{Category, Entry, Product};
use slugeq::domain::overrides::OverrideState;
use slugeq::store::OverrideStore;
use std::any::Any;

/// Stand-in for element classes no descriptor knows about.
#[derive(Debug)]
struct Unknown(ElementId);

impl Element for Unknown {
    fn id(&self) -> ElementId {
        self.0
    }

    fn class_id(&self) -> ClassId {
        ClassId::new("cli.unknown")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn get(slugeq: &SlugEq, id: u64) -> Result<()> {
    let state = slugeq
        .resolver()
        .store()
        .get_override(ElementId(id))
        .with_context(|| format!("Reading override of element {id}"))?;

    match state {
        OverrideState::Overridden(enabled) => println!("{id}: {enabled}"),
        OverrideState::NotOverridden => println!("{id}: not overridden"),
    }
    Ok(())
}

pub fn set(slugeq: &SlugEq, id: u64, enabled: bool) -> Result<()> {
    slugeq
        .resolver()
        .store()
        .set_override(ElementId(id), enabled)
        .with_context(|| format!("Writing override of element {id}"))?;

    println!("{id}: {enabled}");
    Ok(())
}

pub fn list(slugeq: &SlugEq, json: bool) -> Result<()> {
    let records = slugeq.resolver().store().records().context("Listing overrides")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("No overrides stored.");
    }
    for record in records {
        println!("{}: {}", record.element_id, record.enabled);
    }
    Ok(())
}

pub fn check(slugeq: &SlugEq, class_id: &str, handle: &str, id: u64) {
    let element = synthesize(slugeq, class_id, handle, ElementId(id));
    let decision = slugeq.resolver().decide(element.as_ref());

    println!("{id}: {decision}");
}

/// Builds a built-in element shape for `class_id`.
///
/// Only the built-in families have shapes the CLI can construct. Any other class,
/// registered or not, becomes an element no extractor accepts and so checks as unsupported.
fn synthesize(slugeq: &SlugEq, class_id: &str, handle: &str, id: ElementId) -> Box<dyn Element> {
    let ty = ContentType::new(handle, handle);
    let title = format!("Element {id}");

    match slugeq.registry().descriptor_by_class(class_id).map(|d| d.class_id()) {
        Some(classes::CATEGORY) => Box::new(Category { id, title, group: ty }),
        Some(classes::ENTRY) => Box::new(Entry { id, title, section: ty }),
        Some(classes::PRODUCT) => Box::new(Product { id, title, product_type: ty }),
        _ => Box::new(Unknown(id)),
    }
}
