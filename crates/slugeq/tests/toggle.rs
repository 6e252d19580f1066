use slugeq::context::{RenderContext, ScreenElementSource};
use slugeq::domain::config::SlugEqConfig;
use slugeq::domain::constants::setting_keys;
use slugeq::domain::element::{ContentType, Element, ElementId};
use slugeq::domain::elements::{Category, Entry};
use slugeq::domain::overrides::OverrideState;
use slugeq::overrides::{Decision, RequestKind};
use slugeq::registry::StaticCatalog;
use slugeq::store::OverrideStore;
use slugeq::{SlugEq, Toggle};
use std::sync::Arc;
use tempfile::TempDir;

fn engine(temp: &TempDir) -> SlugEq {
    let mut config = SlugEqConfig::default();
    config.store.data_dir = temp.path().join("overrides");
    config.settings = config.settings.clone().enable(setting_keys::CATEGORY_GROUPS, "news");

    let catalog = StaticCatalog::new().with_types("category", [ContentType::new("news", "News")]);
    SlugEq::init(&config, &catalog).unwrap()
}

fn news(id: u64) -> Arc<dyn Element> {
    Arc::new(Category { id: ElementId(id), title: "Launch".into(), group: ContentType::new("news", "News") })
}

#[test]
fn toggle_defaults_to_content_type() {
    let temp = TempDir::new().unwrap();
    let slugeq = engine(&temp);
    let ctx = RenderContext::new("categories/_edit").with_element("category", news(1));

    let toggle = slugeq.toggle_for(&ctx, RequestKind::ControlPanel).unwrap();
    assert_eq!(
        toggle,
        Toggle {
            element_id: ElementId(1),
            overridden: true,
            decision: Decision::ContentType { handle: "news".into(), enabled: true },
        }
    );
}

#[test]
fn recorded_toggle_wins_after_save() {
    let temp = TempDir::new().unwrap();
    let slugeq = engine(&temp);
    let element = news(2);

    slugeq.record_toggle(element.as_ref(), false).unwrap();

    let ctx = RenderContext::new("categories/_edit").with_element("element", element);
    let toggle = slugeq.toggle_for(&ctx, RequestKind::ControlPanel).unwrap();
    assert!(!toggle.overridden);
    assert_eq!(toggle.decision, Decision::Element { enabled: false });
    assert_eq!(
        slugeq.resolver().store().get_override(ElementId(2)).unwrap(),
        OverrideState::Overridden(false)
    );
}

#[test]
fn overrides_persist_across_engines() {
    let temp = TempDir::new().unwrap();
    engine(&temp).record_toggle(news(3).as_ref(), false).unwrap();

    assert!(!engine(&temp).is_overridden(news(3).as_ref()));
}

#[test]
fn no_toggle_outside_the_control_panel() {
    let temp = TempDir::new().unwrap();
    let slugeq = engine(&temp);
    let ctx = RenderContext::new("categories/_edit").with_element("category", news(1));

    assert!(slugeq.toggle_for(&ctx, RequestKind::Site).is_none());
    assert!(slugeq.toggle_for(&RenderContext::new("users/_edit"), RequestKind::ControlPanel).is_none());
}

#[test]
fn no_toggle_without_an_element() {
    let temp = TempDir::new().unwrap();
    let slugeq = engine(&temp);

    assert!(slugeq.toggle_for(&RenderContext::new("entries/_edit"), RequestKind::ControlPanel).is_none());
}

#[derive(Debug)]
struct Screen(Arc<dyn Element>);

impl ScreenElementSource for Screen {
    fn current_element(&self) -> Option<Arc<dyn Element>> {
        Some(Arc::clone(&self.0))
    }
}

#[test]
fn unified_editor_toggle_comes_from_screen_source() {
    let temp = TempDir::new().unwrap();
    let slugeq = engine(&temp);
    let entry: Arc<dyn Element> = Arc::new(Entry {
        id: ElementId(8),
        title: "Post".into(),
        section: ContentType::new("blog", "Blog"),
    });
    let ctx = RenderContext::new("entries/_edit")
        .with_details("<div id=\"slug-field\"></div>")
        .with_screen_source(Arc::new(Screen(entry)));

    let toggle = slugeq.toggle_for(&ctx, RequestKind::ControlPanel).unwrap();
    assert_eq!(toggle.element_id, ElementId(8));
    assert!(!toggle.overridden);
}

#[test]
fn toggle_serializes_for_templates() {
    let toggle = Toggle {
        element_id: ElementId(5),
        overridden: true,
        decision: Decision::Element { enabled: true },
    };

    let json = serde_json::to_value(&toggle).unwrap();
    assert_eq!(json["elementId"], 5);
    assert_eq!(json["decision"]["source"], "element");
}
