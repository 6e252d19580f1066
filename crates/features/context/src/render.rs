use fxhash::FxHashMap;
use slugeq_domain::constants::slots;
use slugeq_domain::element::Element;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Value of a named rendering-context slot.
#[derive(Debug, Clone)]
pub enum ContextValue {
    Element(Arc<dyn Element>),
    Text(String),
}

impl ContextValue {
    pub fn as_element(&self) -> Option<&Arc<dyn Element>> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Element(_) => None,
        }
    }
}

/// Host capability handing back the element being edited on the unified editor screen,
/// which does not publish it through the named slots.
pub trait ScreenElementSource: Debug + Send + Sync {
    fn current_element(&self) -> Option<Arc<dyn Element>>;
}

/// A template render (or save event) as seen by the host pipeline.
#[derive(Clone, Default)]
pub struct RenderContext {
    template: String,
    slots: FxHashMap<String, ContextValue>,
    screen: Option<Arc<dyn ScreenElementSource>>,
}

impl RenderContext {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, value: ContextValue) -> Self {
        self.slots.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn with_element(self, name: impl Into<String>, element: Arc<dyn Element>) -> Self {
        self.with_slot(name, ContextValue::Element(element))
    }

    /// Sets the rendered `details` payload of the editor sidebar.
    #[must_use]
    pub fn with_details(self, details: impl Into<String>) -> Self {
        self.with_slot(slots::DETAILS, ContextValue::Text(details.into()))
    }

    #[must_use]
    pub fn with_screen_source(mut self, source: Arc<dyn ScreenElementSource>) -> Self {
        self.screen = Some(source);
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn slot(&self, name: &str) -> Option<&ContextValue> {
        self.slots.get(name)
    }

    pub fn details(&self) -> Option<&str> {
        self.slot(slots::DETAILS).and_then(ContextValue::as_text)
    }

    pub fn screen_source(&self) -> Option<&Arc<dyn ScreenElementSource>> {
        self.screen.as_ref()
    }
}

impl Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.slots.keys().collect();
        names.sort_unstable();
        f.debug_struct("RenderContext")
            .field("template", &self.template)
            .field("slots", &names)
            .field("screen", &self.screen.is_some())
            .finish()
    }
}
