use crate::render::{ContextValue, RenderContext};
use slugeq_domain::constants::SLUG_FIELD_MARKER;
use slugeq_domain::element::Element;
use slugeq_registry::Registry;
use std::sync::Arc;
use tracing::{debug, trace};

/// Whether `ctx` comes from the unified element editor, recognized by the slug field
/// rendered into its `details` payload.
pub fn is_unified_editor(ctx: &RenderContext) -> bool {
    ctx.details().is_some_and(|d| d.contains(SLUG_FIELD_MARKER))
}

/// Locates the element a render or save context is about.
///
/// Unified-editor contexts are answered by the attached
/// [`ScreenElementSource`](crate::ScreenElementSource) only. All other contexts are
/// probed slot by slot in descriptor order; the first slot holding an element wins.
pub fn resolve_element(registry: &Registry, ctx: &RenderContext) -> Option<Arc<dyn Element>> {
    if is_unified_editor(ctx) {
        let found = ctx.screen_source().and_then(|s| s.current_element());
        if found.is_none() {
            debug!(template = ctx.template(), "Unified editor without a screen element");
        }
        return found;
    }

    registry
        .slots()
        .find_map(|name| ctx.slot(name).and_then(ContextValue::as_element).map(|e| (name, e)))
        .map(|(slot, element)| {
            trace!(slot, element_id = %element.id(), "Element found in context slot");
            Arc::clone(element)
        })
}
