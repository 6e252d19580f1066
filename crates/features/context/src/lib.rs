//! Finds the element being edited inside a host rendering context.

mod render;
mod resolve;

pub use render::{ContextValue, RenderContext, ScreenElementSource};
pub use resolve::{is_unified_editor, resolve_element};
