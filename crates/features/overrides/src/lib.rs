//! Override resolution engine.
//!
//! Combines the [`Registry`](slugeq_registry::Registry), an
//! [`OverrideStore`](slugeq_store::OverrideStore), and the administrator settings into a
//! single tri-state [`Decision`], collapsed to a boolean only at
//! [`Resolver::is_overridden`].

mod decision;
mod error;
mod resolver;

pub use decision::{Decision, RequestKind};
pub use error::{OverridesError, OverridesErrorExt};
pub use resolver::Resolver;
