use slugeq_overrides::OverridesError;
use slugeq_registry::RegistryError;
use slugeq_store::StoreError;
use std::borrow::Cow;

/// A specialized [`SlugEqError`] enum of this crate.
#[slugeq_derive::slugeq_error]
pub enum SlugEqError {
    #[error("Override store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    #[error("Registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Override error{}: {source}", format_context(.context))]
    Overrides { source: OverridesError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
