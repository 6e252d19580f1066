use slugeq_store::StoreError;
use std::borrow::Cow;

/// A specialized [`OverridesError`] enum of this crate.
#[slugeq_derive::slugeq_error]
pub enum OverridesError {
    /// The override could not be persisted; the previous state is kept.
    #[error("Override storage failure{}: {source}", format_context(.context))]
    Storage { source: StoreError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal overrides error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
