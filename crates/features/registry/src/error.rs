use std::borrow::Cow;

/// A specialized [`RegistryError`] enum of this crate.
#[slugeq_derive::slugeq_error]
pub enum RegistryError {
    /// Two families claim the same element class.
    #[error("Duplicate element class{}: {message}", format_context(.context))]
    DuplicateClass { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
