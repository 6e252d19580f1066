#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! slugeq-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// Turns a plain enum into an error type wired into the workspace conventions.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when absent.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, Error>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants carrying a `source`
///   field (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. Context-aware variants carry `context: Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a context field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[slugeq_derive::slugeq_error]
/// pub enum StoreError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(path: &std::path::Path) -> Result<Vec<u8>, StoreError> {
///     std::fs::read(path).context("Reading override record")
/// }
/// ```
#[proc_macro_attribute]
pub fn slugeq_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
