#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros backing the `enumx` crate.
//! The derive turns a plain fieldless enum into something `enumx` can introspect
//! (member table, ordinal lookup, default value); the attribute macro removes the
//! boilerplate around the crate's error enum.
//!
//! ## Usage
//! Depend on `enumx`, which re-exports the derive:
//! ```toml
//! [dependencies]
//! enumx = { path = "../crates/enumx" }
//! ```
//!
//! The examples below are `ignore`d to avoid compiling in this crate; the
//! `enumx` test suite exercises them.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `enumx::Enumeration` and `enumx::Reflect` for a fieldless enum.
///
/// The expansion contains a static member table (declared name, integral code,
/// optional description) in definition order, the variant list, an ordinal
/// lookup and the default value used by the defensive helpers.
///
/// # Attributes
///
/// Container level, `#[enumeration(...)]`:
/// * `from_str` - Also implements `FromStr` using the strict, case-insensitive parser.
/// * `display` - Also implements `Display` writing the declared name.
///
/// Variant level, `#[enumeration(...)]`:
/// * `description = "..."` - Free-form text returned by `Enumeration::description`.
/// * `default` - Marks the variant returned on fallback. Without it the variant
///   with code `0` is used, or the first variant when no code is `0`.
///
/// # Errors
/// Emits a compile-time error for structs, unions, generic enums, empty enums,
/// variants with fields, unknown options, or more than one `default` variant.
/// Codes are `i64`, so `#[repr(u64)]`, `#[repr(usize)]`, `#[repr(i128)]` and
/// `#[repr(u128)]` are rejected as well.
///
/// # Example
///
/// ```rust,ignore
/// use enumx::Enumeration;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
/// #[enumeration(from_str, display)]
/// pub enum Weekday {
///     Sun,
///     Mon,
///     Tue,
///     Wed,
///     Thu,
///     #[enumeration(description = "Friday")]
///     Fri,
///     #[enumeration(description = "Saturday")]
///     Sat,
/// }
///
/// assert_eq!(enumx::count::<Weekday>(), 7);
/// assert_eq!(Weekday::Fri.description(), Some("Friday"));
/// ```
#[proc_macro_derive(Enumeration, attributes(enumeration))]
pub fn derive_enumeration(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::enumeration::expand_derive(input).into()
}

/// Attribute macro for error enums whose variants carry a message and an optional context.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>`.
/// * **Constructors**: One snake_case constructor per variant taking the message.
/// * **Accessors**: `kind()` (variant name) and `message()`.
/// * **Formatting**: A module-local `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Every variant has exactly two named fields: `message: Cow<'static, str>` and
/// `context: Option<Cow<'static, str>>`. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use enumx_derive::enum_error;
/// use std::borrow::Cow;
///
/// #[enum_error]
/// pub enum LookupError {
///     #[error("Missing entry{}: {message}", format_context(.context))]
///     Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn find() -> Result<(), LookupError> {
///     Err(LookupError::missing("no such key")).context("Resolving configuration")
/// }
/// ```
#[proc_macro_attribute]
pub fn enum_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
