//! # Enumeration Errors
//!
//! This module defines the [`EnumError`] enum returned by the strict helpers.
//! The defensive helpers (`try_parse`, `cast`, `random_excluding`) never produce one.

use std::borrow::Cow;

/// Failures raised by enumeration lookups.
#[enumx_derive::enum_error]
pub enum EnumError {
    /// A required instance argument was absent.
    #[error("Null argument{}: {message}", format_context(.context))]
    NullArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The inspected type is not an enumeration.
    #[error("Not an enum{}: {message}", format_context(.context))]
    NotAnEnum { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Strict parse found no member matching the input.
    #[error("Parse error{}: {message}", format_context(.context))]
    Parse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Positional lookup outside `0..count`.
    #[error("Index out of range{}: {message}", format_context(.context))]
    IndexOutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
