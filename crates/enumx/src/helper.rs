//! # Typed Helpers
//!
//! Free functions over a type parameter. Functions that only need the type accept any
//! [`Reflect`] type and see through `Option` via [`Underlying`], so
//! `values::<Option<Weekday>>()` and `values::<Weekday>()` agree. Functions that take a
//! value of the enumeration are generic over [`Enumeration`] directly so the type is
//! inferred from the argument.
//!
//! The strict helpers return [`EnumError`]; [`try_parse`], [`cast`] and
//! [`random_excluding`] fall back to a default value instead.

use crate::enumeration::Enumeration;
use crate::error::EnumError;
use crate::random::shared;
use crate::reflect::{self, Reflect, TypeDescriptor};
use fxhash::FxHashMap;
use tracing::trace;

/// `T` with any `Option` wrapper removed.
pub type Underlying<T> = <T as Reflect>::Underlying;

/// True if `T`, or the type wrapped by `T: Option<_>`, is an enumeration.
#[must_use]
pub fn is_enum<T: Reflect>() -> bool {
    T::descriptor().is_enum()
}

/// Instance form of [`is_enum`].
///
/// # Errors
/// [`EnumError::NullArgument`] if `value` is missing or is a `None` optional.
pub fn is_enum_value<T: Reflect>(value: Option<&T>) -> Result<bool, EnumError> {
    match value {
        Some(v) if !v.is_absent() => Ok(is_enum::<T>()),
        _ => Err(EnumError::null_argument(format!(
            "value of type {} is absent",
            T::descriptor()
        ))),
    }
}

/// Descriptor of `T` with its `Option` wrapper removed.
#[must_use]
pub fn underlying_type<T: Reflect>() -> TypeDescriptor {
    <Underlying<T> as Reflect>::descriptor()
}

/// Number of defined values.
#[must_use]
pub fn count<T>() -> usize
where
    T: Reflect,
    Underlying<T>: Enumeration,
{
    <Underlying<T> as Enumeration>::VARIANTS.len()
}

/// All defined values in definition order.
#[must_use]
pub fn values<T>() -> &'static [Underlying<T>]
where
    T: Reflect,
    Underlying<T>: Enumeration,
{
    <Underlying<T> as Enumeration>::VARIANTS
}

/// The value at `index` in definition order.
///
/// # Errors
/// [`EnumError::IndexOutOfRange`] if `index >= count::<T>()`.
pub fn value_at<T>(index: usize) -> Result<Underlying<T>, EnumError>
where
    T: Reflect,
    Underlying<T>: Enumeration,
{
    <Underlying<T> as Enumeration>::from_ordinal(index)
        .ok_or_else(|| reflect::out_of_range(<Underlying<T> as Enumeration>::TABLE, index))
}

/// Declared name of `value`.
#[must_use]
pub fn name<E: Enumeration>(value: E) -> &'static str {
    value.name()
}

/// All declared names, in the same order as [`values`].
#[must_use]
pub fn names<T>() -> Vec<&'static str>
where
    T: Reflect,
    Underlying<T>: Enumeration,
{
    <Underlying<T> as Enumeration>::TABLE.names().collect()
}

/// Strict parse: the value whose name matches `text`, ignoring case.
///
/// # Errors
/// [`EnumError::Parse`] if no member matches. The message contains `text`.
pub fn parse<T>(text: &str) -> Result<Underlying<T>, EnumError>
where
    T: Reflect,
    Underlying<T>: Enumeration,
{
    <Underlying<T> as Enumeration>::lookup(text, true)
        .ok_or_else(|| reflect::parse_failure(<Underlying<T> as Enumeration>::TABLE, text))
}

/// Defensive parse ignoring case; [`Enumeration::default_value`] when nothing matches.
#[must_use]
pub fn try_parse<E: Enumeration>(text: &str) -> E {
    try_parse_with(text, true)
}

/// Defensive parse; [`Enumeration::default_value`] when nothing matches.
#[must_use]
pub fn try_parse_with<E: Enumeration>(text: &str, ignore_case: bool) -> E {
    E::lookup(text, ignore_case).unwrap_or_else(|| {
        trace!(enumeration = E::TABLE.type_name(), text, "No member matched, using default value");
        E::default_value()
    })
}

/// The value whose code equals `code`, or `default` when the code is undefined.
#[must_use]
pub fn cast<E: Enumeration>(code: i64, default: E) -> E {
    E::from_code(code).unwrap_or_else(|| {
        trace!(enumeration = E::TABLE.type_name(), code, "Undefined code, using fallback");
        default
    })
}

/// [`cast`] falling back to [`Enumeration::default_value`].
#[must_use]
pub fn cast_or_default<E: Enumeration>(code: i64) -> E {
    cast(code, E::default_value())
}

/// One uniformly selected value, drawn from the shared random source.
#[must_use]
pub fn random<T>() -> Underlying<T>
where
    T: Reflect,
    Underlying<T>: Enumeration,
{
    shared().pick()
}

/// One uniformly selected value not in `excluded`, drawn from the shared random source.
///
/// Returns [`Enumeration::default_value`] when `excluded` covers every value.
#[must_use]
pub fn random_excluding<E: Enumeration>(excluded: &[E]) -> E {
    shared().pick_excluding(excluded)
}

/// Every value mapped to its `#[enumeration(description = "...")]` text, if any.
#[must_use]
pub fn descriptions<T>() -> FxHashMap<Underlying<T>, Option<&'static str>>
where
    T: Reflect,
    Underlying<T>: Enumeration,
{
    values::<T>().iter().map(|&value| (value, value.description())).collect()
}
