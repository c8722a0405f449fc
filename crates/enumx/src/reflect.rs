//! # Type Reflection
//!
//! [`Reflect`] is the compile-time stand-in for runtime type inspection: every type that
//! participates answers "am I an enumeration, and what is my unwrapped type". Enumerations
//! get an implementation from `#[derive(Enumeration)]`, `Option<T>` sees through to `T`,
//! and common scalar and string types report themselves as non-enumerations.
//!
//! [`TypeDescriptor`] is the runtime handle obtained from a [`Reflect`] type. Its lookups
//! return [`Member`] records and fail with [`EnumError::NotAnEnum`] for other types.

use crate::error::EnumError;
use crate::random::shared;
use crate::table::{EnumTable, Member};
use std::any::TypeId;
use std::fmt;

/// Type-level reflection hook.
pub trait Reflect: 'static {
    /// The type with any `Option` wrapper removed.
    type Underlying: Reflect;

    /// Runtime handle for this type.
    fn descriptor() -> TypeDescriptor;

    /// Whether this instance stands for "no value" (a `None` optional).
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Reflect> Reflect for Option<T> {
    type Underlying = T::Underlying;

    #[inline]
    fn descriptor() -> TypeDescriptor {
        T::descriptor().optional()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(Reflect::is_absent)
    }
}

macro_rules! impl_opaque_reflect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                type Underlying = Self;

                #[inline]
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::opaque::<$ty>(stringify!($ty))
                }
            }
        )*
    };
}

impl_opaque_reflect!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, &'static str,
);

/// Runtime handle describing a [`Reflect`] type.
///
/// Two descriptors are equal only for the same Rust type; enumerations that share a name
/// and member list but live in different modules stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    table: Option<&'static EnumTable>,
    nullable: bool,
}

impl TypeDescriptor {
    /// Descriptor of the enumeration `T`, backed by `table`.
    #[must_use]
    pub fn enumeration<T: ?Sized + 'static>(table: &'static EnumTable) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: table.type_name(),
            table: Some(table),
            nullable: false,
        }
    }

    /// Descriptor of `T`, which is not an enumeration.
    #[must_use]
    pub fn opaque<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self { id: TypeId::of::<T>(), name, table: None, nullable: false }
    }

    #[must_use]
    pub fn of<T: Reflect>() -> Self {
        T::descriptor()
    }

    /// The same type wrapped in `Option`.
    #[must_use]
    pub const fn optional(self) -> Self {
        Self { nullable: true, ..self }
    }

    /// The type with its `Option` wrapper removed.
    #[must_use]
    pub const fn underlying(self) -> Self {
        Self { nullable: false, ..self }
    }

    /// Short name of the underlying type, without its module path.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// True for enumerations and their `Option` wrappers.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        self.table.is_some()
    }

    /// The member table of this enumeration.
    ///
    /// # Errors
    /// [`EnumError::NotAnEnum`] if the type is not an enumeration.
    pub fn table(&self) -> Result<&'static EnumTable, EnumError> {
        self.table
            .ok_or_else(|| EnumError::not_an_enum(format!("type {} must be an enum", self.name)))
    }

    /// All members in definition order.
    ///
    /// # Errors
    /// [`EnumError::NotAnEnum`] if the type is not an enumeration.
    pub fn values(&self) -> Result<&'static [Member], EnumError> {
        self.table().map(EnumTable::members)
    }

    /// Member at `index` in definition order.
    ///
    /// # Errors
    /// * [`EnumError::NotAnEnum`] if the type is not an enumeration.
    /// * [`EnumError::IndexOutOfRange`] if `index >= count`.
    pub fn value_at(&self, index: usize) -> Result<Member, EnumError> {
        let table = self.table()?;
        table.get(index).copied().ok_or_else(|| out_of_range(table, index))
    }

    /// # Errors
    /// [`EnumError::NotAnEnum`] if the type is not an enumeration.
    pub fn count(&self) -> Result<usize, EnumError> {
        self.table().map(EnumTable::len)
    }

    /// # Errors
    /// [`EnumError::NotAnEnum`] if the type is not an enumeration.
    pub fn names(&self) -> Result<Vec<&'static str>, EnumError> {
        self.table().map(|table| table.names().collect())
    }

    /// Declared name of the member with `code`, `None` for an undefined code.
    ///
    /// # Errors
    /// [`EnumError::NotAnEnum`] if the type is not an enumeration.
    pub fn name_of(&self, code: i64) -> Result<Option<&'static str>, EnumError> {
        let table = self.table()?;
        Ok(table.position_of_code(code).and_then(|pos| table.get(pos)).map(Member::name))
    }

    /// Strict, case-insensitive parse.
    ///
    /// # Errors
    /// * [`EnumError::NotAnEnum`] if the type is not an enumeration.
    /// * [`EnumError::Parse`] if no member matches `text`.
    pub fn parse(&self, text: &str) -> Result<Member, EnumError> {
        let table = self.table()?;
        table
            .lookup(text, true)
            .and_then(|pos| table.get(pos))
            .copied()
            .ok_or_else(|| parse_failure(table, text))
    }

    /// Uniformly sampled member, drawn from the shared random source.
    ///
    /// # Errors
    /// [`EnumError::NotAnEnum`] if the type is not an enumeration.
    pub fn random(&self) -> Result<Member, EnumError> {
        let table = self.table()?;
        shared().pick_member(table).copied().ok_or_else(|| out_of_range(table, 0))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable { write!(f, "Option<{}>", self.name) } else { f.write_str(self.name) }
    }
}

pub(crate) fn out_of_range(table: &EnumTable, index: usize) -> EnumError {
    EnumError::index_out_of_range(format!(
        "index {index} is outside 0..{} for {}",
        table.len(),
        table.type_name()
    ))
}

pub(crate) fn parse_failure(table: &EnumTable, text: &str) -> EnumError {
    EnumError::parse(format!(
        "requested value '{text}' was not found in {}",
        table.type_name()
    ))
}
