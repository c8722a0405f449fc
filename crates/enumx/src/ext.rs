//! # Reflection Extensions
//!
//! This module provides the [`ReflectExt`] extension trait, which exposes the type-level
//! helpers as methods on any value of a [`Reflect`] type.

use crate::error::EnumError;
use crate::helper;
use crate::reflect::{Reflect, TypeDescriptor};

/// Method-call forms of [`helper::is_enum`] and friends.
///
/// Automatically implemented for every [`Reflect`] type.
pub trait ReflectExt: Reflect + Sized {
    /// True if the value's type is an enumeration or an `Option` of one.
    ///
    /// Unlike [`ReflectExt::try_is_enum`] this inspects only the type, so a `None`
    /// optional still answers for its wrapped type.
    #[inline]
    fn is_enum(&self) -> bool {
        helper::is_enum::<Self>()
    }

    /// Instance check that rejects absent values.
    ///
    /// # Errors
    /// [`EnumError::NullArgument`] if `self` is a `None` optional.
    #[inline]
    fn try_is_enum(&self) -> Result<bool, EnumError> {
        helper::is_enum_value(Some(self))
    }

    #[inline]
    fn type_descriptor(&self) -> TypeDescriptor {
        Self::descriptor()
    }
}

impl<T: Reflect> ReflectExt for T {}
