use crate::reflect::Reflect;
use crate::table::{EnumTable, Member};
use std::fmt::Debug;
use std::hash::Hash;

/// A closed, ordered set of named integral constants.
///
/// Implemented by `#[derive(Enumeration)]`; hand-written implementations must keep
/// [`Enumeration::TABLE`], [`Enumeration::VARIANTS`] and [`Enumeration::ordinal`] in the
/// same order.
pub trait Enumeration:
    Reflect<Underlying = Self> + Copy + Eq + Hash + Debug + Send + Sync + 'static
{
    /// Member table in definition order.
    const TABLE: &'static EnumTable;

    /// Every value in definition order.
    const VARIANTS: &'static [Self];

    /// Zero-based position of `self` in definition order.
    fn ordinal(self) -> usize;

    /// Fallback value of the defensive helpers.
    fn default_value() -> Self;

    #[inline]
    fn member(self) -> &'static Member {
        &Self::TABLE.members()[self.ordinal()]
    }

    /// Declared name.
    #[inline]
    fn name(self) -> &'static str {
        self.member().name()
    }

    /// Underlying integral code.
    #[inline]
    fn code(self) -> i64 {
        self.member().code()
    }

    #[inline]
    fn description(self) -> Option<&'static str> {
        self.member().description()
    }

    /// The value whose code equals `code`, if one is defined.
    #[inline]
    fn from_code(code: i64) -> Option<Self> {
        Self::TABLE.position_of_code(code).and_then(Self::from_ordinal)
    }

    #[inline]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Name lookup; see [`EnumTable::lookup`] for the matching rules.
    #[inline]
    fn lookup(text: &str, ignore_case: bool) -> Option<Self> {
        Self::TABLE.lookup(text, ignore_case).and_then(Self::from_ordinal)
    }
}
