//! # Member Tables
//!
//! Static descriptions of an enumeration's members, emitted by `#[derive(Enumeration)]`.
//! Tables are immutable and `'static`; lookups are linear scans in definition order.

use std::fmt;

/// One declared member of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    name: &'static str,
    code: i64,
    description: Option<&'static str>,
}

impl Member {
    #[must_use]
    pub const fn new(name: &'static str, code: i64, description: Option<&'static str>) -> Self {
        Self { name, code, description }
    }

    /// Declared name, without any raw identifier prefix.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Underlying integral code (the enum discriminant).
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    #[must_use]
    pub const fn description(&self) -> Option<&'static str> {
        self.description
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The ordered member table of one enumeration type.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumTable {
    type_name: &'static str,
    members: &'static [Member],
}

impl EnumTable {
    #[must_use]
    pub const fn new(type_name: &'static str, members: &'static [Member]) -> Self {
        Self { type_name, members }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Members in definition order.
    #[must_use]
    pub const fn members(&self) -> &'static [Member] {
        self.members
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&'static Member> {
        self.members.get(ordinal)
    }

    /// Declared names in definition order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> + use<> {
        let members: &'static [Member] = self.members;
        members.iter().map(Member::name)
    }

    /// Position of the first member whose code equals `code`.
    #[must_use]
    pub fn position_of_code(&self, code: i64) -> Option<usize> {
        self.members.iter().position(|m| m.code == code)
    }

    /// Resolves `text` to a member position.
    ///
    /// Surrounding whitespace is ignored. An exact name match wins over a case-insensitive
    /// one; a decimal integer matches the member with that code. Returns `None` when
    /// nothing matches, including for integers that are not a defined code.
    #[must_use]
    pub fn lookup(&self, text: &str, ignore_case: bool) -> Option<usize> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(pos) = self.members.iter().position(|m| m.name == text) {
            return Some(pos);
        }
        if ignore_case
            && let Some(pos) = self.members.iter().position(|m| eq_ignore_case(m.name, text))
        {
            return Some(pos);
        }

        text.parse::<i64>().ok().and_then(|code| self.position_of_code(code))
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}
