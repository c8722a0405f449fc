//! # enumx
//!
//! Reflection-style helpers for fieldless enums: membership testing, value and name
//! enumeration, strict and defensive parsing, safe integer casts and random sampling.
//!
//! ## Overview
//!
//! Rust has no runtime type inspection, so `#[derive(Enumeration)]` generates it: a static
//! member table of `(name, code, description)` entries plus implementations of
//! [`Enumeration`] and [`Reflect`]. Everything else is a thin, stateless function over that
//! table, except for random sampling which uses one shared, mutex-guarded generator.
//!
//! ## Features
//!
//! * **Typed helpers**: [`values`], [`names`], [`count`], [`value_at`], [`parse`], [`random`]
//!   accept the enum or `Option<Enum>` as the type parameter.
//! * **Defensive helpers**: [`try_parse`], [`cast`] and [`random_excluding`] fall back to a
//!   default value instead of failing.
//! * **Runtime handle**: [`TypeDescriptor`] answers the same questions for a type chosen at
//!   runtime, failing with [`EnumError::NotAnEnum`] for non-enumerations.
//! * **Sampling**: [`Sampler`] for seeded or per-thread generators.
//!
//! # Example
//!
//! ```rust
//! use enumx::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
//! enum Weekday { Sun, Mon, Tue, Wed, Thu, Fri, Sat }
//!
//! assert_eq!(enumx::count::<Weekday>(), 7);
//! assert_eq!(Weekday::Tue.name(), "Tue");
//! assert_eq!(enumx::parse::<Weekday>("thu")?, Weekday::Thu);
//! assert_eq!(enumx::try_parse::<Weekday>("Moonday"), Weekday::Sun);
//! assert_eq!(enumx::cast(3, Weekday::Mon), Weekday::Wed);
//! assert_eq!(enumx::cast(33, Weekday::Mon), Weekday::Mon);
//! assert!(enumx::is_enum::<Option<Weekday>>());
//! assert!(!enumx::is_enum::<String>());
//!
//! let weekday = enumx::random_excluding(&[Weekday::Sat, Weekday::Sun]);
//! assert!(!matches!(weekday, Weekday::Sat | Weekday::Sun));
//! # Ok::<(), EnumError>(())
//! ```

mod config;
mod enumeration;
mod error;
mod ext;
mod helper;
pub mod random;
mod reflect;
mod table;

pub use config::SamplerConfig;
pub use enumeration::Enumeration;
pub use enumx_derive::Enumeration;
pub use error::{EnumError, EnumErrorExt};
pub use ext::ReflectExt;
pub use helper::{
    Underlying, cast, cast_or_default, count, descriptions, is_enum, is_enum_value, name, names,
    parse, random, random_excluding, try_parse, try_parse_with, underlying_type, value_at, values,
};
pub use random::Sampler;
pub use reflect::{Reflect, TypeDescriptor};
pub use table::{EnumTable, Member};

pub mod prelude {
    //! Traits and types needed by most callers.
    pub use crate::{
        EnumError, EnumErrorExt, Enumeration, Reflect, ReflectExt, Sampler, TypeDescriptor,
    };
}
