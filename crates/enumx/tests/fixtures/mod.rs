#![allow(dead_code)]

use enumx::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[enumeration(from_str, display)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    #[enumeration(description = "Friday")]
    Fri,
    #[enumeration(description = "Saturday")]
    Sat,
}

/// No member has code `0`, so the first member is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
pub enum Priority {
    Low = 10,
    Normal = 20,
    High = 30,
    Critical = -1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumeration)]
pub enum Signal {
    Green = 0,
    Amber,
    #[enumeration(default, description = "Stop")]
    Red,
}

/// Routes `tracing` output through the test harness so fallback traces show up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
