//! # Random Sampling
//!
//! [`Sampler`] draws uniformly distributed enumeration values. The generator sits behind a
//! `parking_lot::Mutex`, so one sampler can be shared by any number of threads.
//!
//! [`shared`] returns the process-wide sampler used by [`crate::random()`] and
//! [`crate::random_excluding`]. Callers that want reproducible or contention-free
//! sampling create their own with [`Sampler::seeded`] or [`Sampler::from_config`].

use crate::config::SamplerConfig;
use crate::enumeration::Enumeration;
use crate::table::{EnumTable, Member};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::LazyLock;
use tracing::{debug, trace};

static SHARED: LazyLock<Sampler> = LazyLock::new(Sampler::from_entropy);

/// The process-wide sampler, seeded from the operating system on first use.
pub fn shared() -> &'static Sampler {
    &SHARED
}

/// Thread-safe uniform sampler over enumeration values.
#[derive(Debug)]
pub struct Sampler {
    rng: Mutex<StdRng>,
}

impl Sampler {
    /// Creates a sampler seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        debug!("Creating sampler from OS entropy");
        Self { rng: Mutex::new(StdRng::from_os_rng()) }
    }

    /// Creates a sampler with a fixed seed. Equal seeds yield equal sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Creating seeded sampler");
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    #[must_use]
    pub fn from_config(config: &SamplerConfig) -> Self {
        config.seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// One uniformly selected value of `E`.
    pub fn pick<E: Enumeration>(&self) -> E {
        let index = self.index(E::VARIANTS.len());
        E::from_ordinal(index).unwrap_or_else(E::default_value)
    }

    /// One uniformly selected value of `E` that is not in `excluded`.
    ///
    /// Falls back to [`Enumeration::default_value`] when `excluded` covers every value.
    pub fn pick_excluding<E: Enumeration>(&self, excluded: &[E]) -> E {
        let mut remaining = E::VARIANTS.iter().filter(|v| !excluded.contains(*v));
        let len = remaining.clone().count();
        if len == 0 {
            trace!(
                enumeration = E::TABLE.type_name(),
                excluded = excluded.len(),
                "Every value excluded, using default value"
            );
            return E::default_value();
        }

        remaining.nth(self.index(len)).copied().unwrap_or_else(E::default_value)
    }

    /// One uniformly selected member of `table`, `None` if the table is empty.
    pub fn pick_member(&self, table: &'static EnumTable) -> Option<&'static Member> {
        let len = table.len();
        if len == 0 {
            return None;
        }
        table.get(self.index(len))
    }

    fn index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.lock().random_range(0..len)
    }
}
