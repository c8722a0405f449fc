use serde::Deserialize;

/// Random source configuration, embeddable in a host application's config file.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Fixed seed for reproducible sampling. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl SamplerConfig {
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}
