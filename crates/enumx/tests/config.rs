use enumx::{Sampler, SamplerConfig};
use serde_json::json;

#[test]
fn empty_config_uses_entropy() {
    let config: SamplerConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config, SamplerConfig::default());
    assert!(config.seed.is_none());
}

#[test]
fn seed_is_read_from_config() {
    let config: SamplerConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
    assert_eq!(config, SamplerConfig::seeded(42));

    let a = Sampler::from_config(&config);
    let b = Sampler::seeded(42);
    let first: Vec<usize> = (0..16).map(|_| a.pick::<Level>() as usize).collect();
    let second: Vec<usize> = (0..16).map(|_| b.pick::<Level>() as usize).collect();
    assert_eq!(first, second);
}

#[test]
fn null_seed_is_accepted() {
    let config: SamplerConfig = serde_json::from_value(json!({ "seed": null })).unwrap();
    assert!(config.seed.is_none());
}

#[test]
fn negative_seed_is_rejected() {
    assert!(serde_json::from_value::<SamplerConfig>(json!({ "seed": -1 })).is_err());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enumx::Enumeration)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}
