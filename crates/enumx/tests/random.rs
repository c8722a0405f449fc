pub mod fixtures;

use enumx::prelude::*;
use enumx::SamplerConfig;
use fixtures::{Signal, Weekday};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const TRIALS: usize = 1000;

#[test]
fn random_visits_every_value() {
    let drawn: Vec<Weekday> = (0..TRIALS).map(|_| enumx::random::<Weekday>()).collect();
    let distinct: HashSet<_> = drawn.iter().copied().collect();

    assert_eq!(drawn.len(), TRIALS);
    assert_eq!(distinct.len(), enumx::count::<Weekday>());
}

#[test]
fn random_over_optional_type() {
    let drawn: HashSet<Weekday> =
        (0..TRIALS).map(|_| enumx::random::<Option<Weekday>>()).collect();
    assert_eq!(drawn.len(), 7);
}

#[test]
fn small_samples_are_not_constant() {
    let drawn: Vec<Weekday> = (0..50).map(|_| enumx::random::<Weekday>()).collect();
    assert!(drawn.iter().any(|day| *day != drawn[0]));
}

#[test]
fn random_excluding_particular_values() {
    let excluded = [Weekday::Sat, Weekday::Sun];
    let drawn: Vec<Weekday> =
        (0..TRIALS).map(|_| enumx::random_excluding(&excluded)).collect();
    let distinct: HashSet<_> = drawn.iter().copied().collect();

    assert_eq!(drawn.len(), TRIALS);
    assert!(!distinct.contains(&Weekday::Sat));
    assert!(!distinct.contains(&Weekday::Sun));
    for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
        assert!(distinct.contains(&day), "{day} was never drawn");
    }
}

#[test]
fn random_excluding_everything_returns_default() {
    fixtures::init_tracing();
    assert_eq!(enumx::random_excluding(enumx::values::<Weekday>()), Weekday::Sun);
    assert_eq!(
        enumx::random_excluding(&[Signal::Green, Signal::Amber, Signal::Red]),
        Signal::Red
    );
}

#[test]
fn random_excluding_all_but_one() {
    let excluded: Vec<Weekday> =
        enumx::values::<Weekday>().iter().copied().filter(|d| *d != Weekday::Wed).collect();
    assert!((0..100).all(|_| enumx::random_excluding(&excluded) == Weekday::Wed));
}

#[test]
fn seeded_samplers_are_reproducible() {
    let config: SamplerConfig = SamplerConfig::seeded(2024);
    let first = Sampler::from_config(&config);
    let second = Sampler::seeded(2024);

    let a: Vec<Weekday> = (0..100).map(|_| first.pick()).collect();
    let b: Vec<Weekday> = (0..100).map(|_| second.pick()).collect();
    assert_eq!(a, b);
}

#[test]
fn shared_sampler_survives_concurrent_use() {
    let sampler = Arc::new(Sampler::from_entropy());
    let excluded = [Weekday::Sun];

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sampler = Arc::clone(&sampler);
            thread::spawn(move || {
                (0..TRIALS).map(|_| sampler.pick_excluding(&excluded)).collect::<Vec<Weekday>>()
            })
        })
        .collect();

    let mut distinct = HashSet::new();
    for handle in handles {
        let drawn = handle.join().expect("sampling thread panicked");
        assert_eq!(drawn.len(), TRIALS);
        distinct.extend(drawn);
    }

    assert!(!distinct.contains(&Weekday::Sun));
    assert_eq!(distinct.len(), 6);
}

#[test]
fn global_helpers_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| (0..TRIALS).map(|_| enumx::random::<Weekday>()).count()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("sampling thread panicked"), TRIALS);
    }
}
