pub mod fixtures;

use enumx::prelude::*;
use fixtures::{Priority, Weekday};
use proptest::prelude::*;

fn weekday() -> impl Strategy<Value = Weekday> {
    (0..enumx::count::<Weekday>()).prop_map(|i| enumx::values::<Weekday>()[i])
}

fn recase(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
        .collect()
}

proptest! {
    #[test]
    fn parse_inverts_name_under_any_casing(
        day in weekday(),
        mask in proptest::collection::vec(any::<bool>(), 1..8),
        pad in "[ \t]{0,3}",
    ) {
        let text = format!("{pad}{}{pad}", recase(day.name(), &mask));
        prop_assert_eq!(enumx::parse::<Weekday>(&text).unwrap(), day);
        prop_assert_eq!(enumx::try_parse::<Weekday>(&text), day);
    }

    #[test]
    fn code_round_trips_through_cast(day in weekday()) {
        prop_assert_eq!(enumx::cast(day.code(), Weekday::Sat), day);
        prop_assert_eq!(Weekday::from_code(day.code()), Some(day));
    }

    #[test]
    fn cast_is_total(code in any::<i64>()) {
        let cast = enumx::cast_or_default::<Priority>(code);
        if enumx::values::<Priority>().iter().any(|p| p.code() == code) {
            prop_assert_eq!(cast.code(), code);
        } else {
            prop_assert_eq!(cast, Priority::default_value());
        }
    }

    #[test]
    fn unknown_names_fall_back(text in "[a-z]{9,16}") {
        prop_assert!(enumx::parse::<Weekday>(&text).is_err());
        prop_assert_eq!(enumx::try_parse::<Weekday>(&text), Weekday::Sun);
    }

    #[test]
    fn exclusion_is_honoured(excluded in proptest::collection::vec(weekday(), 0..6)) {
        let sampler = Sampler::seeded(11);
        for _ in 0..32 {
            let day: Weekday = sampler.pick_excluding(&excluded);
            prop_assert!(!excluded.contains(&day));
        }
    }
}
