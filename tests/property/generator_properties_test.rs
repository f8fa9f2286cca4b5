//! Property-based tests for the password generator.
//!
//! For any valid length and any non-empty set of character classes, the
//! generated password has the requested length, contains every enabled
//! class and nothing else.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rust_passgen::generators::charset::{class_of, members};
use rust_passgen::generators::{PasswordGenerator, SeededRandom};
use rust_passgen::{CharacterClass, GenerationConfig, GenerationLimits};

/// Strategy for non-empty subsets of the character classes.
fn arb_classes() -> impl Strategy<Value = BTreeSet<CharacterClass>> {
    proptest::sample::subsequence(CharacterClass::ALL.to_vec(), 1..=4)
        .prop_map(|classes| classes.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn password_honors_length_and_classes(
        seed in any::<u64>(),
        length in 4usize..=128,
        classes in arb_classes(),
    ) {
        let mut generator = PasswordGenerator::with_source(SeededRandom::new(seed));
        let config = GenerationConfig { length, enabled_classes: classes.clone() };

        let password = generator.generate_password(&config).unwrap();

        prop_assert_eq!(password.len(), length);
        for class in &classes {
            prop_assert!(
                password.as_str().chars().any(|c| members(*class).contains(&c)),
                "missing {} in {}", class, password
            );
        }
        for c in password.as_str().chars() {
            let class = class_of(c);
            prop_assert!(class.map_or(false, |class| classes.contains(&class)), "stray {:?}", c);
        }
    }

    #[test]
    fn guaranteed_characters_are_never_dropped(
        seed in any::<u64>(),
        length in 1usize..4,
    ) {
        let mut generator = PasswordGenerator::with_source(SeededRandom::new(seed))
            .with_limits(GenerationLimits::new(1, 128));
        let config = GenerationConfig::new(length, CharacterClass::ALL);

        let password = generator.generate_password(&config).unwrap();

        prop_assert_eq!(password.len(), 4);
        for class in CharacterClass::ALL {
            prop_assert!(password.as_str().chars().any(|c| class_of(c) == Some(class)));
        }
    }

    #[test]
    fn lengths_outside_limits_are_rejected(
        length in prop_oneof![0usize..4, 129usize..1000],
        classes in arb_classes(),
    ) {
        let mut generator = PasswordGenerator::with_source(SeededRandom::new(0));
        let config = GenerationConfig { length, enabled_classes: classes };
        let err = generator.generate_password(&config).unwrap_err();
        prop_assert!(err.is_invalid_config());
    }
}
