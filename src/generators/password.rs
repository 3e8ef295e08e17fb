// src/generators/password.rs
use crate::models::{CharacterClass, GenerationRequest};
use crate::random::RandomSource;

/// Generate a password of exactly `length` characters drawn from the given
/// classes.
///
/// The buffer is filled round-robin: one random character per class per
/// cycle, until it reaches `length`. This front-loads class diversity, so
/// whenever `length >= classes.len()` the raw buffer holds at least one
/// character from every class. The buffer is then truncated to `length` and
/// Fisher-Yates shuffled to remove the positional bias of the round-robin
/// order.
///
/// Truncation policy: for `length < classes.len()` the last partial cycle is
/// cut off, so only the first `length` classes in iteration order are
/// represented. An empty class slice yields the empty string; so does
/// `length == 0`. Neither is an error.
pub fn generate(classes: &[CharacterClass], length: usize, rng: &mut dyn RandomSource) -> String {
    if classes.is_empty() {
        return String::new();
    }

    let mut buffer: Vec<char> = Vec::with_capacity(length + classes.len());
    while buffer.len() < length {
        for class in classes {
            buffer.push(class.draw(rng));
        }
    }
    buffer.truncate(length);

    shuffle(&mut buffer, rng);
    buffer.into_iter().collect()
}

/// Convenience wrapper mapping a request onto [`generate`].
pub fn generate_request(request: &GenerationRequest, rng: &mut dyn RandomSource) -> String {
    generate(&request.enabled_classes(), request.length, rng)
}

// Fisher-Yates (Knuth): i from len-1 down to 1, j uniform in [0, i].
fn shuffle(buffer: &mut [char], rng: &mut dyn RandomSource) {
    for i in (1..buffer.len()).rev() {
        let j = rng.next_index(i + 1);
        buffer.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    /// Replays a fixed list of draw results, ignoring the bound (the test
    /// must script values that are already in range).
    struct ScriptedSource {
        values: Vec<usize>,
        pos: usize,
    }

    impl ScriptedSource {
        fn new(values: Vec<usize>) -> Self {
            Self { values, pos: 0 }
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_index(&mut self, bound: usize) -> usize {
            let value = self.values[self.pos];
            self.pos += 1;
            assert!(value < bound, "scripted value {} out of bound {}", value, bound);
            value
        }
    }

    #[test]
    fn empty_class_set_yields_empty_string() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(generate(&[], 0, &mut rng), "");
        assert_eq!(generate(&[], 32, &mut rng), "");
    }

    #[test]
    fn zero_length_yields_empty_string() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(generate(&CharacterClass::ALL, 0, &mut rng), "");
    }

    #[test]
    fn output_length_matches_request() {
        let mut rng = SeededRandom::new(3);
        for length in [1, 2, 3, 5, 16, 64, 100] {
            assert_eq!(generate(&CharacterClass::ALL, length, &mut rng).len(), length);
        }
    }

    #[test]
    fn every_enabled_class_is_represented() {
        let classes = [CharacterClass::Lowercase, CharacterClass::Digit];
        for seed in 0..200 {
            let mut rng = SeededRandom::new(seed);
            let password = generate(&classes, 10, &mut rng);
            assert_eq!(password.len(), 10);
            assert!(password.chars().any(|c| CharacterClass::Lowercase.contains(c)));
            assert!(password.chars().any(|c| CharacterClass::Digit.contains(c)));
        }
    }

    #[test]
    fn all_four_classes_appear_at_minimal_length() {
        for seed in 0..200 {
            let mut rng = SeededRandom::new(seed);
            let password = generate(&CharacterClass::ALL, 4, &mut rng);
            for class in CharacterClass::ALL {
                assert!(
                    password.chars().any(|c| class.contains(c)),
                    "{:?} missing from {:?} (seed {})",
                    class,
                    password,
                    seed
                );
            }
        }
    }

    #[test]
    fn output_stays_within_enabled_alphabets() {
        let classes = [CharacterClass::Uppercase, CharacterClass::Symbol];
        for seed in 0..50 {
            let mut rng = SeededRandom::new(seed);
            let password = generate(&classes, 24, &mut rng);
            for c in password.chars() {
                assert!(
                    classes.iter().any(|class| class.contains(c)),
                    "unexpected character {:?}",
                    c
                );
            }
        }
    }

    #[test]
    fn truncation_keeps_leading_classes_when_length_is_short() {
        // length 1 with two classes enabled: only the first class survives.
        for seed in 0..50 {
            let mut rng = SeededRandom::new(seed);
            let classes = [CharacterClass::Digit, CharacterClass::Symbol];
            let password = generate(&classes, 1, &mut rng);
            assert_eq!(password.len(), 1);
            assert!(password.chars().all(|c| CharacterClass::Digit.contains(c)));
        }
    }

    #[test]
    fn identical_seeds_yield_identical_passwords() {
        let request = GenerationRequest::default();
        let first = generate_request(&request, &mut SeededRandom::new(99));
        let second = generate_request(&request, &mut SeededRandom::new(99));
        assert_eq!(first, second);
    }

    #[test]
    fn all_zero_source_yields_first_alphabet_character() {
        // Draws pick index 0 ('A'), and a shuffle of "AAAAA" is "AAAAA".
        let mut rng = ScriptedSource::new(vec![0; 9]);
        let password = generate(&[CharacterClass::Uppercase], 5, &mut rng);
        assert_eq!(password, "AAAAA");
    }

    #[test]
    fn shuffle_applies_exact_fisher_yates_permutation() {
        // Four lowercase draws at indices 0..3 give "abcd"; swap indices
        // j = 0 at i = 3, 2, 1 walk it to "bcda".
        let mut rng = ScriptedSource::new(vec![0, 1, 2, 3, 0, 0, 0]);
        let password = generate(&[CharacterClass::Lowercase], 4, &mut rng);
        assert_eq!(password, "bcda");
        assert_eq!(rng.pos, 7, "shuffle must draw exactly len - 1 indices");
    }

    #[test]
    fn single_character_password_skips_the_shuffle() {
        // One draw, no swap indices.
        let mut rng = ScriptedSource::new(vec![25]);
        let password = generate(&[CharacterClass::Lowercase], 1, &mut rng);
        assert_eq!(password, "z");
        assert_eq!(rng.pos, 1);
    }

    #[test]
    fn request_with_everything_disabled_yields_empty_string() {
        let request = GenerationRequest {
            length: 20,
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
        };
        let mut rng = SeededRandom::new(5);
        assert_eq!(generate_request(&request, &mut rng), "");
    }
}
