use breaker_core::{
    analyze, estimate_key_length, find_repeated_patterns, gcd_of_distances,
    measure_distances, Text,
};
use proptest::prelude::*;

// A small alphabet makes repeats likely in short strings.
fn ciphertext() -> impl Strategy<Value = Text> {
    "[a-d]{0,120}".prop_map(|s| Text::new(&s).unwrap())
}

proptest! {
    #[test]
    fn positions_ascend_and_match(text in ciphertext(), len in 1usize..6, max in 1usize..8) {
        let found = find_repeated_patterns(&text, len, max);
        prop_assert!(found.len() <= max);
        for p in &found {
            prop_assert_eq!(p.pattern.len(), len);
            prop_assert!(p.positions.len() >= 2);
            prop_assert!(p.positions.windows(2).all(|w| w[0] < w[1]));
            for &pos in &p.positions {
                prop_assert_eq!(&text.as_str()[pos..pos + len], p.pattern.as_str());
            }
        }
        // most frequent first
        prop_assert!(found.windows(2).all(|w| w[0].positions.len() >= w[1].positions.len()));
    }

    #[test]
    fn scanning_is_repeatable(text in ciphertext(), len in 1usize..6) {
        prop_assert_eq!(find_repeated_patterns(&text, len, 4), find_repeated_patterns(&text, len, 4));
    }

    #[test]
    fn gcd_divides_every_distance(text in ciphertext(), len in 1usize..5) {
        let found = find_repeated_patterns(&text, len, 4);
        for measured in measure_distances(&found) {
            prop_assert!(measured.gcd > 0);
            prop_assert_eq!(measured.gcd, gcd_of_distances(&measured.distances));
            prop_assert!(measured.distances.iter().all(|d| d % measured.gcd == 0));
        }
    }

    #[test]
    fn key_length_is_zero_or_above_one(text in ciphertext(), len in 1usize..6) {
        let key_length = estimate_key_length(&text, len);
        prop_assert!(key_length == 0 || key_length > 1);
    }

    #[test]
    fn report_has_one_candidate_per_position(text in ciphertext()) {
        let report = analyze(&text, 3, 4).unwrap();
        prop_assert_eq!(report.shift_candidates.len(), report.key_length);
        prop_assert_eq!(report.subsequences.len(), report.key_length);
        for (i, candidate) in report.shift_candidates.iter().enumerate() {
            prop_assert_eq!(candidate.key_position, i);
            prop_assert!(candidate.guesses.len() <= 3);
        }
    }
}
