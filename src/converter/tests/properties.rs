use proptest::prelude::*;

use crate::converter::testutil::{entry, sample_lexicon, UniformOracle};
use crate::converter::convert;
use crate::dict::TrieLexicon;

/// Every vowel kana is present as a 1-char word, plus a few longer
/// entries so the lattice has competing segmentations.
fn full_coverage_lexicon() -> TrieLexicon {
    let mut entries: Vec<_> = ["あ", "い", "う", "え", "お"]
        .iter()
        .map(|k| entry(k, k, 0))
        .collect();
    entries.push(entry("藍", "あい", 8));
    entries.push(entry("上", "うえ", 8));
    entries.push(entry("甥", "おい", 8));
    TrieLexicon::from_entries(entries)
}

proptest! {
    // With 1-char coverage of the whole alphabet, a full path always
    // exists: conversion must never report a coverage failure.
    #[test]
    fn covered_inputs_always_convert(input in "[あいうえお]{2,12}") {
        let lexicon = full_coverage_lexicon();
        let oracle = UniformOracle(1.0);
        prop_assert!(convert(&lexicon, &oracle, &input).is_ok());
    }

    #[test]
    fn conversion_is_deterministic(input in "[あいうえお]{2,12}") {
        let lexicon = full_coverage_lexicon();
        let oracle = UniformOracle(1.0);
        let first = convert(&lexicon, &oracle, &input);
        let second = convert(&lexicon, &oracle, &input);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "one call failed, the other succeeded"),
        }
    }

    // Output chars always come from dictionary surfaces covering the
    // input, so the char count never exceeds the input's (1-char words
    // map 1:1; longer words only shrink it).
    #[test]
    fn output_never_longer_than_input(input in "[あいうえお]{2,12}") {
        let lexicon = full_coverage_lexicon();
        let oracle = UniformOracle(1.0);
        let output = convert(&lexicon, &oracle, &input).unwrap();
        prop_assert!(output.chars().count() <= input.chars().count());
    }

    // Inputs of one char or less bypass the lattice and come back
    // unchanged, dictionary or no dictionary.
    #[test]
    fn short_inputs_pass_through(c in proptest::char::any()) {
        let lexicon = sample_lexicon();
        let oracle = UniformOracle(1.0);
        let input = c.to_string();
        prop_assert_eq!(convert(&lexicon, &oracle, &input).unwrap(), input);
    }
}
