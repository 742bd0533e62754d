use geoscore::{
    analyze, analyze_multiple, calculate_position_weight, levenshtein_distance,
    split_into_sentences, MatchKind,
};
use proptest::prelude::*;

fn sentence() -> impl Strategy<Value = String> {
    "[a-zçğöşü]{3,8}( [a-zçğöşü]{3,8}){2,6}\\.".prop_map(|s| {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => s,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn visibility_stays_in_range(source in "\\PC{1,80}", response in "\\PC{1,80}") {
        prop_assume!(!source.trim().is_empty() && !response.trim().is_empty());
        let result = analyze(&source, &response, None).unwrap();
        prop_assert!(result.visibility <= 100);
        prop_assert!(result.metrics.word_count.value <= 1.0);
        prop_assert!(result.metrics.position_adjusted.value <= 1.0);
        prop_assert!(result.metrics.word_count.value >= 0.0);
    }

    #[test]
    fn identical_single_sentence_scores_full(text in sentence()) {
        let result = analyze(&text, &text, None).unwrap();
        prop_assert_eq!(result.visibility, 100);
        prop_assert_eq!(result.matches[0].kind, MatchKind::Exact);
        prop_assert_eq!(result.matches[0].position, 0);
    }

    #[test]
    fn matches_are_sorted_and_labelled(
        source in prop::collection::vec(sentence(), 1..5),
        response in prop::collection::vec(sentence(), 1..5),
    ) {
        let result = analyze(&source.join(" "), &response.join(" "), None).unwrap();
        prop_assert!(result.matches.windows(2).all(|w| w[0].position <= w[1].position));
        for record in &result.matches {
            prop_assert_eq!(record.similarity == 1.0, record.kind == MatchKind::Exact);
            prop_assert!(record.position < result.meta.response_sentence_count);
        }
    }

    #[test]
    fn summary_is_consistent(
        sources in prop::collection::vec(sentence(), 1..6),
        response in prop::collection::vec(sentence(), 1..4),
    ) {
        let result = analyze_multiple(&sources, &response.join(" "), None).unwrap();
        let summary = &result.summary;

        let mut sorted = summary.ranking.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..sources.len()).collect::<Vec<_>>());
        prop_assert_eq!(summary.most_visible, summary.ranking[0]);

        let mean = result.results.iter().map(|r| f64::from(r.visibility)).sum::<f64>()
            / sources.len() as f64;
        prop_assert!((summary.average_visibility - mean).abs() < 1e-9);
    }

    #[test]
    fn levenshtein_symmetry_and_identity(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        prop_assert_eq!(levenshtein_distance(&a, &a), 0);
    }

    #[test]
    fn position_weight_decreases(position in 0usize..200, lambda in 1.0f64..50.0) {
        prop_assert_eq!(calculate_position_weight(0, lambda), 1.0);
        prop_assert!(
            calculate_position_weight(position + 1, lambda)
                < calculate_position_weight(position, lambda)
        );
    }

    #[test]
    fn sentences_keep_every_character(text in "[A-Za-zçğıöşüÇĞÖŞÜ0-9 .!?\n]{0,100}") {
        let joined: String = split_into_sentences(&text).concat();
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(strip(&joined), strip(&text));
    }
}
