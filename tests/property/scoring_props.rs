//! Properties of the per-token scorer and the percentage formula.

use super::common::raw_item;
use cardrank::{
    build_item_model, field_contribution, match_percent, score_item, token_score, tokenize,
    FieldModel, FieldWeights, ScoringConfig, TOKEN_SCORE_CEILING,
};
use proptest::prelude::*;

proptest! {
    /// Stuffing every field with a token still caps it at the ceiling.
    #[test]
    fn token_score_never_exceeds_ceiling(token in "[a-z]{2,6}", repeats in 1usize..20) {
        let stuffed = vec![token.as_str(); repeats].join(" ");
        let model = build_item_model(
            &raw_item(&[
                ("name", stuffed.as_str()),
                ("ingredients", stuffed.as_str()),
                ("tags", stuffed.as_str()),
                ("description", stuffed.as_str()),
                ("keywords", stuffed.as_str()),
            ]),
            0,
        );
        let score = token_score(&model, &token, &ScoringConfig::default());
        prop_assert!(score <= TOKEN_SCORE_CEILING);
        // name 10 + ingredients 6 + tags 5 + description 4 already exceeds 25
        prop_assert_eq!(score, TOKEN_SCORE_CEILING);
    }

    /// More exact occurrences never lower a field's contribution.
    #[test]
    fn repeats_are_monotonic(token in "[a-z]{2,6}", count in 1usize..10) {
        let weights = FieldWeights::new(6, 4, 2);
        let fewer = FieldModel::from_raw(&vec![token.as_str(); count].join(" "));
        let more = FieldModel::from_raw(&vec![token.as_str(); count + 1].join(" "));
        let a = field_contribution(&fewer, &token, weights);
        let b = field_contribution(&more, &token, weights);
        prop_assert_eq!(b, a + 2);
    }

    /// Exact beats partial in every field.
    #[test]
    fn exact_beats_partial(token in "[a-z]{2,6}", suffix in "[a-z]{1,3}") {
        let config = ScoringConfig::default();
        let exact = FieldModel::from_raw(&token);
        let partial = FieldModel::from_raw(&format!("{token}{suffix}"));
        for field in cardrank::Field::ALL {
            let w = config.weights(field);
            prop_assert!(field_contribution(&exact, &token, w) > field_contribution(&partial, &token, w));
        }
    }

    /// The percentage stays within 0..=100 and is zero only for zero scores.
    #[test]
    fn percent_in_range(score in 0u32..500, tokens in 1usize..10, ceiling in 1u32..60) {
        let percent = match_percent(score, tokens, ceiling);
        prop_assert!(percent <= 100);
        prop_assert_eq!(percent == 0, score == 0);
    }

    /// Matched-token count equals the number of tokens with a positive score.
    #[test]
    fn matched_count_agrees_with_token_scores(name in "[a-z ]{0,20}", query in "[a-z ]{0,12}") {
        let model = build_item_model(&raw_item(&[("name", name.as_str())]), 0);
        let config = ScoringConfig::default();
        let tokens = tokenize(&query);
        let result = score_item(&model, &tokens, &config);

        let positive = tokens.iter().filter(|t| token_score(&model, t, &config) > 0).count();
        let total: u32 = tokens.iter().map(|t| token_score(&model, t, &config)).sum();
        prop_assert_eq!(result.matched_token_count as usize, positive);
        prop_assert_eq!(result.score, total);
    }
}
