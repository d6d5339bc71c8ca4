// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a card's score.
//!
//! # Per-token score
//!
//! For each query token, every scored field contributes:
//!
//! ```text
//! exact    (token ∈ field tokens)       exact + (count - 1) × repeat_bonus
//! partial  (token ⊂ field text)         partial
//! none                                  0
//! ```
//!
//! Extra metadata adds a flat bonus on substring match. Only when all of that
//! sums to zero does the full visible text get a say, worth a single point.
//! The per-token total is then capped at the ceiling.
//!
//! # Constants
//!
//! | Field       | Exact | Partial | Repeat |
//! |-------------|-------|---------|--------|
//! | Name        | 10    | 7       | 0      |
//! | Ingredients | 6     | 4       | 2      |
//! | Tags        | 5     | 3       | 1      |
//! | Description | 4     | 2       | 1      |
//!
//! Extra = 2, fallback = 1, ceiling = 25.

use crate::config::{FieldWeights, ScoringConfig};
use crate::types::{Field, FieldModel, ItemModel};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

pub const NAME_WEIGHTS: FieldWeights = FieldWeights::new(10, 7, 0);
pub const INGREDIENT_WEIGHTS: FieldWeights = FieldWeights::new(6, 4, 2);
pub const TAG_WEIGHTS: FieldWeights = FieldWeights::new(5, 3, 1);
pub const DESCRIPTION_WEIGHTS: FieldWeights = FieldWeights::new(4, 2, 1);

/// Flat score when the extra metadata contains the token as a substring.
pub const EXTRA_MATCH_SCORE: u32 = 2;

/// Score when nothing but the full visible text contains the token.
pub const FALLBACK_MATCH_SCORE: u32 = 1;

/// No single query token may contribute more than this to an item's score.
pub const TOKEN_SCORE_CEILING: u32 = 25;

/// Score and match count of one item against one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemScore {
    pub score: u32,
    pub matched_token_count: u32,
}

/// One field's contribution for one token.
///
/// Substring-only matches never earn repeat bonuses.
pub fn field_contribution(field: &FieldModel, token: &str, weights: FieldWeights) -> u32 {
    match field.count(token) {
        0 if field.normalized_text().contains(token) => weights.partial,
        0 => 0,
        count => weights
            .exact
            .saturating_add((count - 1).saturating_mul(weights.repeat_bonus)),
    }
}

/// Capped score of a single query token against an item.
pub fn token_score(model: &ItemModel, token: &str, config: &ScoringConfig) -> u32 {
    if token.is_empty() {
        return 0;
    }

    let mut score = Field::ALL.iter().fold(0u32, |acc, &field| {
        acc.saturating_add(field_contribution(
            model.field(field),
            token,
            config.weights(field),
        ))
    });

    if model.extra_text.contains(token) {
        score = score.saturating_add(config.extra_weight);
    }

    if score == 0 && model.fallback_text.contains(token) {
        score = config.fallback_weight;
    }

    score.min(config.token_ceiling)
}

/// Total score and matched-token count of an item for a tokenized query.
///
/// An empty token list scores every item at zero.
pub fn score_item(model: &ItemModel, query_tokens: &[String], config: &ScoringConfig) -> ItemScore {
    query_tokens
        .iter()
        .map(|token| token_score(model, token, config))
        .fold(ItemScore::default(), |acc, token_score| ItemScore {
            score: acc.score.saturating_add(token_score),
            matched_token_count: acc.matched_token_count + u32::from(token_score > 0),
        })
}
