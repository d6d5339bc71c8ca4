// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored cards get sorted.
//!
//! With an active query the order is score, then matched-token count, then
//! catalog position. Without one, catalog position alone. Catalog positions
//! are unique, so the comparator is a total order and the output never depends
//! on the sort algorithm's stability.

use std::cmp::Ordering;

use super::core::score_item;
use crate::config::ScoringConfig;
use crate::types::{ItemModel, ScoredItem};

/// Compare two scored items for an active query.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Matched tokens** - descending, so breadth beats one strong hit
/// 3. **Original index** - ascending, final tiebreaker for determinism
pub fn compare_scored(a: &ScoredItem<'_>, b: &ScoredItem<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.matched_token_count.cmp(&a.matched_token_count))
        .then_with(|| a.model.original_index.cmp(&b.model.original_index))
}

/// Share of the theoretical maximum a score reached, as a whole percentage.
///
/// `round(min(100, score / (tokens × ceiling) × 100))`, except that a positive
/// score never rounds down to 0.
pub fn match_percent(score: u32, token_count: usize, ceiling: u32) -> u8 {
    if score == 0 || token_count == 0 || ceiling == 0 {
        return 0;
    }
    let max = token_count as f64 * f64::from(ceiling);
    let percent = (f64::from(score) / max * 100.0).min(100.0).round();
    (percent as u8).max(1)
}

/// Score and order every item for a tokenized query.
///
/// Always returns one entry per item. An empty token list yields catalog
/// order with every score and percentage at zero.
pub fn rank<'a>(
    items: &'a [ItemModel],
    query_tokens: &[String],
    config: &ScoringConfig,
) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<ScoredItem<'a>> = items
        .iter()
        .map(|model| {
            let result = score_item(model, query_tokens, config);
            ScoredItem {
                model,
                score: result.score,
                matched_token_count: result.matched_token_count,
                match_percent: match_percent(
                    result.score,
                    query_tokens.len(),
                    config.token_ceiling,
                ),
            }
        })
        .collect();

    if query_tokens.is_empty() {
        scored.sort_by_key(|item| item.model.original_index);
    } else {
        scored.sort_by(compare_scored);
    }
    scored
}
