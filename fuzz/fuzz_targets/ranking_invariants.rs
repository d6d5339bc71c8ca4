// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Arbitrary cards and an arbitrary query must always produce a complete,
//! ordered ranking with bounded scores. Any panic in normalization (odd
//! Unicode, combining marks, empty strings) shows up here first.

#![no_main]

use arbitrary::Arbitrary;
use cardrank::{build_catalog, Engine, RawItem, TOKEN_SCORE_CEILING};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Card {
    name: Option<String>,
    ingredients: Option<String>,
    tags: Option<String>,
    description: Option<String>,
    keywords: Option<String>,
    text: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    cards: Vec<Card>,
    query: String,
}

impl Card {
    fn into_raw(self) -> RawItem {
        let mut raw = RawItem {
            text: self.text,
            ..Default::default()
        };
        let fields = [
            ("name", self.name),
            ("ingredients", self.ingredients),
            ("tags", self.tags),
            ("description", self.description),
            ("keywords", self.keywords),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                raw.attributes.insert(key.to_string(), value);
            }
        }
        raw
    }
}

fuzz_target!(|input: Input| {
    if input.cards.len() > 64 {
        return;
    }
    let raws: Vec<RawItem> = input.cards.into_iter().map(Card::into_raw).collect();
    // no card carries an id, so positional ids never clash
    let engine = Engine::new(build_catalog(&raws)).expect("positional ids are unique");

    let ranking = engine.rank(&input.query);
    let first = ranking.entries();

    // INVARIANT 1: every card appears exactly once
    let mut positions: Vec<usize> = first.iter().map(|e| e.original_index).collect();
    positions.sort_unstable();
    assert_eq!(positions, (0..raws.len()).collect::<Vec<_>>());

    // INVARIANT 2: scores and percentages are bounded
    let bound = ranking.tokens().len() as u32 * TOKEN_SCORE_CEILING;
    for item in ranking.items() {
        assert!(item.score <= bound, "score {} above {}", item.score, bound);
        assert!(item.match_percent <= 100);
        assert_eq!(item.match_percent == 0, item.score == 0);
    }

    // INVARIANT 3: order keys never decrease
    for pair in ranking.items().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if ranking.is_active() {
            assert!(
                (a.score, a.matched_token_count) >= (b.score, b.matched_token_count),
                "score order violated"
            );
            if (a.score, a.matched_token_count) == (b.score, b.matched_token_count) {
                assert!(a.model.original_index < b.model.original_index);
            }
        } else {
            assert!(a.model.original_index < b.model.original_index);
        }
    }

    // INVARIANT 4: deterministic
    assert_eq!(first, engine.rank(&input.query).entries());
});
