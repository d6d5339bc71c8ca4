// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking pass.
//!
//! Item models are built once and never change. Scored items borrow them for
//! the length of one pass and are thrown away when the query changes.
//!
//! # Invariants
//!
//! - **FieldModel**: the token set is exactly the key set of the token counts,
//!   and every count is at least 1. Both are derived from the same normalized
//!   text, so the struct only stores the counts and the text.
//!
//! - **ItemModel**: `original_index` is the item's position in the catalog at
//!   build time. It is unique per engine and never changes.
//!
//! - **ScoredItem**: `match_percent ∈ [0, 100]` and `match_percent == 0 ⇔ score == 0`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::normalize;

// =============================================================================
// FIELDS
// =============================================================================

/// The four scored fields of an item, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Ingredients,
    Tags,
    Description,
}

impl Field {
    /// All scored fields, in the order the scorer visits them.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Ingredients,
        Field::Tags,
        Field::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Ingredients => "ingredients",
            Field::Tags => "tags",
            Field::Description => "description",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token statistics for one field of one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldModel {
    token_counts: BTreeMap<String, u32>,
    normalized_text: String,
}

impl FieldModel {
    /// Build a field model from raw (unnormalized) text.
    pub fn from_raw(raw: &str) -> Self {
        let normalized_text = normalize(raw);
        let mut token_counts = BTreeMap::new();
        for token in normalized_text.split(' ').filter(|t| !t.is_empty()) {
            *token_counts.entry(token.to_string()).or_insert(0) += 1;
        }
        Self {
            token_counts,
            normalized_text,
        }
    }

    /// Does the field contain `token` as a whole token?
    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_counts.contains_key(token)
    }

    /// How many times `token` occurs as a whole token (0 when absent).
    #[inline]
    pub fn count(&self, token: &str) -> u32 {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    /// The distinct tokens of the field, in sorted order.
    pub fn token_set(&self) -> impl Iterator<Item = &str> {
        self.token_counts.keys().map(String::as_str)
    }

    pub fn token_counts(&self) -> &BTreeMap<String, u32> {
        &self.token_counts
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_text.is_empty()
    }
}

/// Everything the scorer needs to know about one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModel {
    /// Presenter key for the card this model was built from.
    pub id: String,
    /// Position in the catalog at build time. Sole tie-break key.
    pub original_index: usize,
    pub name: FieldModel,
    pub ingredients: FieldModel,
    pub tags: FieldModel,
    pub description: FieldModel,
    /// Normalized secondary metadata. Substring matches only.
    pub extra_text: String,
    /// Normalized full visible text. Last-resort substring match.
    pub fallback_text: String,
}

impl ItemModel {
    pub fn field(&self, field: Field) -> &FieldModel {
        match field {
            Field::Name => &self.name,
            Field::Ingredients => &self.ingredients,
            Field::Tags => &self.tags,
            Field::Description => &self.description,
        }
    }
}

// =============================================================================
// PASS OUTPUT
// =============================================================================

/// One item's result for the current query. Lives for a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    pub model: &'a ItemModel,
    pub score: u32,
    pub matched_token_count: u32,
    pub match_percent: u8,
}

/// Whether an item shared any text with the active query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchState {
    Match,
    Miss,
}

impl MatchState {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchState::Match => "match",
            MatchState::Miss => "miss",
        }
    }
}

/// Per-item annotation handed to a presenter while a query is active.
///
/// There is no "empty" annotation: when the query is cleared, presenters get
/// an explicit clear call instead of a zeroed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub score: u32,
    pub match_percent: u8,
    /// 1-based position in the ranked order.
    pub rank: usize,
    pub state: MatchState,
}
