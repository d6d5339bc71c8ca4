// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking engine and its presenter seam.
//!
//! An [`Engine`] owns an immutable list of item models. Each query change is
//! one call to [`Engine::rank`] (pure) or [`Engine::apply`] (rank, then drive a
//! [`Presenter`]). Nothing is cached between passes, so two calls with the same
//! query always produce the same ranking.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::HashMap;

use crate::build::{build_catalog, RawItem};
use crate::config::ScoringConfig;
use crate::error::{Error, Result};
use crate::scoring::rank;
use crate::types::{Annotation, ItemModel, MatchState, ScoredItem};
use crate::utils::tokenize;

/// Receives the outcome of a ranking pass and updates whatever shows the cards.
///
/// Every pass starts with a full `reorder`, even when the order is unchanged
/// (an empty query after an empty query, for instance). Presenters that care
/// about redundant work should compare against the order they already show.
pub trait Presenter {
    /// Put the cards in this order (ids as in [`ItemModel::id`]).
    fn reorder(&mut self, ids: &[&str]);

    /// Attach scores to a card while a query is active.
    fn annotate(&mut self, id: &str, annotation: &Annotation);

    /// Remove any annotation from a card. Called for every card on an empty query.
    fn clear(&mut self, id: &str);
}

/// The ordered result of one query.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    tokens: Vec<String>,
    items: Vec<ScoredItem<'a>>,
}

impl<'a> Ranking<'a> {
    /// Normalized query tokens this ranking was computed for.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the query had at least one token.
    pub fn is_active(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn items(&self) -> &[ScoredItem<'a>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn matched(&self) -> usize {
        self.items.iter().filter(|s| s.score > 0).count()
    }

    /// Annotation for the item at `position` (0-based), or `None` when the
    /// query is empty and annotations must be cleared.
    pub fn annotation(&self, position: usize) -> Option<Annotation> {
        if !self.is_active() {
            return None;
        }
        let item = self.items.get(position)?;
        Some(Annotation {
            score: item.score,
            match_percent: item.match_percent,
            rank: position + 1,
            state: if item.score > 0 {
                MatchState::Match
            } else {
                MatchState::Miss
            },
        })
    }

    /// Owned, serializable view of the ranking.
    pub fn entries(&self) -> Vec<RankedEntry> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| RankedEntry {
                id: item.model.id.clone(),
                original_index: item.model.original_index,
                matched_token_count: item.matched_token_count,
                annotation: self.annotation(position),
            })
            .collect()
    }
}

/// One row of a ranking, detached from the engine's lifetime.
///
/// Serializes as one flat struct: `id`, `originalIndex`, `matchedTokenCount`,
/// then `score`, `matchPercent`, `rank` and `state` only while a query is
/// active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub id: String,
    pub original_index: usize,
    pub matched_token_count: u32,
    /// `None` when no query is active.
    pub annotation: Option<Annotation>,
}

impl Serialize for RankedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.annotation.is_some() { 7 } else { 3 };
        let mut entry = serializer.serialize_struct("RankedEntry", len)?;
        entry.serialize_field("id", &self.id)?;
        entry.serialize_field("originalIndex", &self.original_index)?;
        entry.serialize_field("matchedTokenCount", &self.matched_token_count)?;
        match &self.annotation {
            Some(a) => {
                entry.serialize_field("score", &a.score)?;
                entry.serialize_field("matchPercent", &a.match_percent)?;
                entry.serialize_field("rank", &a.rank)?;
                entry.serialize_field("state", &a.state)?;
            }
            None => {
                entry.skip_field("score")?;
                entry.skip_field("matchPercent")?;
                entry.skip_field("rank")?;
                entry.skip_field("state")?;
            }
        }
        entry.end()
    }
}

/// Relevance engine over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Engine {
    items: Vec<ItemModel>,
    config: ScoringConfig,
}

impl Engine {
    /// Engine with the default weight table.
    pub fn new(items: Vec<ItemModel>) -> Result<Self> {
        Self::with_config(items, ScoringConfig::default())
    }

    /// Fails on an invalid config or when two items share a presenter key.
    pub fn with_config(items: Vec<ItemModel>, config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        check_unique_ids(&items)?;
        Ok(Self { items, config })
    }

    /// Build an engine from raw catalog items.
    ///
    /// Returns `Ok(None)` when the catalog is absent or empty; callers treat
    /// that as "nothing to wire up".
    pub fn from_catalog(
        catalog: Option<&[RawItem]>,
        config: ScoringConfig,
    ) -> Result<Option<Self>> {
        match catalog.filter(|items| !items.is_empty()) {
            Some(raw) => Self::with_config(build_catalog(raw), config).map(Some),
            None => Ok(None),
        }
    }

    pub fn items(&self) -> &[ItemModel] {
        &self.items
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score and order every item for `query`.
    pub fn rank(&self, query: &str) -> Ranking<'_> {
        let tokens = tokenize(query);
        let items = rank(&self.items, &tokens, &self.config);
        Ranking { tokens, items }
    }

    /// Run one full pass for `query` and hand the result to `presenter`.
    ///
    /// The presenter sees a single `reorder` followed by one `annotate` (active
    /// query) or `clear` (empty query) per item, in ranked order. An empty
    /// engine makes no calls at all.
    pub fn apply<P: Presenter + ?Sized>(&self, query: &str, presenter: &mut P) {
        if self.items.is_empty() {
            return;
        }

        let ranking = self.rank(query);
        tracing::debug!(
            tokens = ranking.tokens().len(),
            items = ranking.len(),
            matched = ranking.matched(),
            "ranking pass"
        );

        let ids: Vec<&str> = ranking.items().iter().map(|s| s.model.id.as_str()).collect();
        presenter.reorder(&ids);

        for (position, id) in ids.iter().enumerate() {
            match ranking.annotation(position) {
                Some(annotation) => presenter.annotate(id, &annotation),
                None => presenter.clear(id),
            }
        }
    }
}

/// Presenters address cards by id alone, so ids must not repeat.
///
/// Positional fallback ids count too: an unnamed card at position 1 clashes
/// with another card whose explicit id is `"1"`.
fn check_unique_ids(items: &[ItemModel]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    for item in items {
        if let Some(&first) = seen.get(item.id.as_str()) {
            return Err(Error::DuplicateId {
                id: item.id.clone(),
                first,
                second: item.original_index,
            });
        }
        seen.insert(&item.id, item.original_index);
    }
    Ok(())
}
