//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cardrank::{build_catalog, load_catalog, Engine, RawItem, Ranking};
use std::path::Path;
use std::sync::LazyLock;

// Re-export canonical test utilities from cardrank::testing
pub use cardrank::testing::{element, named_item, raw_item, PresenterCall, RecordingPresenter};

// ============================================================================
// FIXTURES
// ============================================================================

/// Path to the bakery catalog fixture.
pub const BAKERY_CATALOG: &str = "data/bakery.json";

/// Parsed bakery catalog, loaded once per test binary.
static BAKERY: LazyLock<Vec<RawItem>> = LazyLock::new(|| {
    load_catalog(Path::new(BAKERY_CATALOG)).expect("Failed to load bakery fixture")
});

pub fn bakery_raw() -> &'static [RawItem] {
    &BAKERY
}

pub fn bakery_engine() -> Engine {
    Engine::new(build_catalog(&BAKERY)).expect("fixture ids are unique")
}

/// Engine over items that only have a name.
pub fn engine_from_names(names: &[&str]) -> Engine {
    let raws: Vec<RawItem> = names.iter().map(|n| named_item(n)).collect();
    Engine::new(build_catalog(&raws)).expect("fixture ids are unique")
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Ids in ranked order.
pub fn ranked_ids<'a>(ranking: &'a Ranking<'_>) -> Vec<&'a str> {
    ranking.items().iter().map(|s| s.model.id.as_str()).collect()
}

/// Score of the item with `id`, panicking with context if absent.
pub fn score_of(ranking: &Ranking<'_>, id: &str) -> u32 {
    ranking
        .items()
        .iter()
        .find(|s| s.model.id == id)
        .unwrap_or_else(|| panic!("no item with id {id}"))
        .score
}

/// Check the structural guarantees every ranking must satisfy.
pub fn assert_ranking_well_formed(ranking: &Ranking<'_>) {
    let items = ranking.items();
    for s in items {
        assert!(s.match_percent <= 100, "percent out of range: {}", s.match_percent);
        assert_eq!(
            s.match_percent == 0,
            s.score == 0,
            "percent {} inconsistent with score {}",
            s.match_percent,
            s.score
        );
    }

    for pair in items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if ranking.is_active() {
            let key_a = (std::cmp::Reverse(a.score), std::cmp::Reverse(a.matched_token_count), a.model.original_index);
            let key_b = (std::cmp::Reverse(b.score), std::cmp::Reverse(b.matched_token_count), b.model.original_index);
            assert!(key_a < key_b, "out of order: {:?} before {:?}", a.model.id, b.model.id);
        } else {
            assert!(a.model.original_index < b.model.original_index);
        }
    }
}
