//! Repeated and interleaved passes must agree exactly.

use super::common::{bakery_engine, engine_from_names, named_item, ranked_ids, raw_item};
use cardrank::{build_catalog, Engine};

#[test]
fn test_same_query_same_entries() {
    let engine = bakery_engine();
    for query in ["cookie", "café milk", "nuts", "", "zzzz"] {
        assert_eq!(engine.rank(query).entries(), engine.rank(query).entries(), "query {query:?}");
    }
}

#[test]
fn test_no_state_carries_between_queries() {
    let engine = bakery_engine();
    let fresh = engine.rank("oat").entries();

    for query in ["cookie", "chocolate", "", "gluten"] {
        let _ = engine.rank(query);
    }
    assert_eq!(engine.rank("oat").entries(), fresh);
}

#[test]
fn test_query_spelling_variants_agree() {
    let engine = bakery_engine();
    let canonical = engine.rank("cafe milk").entries();
    for variant in ["CAFÉ MILK", "  café,milk ", "Cafe\tMilk"] {
        assert_eq!(engine.rank(variant).entries(), canonical, "variant {variant:?}");
    }
}

#[test]
fn test_full_ties_fall_back_to_catalog_order() {
    let engine = engine_from_names(&["Cookie", "Cookie", "Cookie"]);
    let ranking = engine.rank("cookie");
    assert!(ranking.items().iter().all(|s| s.score == 10));
    assert_eq!(ranked_ids(&ranking), vec!["0", "1", "2"]);
}

#[test]
fn test_breadth_breaks_score_ties() {
    // both score 10: one name hit against two tag hits
    let raws = vec![named_item("Apple"), raw_item(&[("tags", "apple pie")])];
    let engine = Engine::new(build_catalog(&raws)).unwrap();
    let ranking = engine.rank("apple pie");

    let summary: Vec<(u32, u32)> = ranking
        .items()
        .iter()
        .map(|s| (s.score, s.matched_token_count))
        .collect();
    assert_eq!(summary, vec![(10, 2), (10, 1)]);
    assert_eq!(ranked_ids(&ranking), vec!["1", "0"]);
}
