//! Presenter call sequences for typical typing sessions.

use super::common::{bakery_engine, PresenterCall, RecordingPresenter};
use cardrank::{Engine, MatchState};

fn annotations(calls: &[PresenterCall]) -> Vec<(&str, u32, usize, MatchState)> {
    calls
        .iter()
        .filter_map(|call| match call {
            PresenterCall::Annotate(id, a) => Some((id.as_str(), a.score, a.rank, a.state)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_one_reorder_per_pass() {
    let engine = bakery_engine();
    let mut presenter = RecordingPresenter::default();
    for query in ["c", "co", "coo", "cookie"] {
        engine.apply(query, &mut presenter);
    }
    let reorders = presenter
        .calls
        .iter()
        .filter(|c| matches!(c, PresenterCall::Reorder(_)))
        .count();
    assert_eq!(reorders, 4);
    // 4 passes × (1 reorder + 6 annotations)
    assert_eq!(presenter.calls.len(), 28);
}

#[test]
fn test_annotations_follow_ranked_order() {
    let engine = bakery_engine();
    let mut presenter = RecordingPresenter::default();
    engine.apply("cookie", &mut presenter);

    let seen = annotations(&presenter.calls);
    assert_eq!(seen.len(), 6);
    assert_eq!(seen[0], ("choc-chip", 15, 1, MatchState::Match));
    assert_eq!(seen[1], ("oatmeal", 15, 2, MatchState::Match));
    assert_eq!(seen[2], ("brownie", 4, 3, MatchState::Match));
    assert_eq!(seen[3], ("latte", 0, 4, MatchState::Miss));
    let ranks: Vec<usize> = seen.iter().map(|a| a.2).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_clearing_query_restores_catalog() {
    let engine = bakery_engine();
    let mut presenter = RecordingPresenter::default();
    engine.apply("peanuts", &mut presenter);
    assert_eq!(presenter.last_order().unwrap()[0], "pb-bar");

    presenter.calls.clear();
    engine.apply("   ", &mut presenter);
    assert_eq!(
        presenter.last_order().unwrap(),
        &["choc-chip", "oatmeal", "brownie", "latte", "pb-bar", "sourdough"]
    );
    let clears = presenter
        .calls
        .iter()
        .filter(|c| matches!(c, PresenterCall::Clear(_)))
        .count();
    assert_eq!(clears, 6);
    assert!(annotations(&presenter.calls).is_empty());
}

#[test]
fn test_empty_engine_makes_no_calls() {
    let engine = Engine::new(Vec::new()).unwrap();
    let mut presenter = RecordingPresenter::default();
    engine.apply("cookie", &mut presenter);
    engine.apply("", &mut presenter);
    assert!(presenter.calls.is_empty());
}

#[test]
fn test_presenter_behind_trait_object() {
    let engine = bakery_engine();
    let mut recording = RecordingPresenter::default();
    {
        let presenter: &mut dyn cardrank::Presenter = &mut recording;
        engine.apply("coffee", presenter);
    }
    assert_eq!(recording.last_order().unwrap()[0], "latte");
}
