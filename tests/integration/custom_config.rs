//! Scoring configs loaded from disk.

use super::common::{bakery_raw, ranked_ids, score_of};
use cardrank::{load_config, Engine, Error, FieldWeights, ScoringConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write temp file");
    file
}

fn bakery_with(config: ScoringConfig) -> Engine {
    Engine::from_catalog(Some(bakery_raw()), config)
        .unwrap()
        .expect("bakery is not empty")
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let file = config_file(r#"{"name": {"exact": 1, "partial": 1}, "description": {"exact": 20}}"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.name, FieldWeights::new(1, 1, 0));
    assert_eq!(config.description, FieldWeights::new(20, 2, 1));
    assert_eq!(config.ingredients, ScoringConfig::default().ingredients);
    assert_eq!(config.token_ceiling, 25);
}

#[test]
fn test_reweighted_fields_change_order() {
    let file = config_file(r#"{"name": {"exact": 1, "partial": 1}, "description": {"exact": 20}}"#);
    let engine = bakery_with(load_config(file.path()).unwrap());
    let ranking = engine.rank("cookie");

    assert_eq!(&ranked_ids(&ranking)[..3], &["brownie", "choc-chip", "oatmeal"]);
    assert_eq!(score_of(&ranking, "brownie"), 20);
    assert_eq!(score_of(&ranking, "choc-chip"), 6);
    assert_eq!(ranking.items()[0].match_percent, 80);
}

#[test]
fn test_lower_ceiling_caps_and_rescales() {
    let file = config_file(r#"{"tokenCeiling": 5}"#);
    let engine = bakery_with(load_config(file.path()).unwrap());
    let ranking = engine.rank("cookie");

    assert_eq!(score_of(&ranking, "choc-chip"), 5);
    assert_eq!(score_of(&ranking, "oatmeal"), 5);
    assert_eq!(score_of(&ranking, "brownie"), 4);
    assert_eq!(ranking.items()[0].match_percent, 100);
    assert_eq!(ranking.items()[2].match_percent, 80);
}

#[test]
fn test_zero_ceiling_is_rejected() {
    let file = config_file(r#"{"tokenCeiling": 0}"#);
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn test_unknown_key_is_rejected() {
    let file = config_file(r#"{"tokenCap": 10}"#);
    assert!(matches!(load_config(file.path()).unwrap_err(), Error::Json { .. }));
}

#[test]
fn test_empty_object_is_default() {
    let file = config_file("{}");
    assert_eq!(load_config(file.path()).unwrap(), ScoringConfig::default());
}

#[test]
fn test_engine_rejects_zero_ceiling_built_in_code() {
    let config = ScoringConfig {
        token_ceiling: 0,
        ..ScoringConfig::default()
    };
    let err = Engine::from_catalog(Some(bakery_raw()), config).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}
