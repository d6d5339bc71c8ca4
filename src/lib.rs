// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Live relevance ranking for catalogs of item cards.
//!
//! A catalog is modelled once, then re-ranked on every keystroke without any
//! index or server. Each card has four weighted fields (name, ingredients,
//! tags, description), a bag of secondary metadata, and its full visible text
//! as a last resort.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   build/     │────▶│   types.rs   │────▶│  scoring/    │────▶│  engine.rs  │
//! │ (RawItem →   │     │ (ItemModel,  │     │ (score_item, │     │ (Engine,    │
//! │  ItemModel)  │     │  FieldModel) │     │  rank)       │     │  Presenter) │
//! └──────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │   utils.rs (normalize, tokenize)     config.rs (weights) │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use cardrank::testing::named_item;
//! use cardrank::{Engine, ScoringConfig};
//!
//! let catalog = vec![named_item("Brownie"), named_item("Oatmeal Cookie")];
//! let engine = Engine::from_catalog(Some(catalog.as_slice()), ScoringConfig::default())
//!     .unwrap()
//!     .expect("catalog is not empty");
//!
//! let ranking = engine.rank("cookie");
//! assert_eq!(ranking.items()[0].model.id, "1");
//! ```

pub mod build;
pub mod config;
pub mod engine;
pub mod error;
mod scoring;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use build::{build_catalog, build_item_model, Element, RawItem};
pub use config::{load_config, FieldWeights, ScoringConfig};
pub use engine::{Engine, Presenter, RankedEntry, Ranking};
pub use error::{Error, Result};
pub use scoring::{
    compare_scored, field_contribution, match_percent, rank, score_item, token_score, ItemScore,
    TOKEN_SCORE_CEILING,
};
pub use types::{Annotation, Field, FieldModel, ItemModel, MatchState, ScoredItem};
pub use utils::{normalize, tokenize};

/// Read a JSON array of raw items from a file.
pub fn load_catalog(path: &std::path::Path) -> Result<Vec<RawItem>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
