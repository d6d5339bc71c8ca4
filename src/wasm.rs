// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for ranking catalog cards in the browser.
//!
//! The page collects its cards into plain objects (`RawItem` shape), builds a
//! `CatalogRanker` once, and calls `rank()` from its input handler. Reordering
//! the DOM stays on the JavaScript side.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::build::{build_catalog, RawItem};
use crate::config::ScoringConfig;
use crate::engine::Engine;

/// WASM-accessible ranking engine over a fixed catalog.
#[wasm_bindgen]
pub struct CatalogRanker {
    engine: Engine,
}

#[wasm_bindgen]
impl CatalogRanker {
    /// Build models for every card. `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(items: JsValue, config: JsValue) -> Result<CatalogRanker, JsValue> {
        let raw: Vec<RawItem> = from_value(items).map_err(|e| e.to_string())?;
        let config: ScoringConfig = if config.is_undefined() || config.is_null() {
            ScoringConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        let engine = Engine::with_config(build_catalog(&raw), config).map_err(|e| e.to_string())?;

        Ok(CatalogRanker { engine })
    }

    /// Number of cards in the catalog.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.engine.items().len()
    }

    #[wasm_bindgen(getter, js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.engine.items().is_empty()
    }

    /// Ranked entries for `query`: `{id, originalIndex, matchedTokenCount}`
    /// plus `score`, `matchPercent`, `rank`, `state` while a query is active.
    pub fn rank(&self, query: &str) -> Result<JsValue, JsValue> {
        let entries = self.engine.rank(query).entries();
        // plain objects, never ES2015 Maps
        let serializer = Serializer::new().serialize_maps_as_objects(true);
        entries
            .serialize(&serializer)
            .map_err(|e| e.to_string().into())
    }
}
