// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring configuration.
//!
//! Defaults reproduce the built-in weight table exactly; a JSON file only has
//! to mention the values it changes.
//!
//! ```json
//! { "name": { "exact": 12 }, "tokenCeiling": 30 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scoring::{
    DESCRIPTION_WEIGHTS, EXTRA_MATCH_SCORE, FALLBACK_MATCH_SCORE, INGREDIENT_WEIGHTS,
    NAME_WEIGHTS, TAG_WEIGHTS, TOKEN_SCORE_CEILING,
};
use crate::types::Field;

/// Weight triple for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWeights {
    /// Score for a whole-token match.
    pub exact: u32,
    /// Score for a substring-only match.
    pub partial: u32,
    /// Added per exact occurrence beyond the first.
    pub repeat_bonus: u32,
}

impl FieldWeights {
    pub const fn new(exact: u32, partial: u32, repeat_bonus: u32) -> Self {
        Self {
            exact,
            partial,
            repeat_bonus,
        }
    }
}

/// Deserializing a partial weight object fills the rest from the field's defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartialWeights {
    exact: Option<u32>,
    partial: Option<u32>,
    repeat_bonus: Option<u32>,
}

impl PartialWeights {
    fn over(self, base: FieldWeights) -> FieldWeights {
        FieldWeights {
            exact: self.exact.unwrap_or(base.exact),
            partial: self.partial.unwrap_or(base.partial),
            repeat_bonus: self.repeat_bonus.unwrap_or(base.repeat_bonus),
        }
    }
}

/// All tunables of the scorer and ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub name: FieldWeights,
    pub ingredients: FieldWeights,
    pub tags: FieldWeights,
    pub description: FieldWeights,
    /// Flat score when the extra metadata contains the token.
    pub extra_weight: u32,
    /// Score when only the full visible text contains the token.
    pub fallback_weight: u32,
    /// Upper bound on any single query token's score. Must be positive.
    pub token_ceiling: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            name: NAME_WEIGHTS,
            ingredients: INGREDIENT_WEIGHTS,
            tags: TAG_WEIGHTS,
            description: DESCRIPTION_WEIGHTS,
            extra_weight: EXTRA_MATCH_SCORE,
            fallback_weight: FALLBACK_MATCH_SCORE,
            token_ceiling: TOKEN_SCORE_CEILING,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ScoringConfigInput {
    #[serde(default)]
    name: PartialWeights,
    #[serde(default)]
    ingredients: PartialWeights,
    #[serde(default)]
    tags: PartialWeights,
    #[serde(default)]
    description: PartialWeights,
    extra_weight: Option<u32>,
    fallback_weight: Option<u32>,
    token_ceiling: Option<u32>,
}

impl<'de> Deserialize<'de> for ScoringConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let input = ScoringConfigInput::deserialize(deserializer)?;
        let base = ScoringConfig::default();
        Ok(ScoringConfig {
            name: input.name.over(base.name),
            ingredients: input.ingredients.over(base.ingredients),
            tags: input.tags.over(base.tags),
            description: input.description.over(base.description),
            extra_weight: input.extra_weight.unwrap_or(base.extra_weight),
            fallback_weight: input.fallback_weight.unwrap_or(base.fallback_weight),
            token_ceiling: input.token_ceiling.unwrap_or(base.token_ceiling),
        })
    }
}

impl ScoringConfig {
    pub fn weights(&self, field: Field) -> FieldWeights {
        match field {
            Field::Name => self.name,
            Field::Ingredients => self.ingredients,
            Field::Tags => self.tags,
            Field::Description => self.description,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_ceiling == 0 {
            return Err(Error::InvalidConfig(
                "tokenCeiling must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a scoring config from a JSON file.
pub fn load_config(path: &Path) -> Result<ScoringConfig> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ScoringConfig = serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
