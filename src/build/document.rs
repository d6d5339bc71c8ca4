// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The raw shape of a catalog item before extraction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One card as the page exposes it: named attributes plus structural nodes.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Presenter key. Falls back to the catalog position when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Dataset-style attributes (`name`, `ingredients`, `search-terms`, ...).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Structural nodes in document order.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Full visible text of the card, if the producer captured it.
    #[serde(default)]
    pub text: Option<String>,
}

/// A structural node inside a card (heading, paragraph, classed container).
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
}

impl RawItem {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Full visible text: the captured text, else every element's text joined.
    pub fn visible_text(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self
                .elements
                .iter()
                .map(|e| e.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
