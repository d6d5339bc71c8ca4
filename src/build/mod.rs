// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Item model construction.
//!
//! Runs once per catalog. Absent data never fails: a field with no usable
//! source becomes an empty field model and simply scores nothing.

pub mod document;
pub mod sources;

pub use document::*;
pub use sources::*;

use crate::types::{Field, FieldModel, ItemModel};
use crate::utils::normalize;

/// Build the scoring model for one raw item.
pub fn build_item_model(raw: &RawItem, original_index: usize) -> ItemModel {
    let field = |field: Field| {
        FieldModel::from_raw(first_non_empty(raw, field_sources(field)).unwrap_or(""))
    };

    let extra_raw = EXTRA_ATTRIBUTES
        .iter()
        .filter_map(|key| raw.attribute(key))
        .collect::<Vec<_>>()
        .join(" ");

    let model = ItemModel {
        id: raw
            .id
            .clone()
            .unwrap_or_else(|| original_index.to_string()),
        original_index,
        name: field(Field::Name),
        ingredients: field(Field::Ingredients),
        tags: field(Field::Tags),
        description: field(Field::Description),
        extra_text: normalize(&extra_raw),
        fallback_text: normalize(&raw.visible_text()),
    };

    tracing::trace!(
        id = %model.id,
        index = original_index,
        name = model.name.normalized_text(),
        "built item model"
    );

    model
}

/// Build models for a whole catalog, in catalog order.
pub fn build_catalog(raw_items: &[RawItem]) -> Vec<ItemModel> {
    raw_items
        .iter()
        .enumerate()
        .map(|(index, raw)| build_item_model(raw, index))
        .collect()
}
