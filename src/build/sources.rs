// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where each field's text comes from.
//!
//! Every scored field has an ordered list of candidate sources. Explicit
//! attributes come first, structural fallbacks after. The first candidate that
//! yields non-blank text wins; later candidates are never consulted.

use super::document::RawItem;
use crate::types::Field;

/// A structural lookup inside a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// First element carrying this class.
    Class(&'static str),
    /// First element with this tag name (case-insensitive).
    Tag(&'static str),
}

/// One candidate source for a field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Attribute(&'static str),
    Selector(Selector),
}

use Selector::{Class, Tag};
use Source::{Attribute, Selector as Sel};

const NAME_SOURCES: &[Source] = &[
    Attribute("name"),
    Attribute("title"),
    Sel(Class("name")),
    Sel(Class("title")),
    Sel(Tag("h3")),
    Sel(Tag("h2")),
    Sel(Tag("h4")),
];

const INGREDIENT_SOURCES: &[Source] = &[
    Attribute("ingredients"),
    Attribute("contents"),
    Attribute("items"),
    Sel(Class("ingredients")),
    Sel(Class("contents")),
];

const TAG_SOURCES: &[Source] = &[
    Attribute("tags"),
    Attribute("category"),
    Attribute("type"),
    Sel(Class("tags")),
    Sel(Class("category")),
];

const DESCRIPTION_SOURCES: &[Source] = &[
    Attribute("description"),
    Attribute("summary"),
    Sel(Class("description")),
    Sel(Class("summary")),
    Sel(Tag("p")),
];

/// Secondary metadata attributes, concatenated into the item's extra text.
pub const EXTRA_ATTRIBUTES: &[&str] = &["keywords", "search-terms", "allergens", "notes"];

/// Candidate sources for a field, highest priority first.
pub fn field_sources(field: Field) -> &'static [Source] {
    match field {
        Field::Name => NAME_SOURCES,
        Field::Ingredients => INGREDIENT_SOURCES,
        Field::Tags => TAG_SOURCES,
        Field::Description => DESCRIPTION_SOURCES,
    }
}

impl Source {
    /// Text this source yields for `item`, or `None` when absent or blank.
    pub fn resolve<'a>(&self, item: &'a RawItem) -> Option<&'a str> {
        let text = match *self {
            Attribute(key) => item.attribute(key),
            Sel(Class(class)) => item
                .elements
                .iter()
                .find(|e| e.has_class(class))
                .map(|e| e.text.as_str()),
            Sel(Tag(tag)) => item
                .elements
                .iter()
                .find(|e| e.tag.eq_ignore_ascii_case(tag))
                .map(|e| e.text.as_str()),
        }?;
        non_blank(text)
    }
}

/// First non-blank text among `sources`, in order.
pub fn first_non_empty<'a>(item: &'a RawItem, sources: &[Source]) -> Option<&'a str> {
    sources.iter().find_map(|source| source.resolve(item))
}

#[inline]
fn non_blank(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
