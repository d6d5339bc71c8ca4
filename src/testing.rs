//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::build::{Element, RawItem};
use crate::engine::Presenter;
use crate::types::Annotation;

/// Create a raw item from `(attribute, value)` pairs.
///
/// This is the canonical implementation used across all tests.
pub fn raw_item(attributes: &[(&str, &str)]) -> RawItem {
    RawItem {
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..Default::default()
    }
}

/// Create a raw item with just a name attribute.
pub fn named_item(name: &str) -> RawItem {
    raw_item(&[("name", name)])
}

/// Create a structural element.
pub fn element(tag: &str, classes: &[&str], text: &str) -> Element {
    Element {
        tag: tag.to_string(),
        classes: classes.iter().map(|c| c.to_string()).collect(),
        text: text.to_string(),
    }
}

/// What a [`RecordingPresenter`] saw, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Reorder(Vec<String>),
    Annotate(String, Annotation),
    Clear(String),
}

/// A presenter that only records its calls.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    /// Ids from the most recent reorder call.
    pub fn last_order(&self) -> Option<&[String]> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::Reorder(ids) => Some(ids.as_slice()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn reorder(&mut self, ids: &[&str]) {
        self.calls
            .push(PresenterCall::Reorder(ids.iter().map(|id| id.to_string()).collect()));
    }

    fn annotate(&mut self, id: &str, annotation: &Annotation) {
        self.calls
            .push(PresenterCall::Annotate(id.to_string(), *annotation));
    }

    fn clear(&mut self, id: &str) {
        self.calls.push(PresenterCall::Clear(id.to_string()));
    }
}
