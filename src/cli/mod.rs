// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cardrank command-line interface.
//!
//! Three subcommands: `rank` to rank a catalog once, `inspect` to look at the
//! item models the engine builds, and `repl` to re-rank on every line typed,
//! which is the closest a terminal gets to a live search box.

pub mod display;

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

use cardrank::build::{field_sources, first_non_empty};
use cardrank::{Annotation, Field, Presenter, RawItem};

use display::*;

#[derive(Parser)]
#[command(
    name = "cardrank",
    about = "Rank catalog cards by relevance to a free-text query",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a catalog for one query
    Rank {
        /// Path to a JSON array of catalog items
        catalog: PathBuf,

        /// Search query (empty restores catalog order)
        query: String,

        /// Maximum number of rows to print (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// JSON file overriding scoring weights
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the ranking as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the item models built from a catalog
    Inspect {
        /// Path to a JSON array of catalog items
        catalog: PathBuf,

        /// Print the models as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line, re-ranking after each
    Repl {
        /// Path to a JSON array of catalog items
        catalog: PathBuf,

        /// Maximum number of rows to print per query (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// JSON file overriding scoring weights
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Presenter that keeps the latest order and annotations, then prints them.
pub struct TerminalPresenter {
    labels: HashMap<String, String>,
    order: Vec<String>,
    annotations: HashMap<String, Annotation>,
}

impl TerminalPresenter {
    /// Labels each card with its display name as written in the catalog.
    pub fn new(catalog: &[RawItem]) -> Self {
        let labels = catalog
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let id = raw.id.clone().unwrap_or_else(|| index.to_string());
                let label = first_non_empty(raw, field_sources(Field::Name))
                    .map(|name| name.trim().to_string())
                    .unwrap_or_else(|| id.clone());
                (id, label)
            })
            .collect();
        Self {
            labels,
            order: Vec::new(),
            annotations: HashMap::new(),
        }
    }

    /// Print the current state as a box, at most `limit` rows (0 = all).
    pub fn render(&self, query: &str, limit: usize) {
        let heading = if query.trim().is_empty() {
            "CATALOG ORDER".to_string()
        } else {
            format!("RESULTS FOR \"{}\"", truncate(query.trim(), 40))
        };
        section_top(&heading);

        let shown = if limit == 0 { self.order.len() } else { limit };
        for id in self.order.iter().take(shown) {
            let label = self.labels.get(id).map(String::as_str).unwrap_or(id.as_str());
            let line = match self.annotations.get(id) {
                Some(a) => format!(
                    " {} {} {} {} {} {}",
                    pad_left(&format!("#{}", a.rank), 4),
                    percent_value(a.match_percent),
                    percent_bar(a.match_percent),
                    pad_left(&themed(GRAY, &[], &a.score.to_string()), 4),
                    state_label(a.score > 0),
                    truncate(label, 34),
                ),
                None => format!(
                    " {} {}",
                    themed(GRAY, &[], &pad_right(id, 6)),
                    truncate(label, 60)
                ),
            };
            row(&line);
        }

        if self.order.len() > shown {
            row(&themed(
                GRAY,
                &[DIM],
                &format!(" … {} more", self.order.len() - shown),
            ));
        }
        section_bot();
    }
}

impl Presenter for TerminalPresenter {
    fn reorder(&mut self, ids: &[&str]) {
        self.order = ids.iter().map(|id| id.to_string()).collect();
    }

    fn annotate(&mut self, id: &str, annotation: &Annotation) {
        self.annotations.insert(id.to_string(), *annotation);
    }

    fn clear(&mut self, id: &str) {
        self.annotations.remove(id);
    }
}
