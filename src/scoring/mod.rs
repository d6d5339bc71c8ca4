// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how cards get their numbers and their order.
//!
//! Each query token is scored against every field of an item, capped, and
//! summed. Ranking then sorts by score, matched-token count, and catalog
//! position, in that order.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_scored, match_percent, rank};
