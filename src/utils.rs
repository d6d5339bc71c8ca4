// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Every string that takes part in scoring passes through [`normalize`] first,
//! so query tokens and field tokens always live in the same alphabet:
//! lowercase ASCII letters, digits, and single spaces.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, replace
/// punctuation with spaces, and collapse whitespace.
///
/// - "café" → "cafe"
/// - "Crème Brûlée!" → "creme brulee"
/// - "peanuts, almonds" → "peanuts almonds"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Drop combining diacritical marks (U+0300..=U+036F)
/// 4. Map anything that is not `[a-z0-9]` or whitespace to a space
/// 5. Collapse whitespace runs to one space and trim
///
/// Characters with no ASCII base (e.g. "ß", "ø", CJK) become separators.
pub fn normalize(value: &str) -> String {
    let cleaned: String = value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into normalized tokens, keeping duplicates and order.
///
/// Empty or punctuation-only input yields an empty vector, never `[""]`.
pub fn tokenize(value: &str) -> Vec<String> {
    normalize(value)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Combining Diacritical Marks block, the marks NFD splits off Latin letters.
#[inline]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
