// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal, case-insensitive match finding.
//!
//! This is deliberately dumber than the index: no tokenization, no
//! normalization beyond case folding. A highlight marks exactly the chars
//! the user typed, wherever they occur, including mid-word.

use crate::types::Span;
use crate::utils::fold_chars;

/// Split a query on whitespace into case-folded words, dropping empty ones.
pub(crate) fn query_words(query: &str) -> Vec<Vec<char>> {
    query.split_whitespace().map(fold_chars).collect()
}

/// Position of the first occurrence of `needle` in `haystack` at or after `from`.
///
/// `needle` must be non-empty.
pub(crate) fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    debug_assert!(!needle.is_empty());
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| i + from)
}

/// Find every occurrence of every query word in `text`.
///
/// Each word is scanned independently; within one word the scan advances
/// past each hit, so a word never overlaps itself ("aa" in "aaa" is one
/// match). Hits from different words *can* overlap: merging is the
/// renderer's job. Spans are sorted by start.
///
/// ```ignore
/// assert_eq!(find_matches("Hello World", "hello"), vec![Span::new(0, 5)]);
/// ```
pub fn find_matches(text: &str, query: &str) -> Vec<Span> {
    find_matches_at(text, query, 0)
}

/// [`find_matches`], with every span shifted right by `offset` chars.
///
/// Handy when `text` is a slice of a larger string the spans should index.
pub fn find_matches_at(text: &str, query: &str, offset: usize) -> Vec<Span> {
    let haystack = fold_chars(text);
    let mut spans = Vec::new();

    for word in query_words(query) {
        let mut from = 0;
        while let Some(start) = find_from(&haystack, &word, from) {
            let end = start + word.len();
            spans.push(Span::new(start, end).shifted(offset));
            from = end;
        }
    }

    spans.sort_by_key(|span| span.start);
    spans
}

/// Char position of the earliest occurrence of any query word in `folded`.
pub(crate) fn first_occurrence(folded: &[char], words: &[Vec<char>]) -> Option<usize> {
    words
        .iter()
        .filter_map(|word| find_from(folded, word, 0))
        .min()
}
