// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context windows: a bounded snippet of content around the first match.
//!
//! Rendering a whole page body under every result would bury the match, so
//! the content is cut down to `context_length` chars centered on the first
//! hit, with `...` marking the cut sides. Matches are then found again *in
//! the snippet*, so the returned spans index the returned text.

use super::matches::{find_matches, first_occurrence, query_words};
use crate::types::{HighlightedText, Span};
use crate::utils::fold_chars;

/// Snippet length used when the caller doesn't pick one.
pub const DEFAULT_CONTEXT_LENGTH: usize = 100;

/// Marker for a side of the snippet that was truncated.
pub const ELLIPSIS: &str = "...";

/// A windowed snippet of a document body and the matches inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub content: String,
    /// Spans into `content`, never into the original text.
    pub matches: Vec<Span>,
}

impl From<Context> for HighlightedText {
    fn from(context: Context) -> Self {
        HighlightedText {
            text: context.content,
            matches: context.matches,
        }
    }
}

/// Cut `text` down to a snippet around the first query match.
///
/// - No query word occurs: the first `context_length` chars, no matches.
/// - `text` fits in `context_length` chars: the whole text, unchanged.
/// - Otherwise: the window `[first - N/2, first + N/2)` clamped to the text,
///   with [`ELLIPSIS`] on each side that was cut.
pub fn extract_context(text: &str, query: &str, context_length: usize) -> Context {
    let chars: Vec<char> = text.chars().collect();
    let words = query_words(query);

    let Some(first) = first_occurrence(&fold_chars(text), &words) else {
        return Context {
            content: chars.iter().take(context_length).collect(),
            matches: Vec::new(),
        };
    };

    let content = if chars.len() <= context_length {
        text.to_string()
    } else {
        let start = first.saturating_sub(context_length.div_ceil(2));
        let end = (first + context_length / 2).min(chars.len());

        let mut content = String::with_capacity(context_length + 2 * ELLIPSIS.len());
        if start > 0 {
            content.push_str(ELLIPSIS);
        }
        content.extend(&chars[start..end]);
        if end < chars.len() {
            content.push_str(ELLIPSIS);
        }
        content
    };

    let matches = find_matches(&content, query);
    Context { content, matches }
}
