// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: turning a matched document into something worth displaying.
//!
//! Everything here is a pure function of `(text, query)`. The index decides
//! *which* documents match; this module decides *where* in them to draw
//! attention. The two use different notions of a match on purpose: the index
//! matches normalized word prefixes, the highlighter matches the literal
//! query words anywhere in the text, case-insensitively.
//!
//! - [`find_matches`]: every occurrence of every query word
//! - [`extract_context`]: a bounded snippet around the first occurrence
//! - [`merge_spans`] / [`segments`]: the render-side merge

mod context;
mod matches;
mod render;

pub use context::{extract_context, Context, DEFAULT_CONTEXT_LENGTH, ELLIPSIS};
pub use matches::{find_matches, find_matches_at};
pub use render::{merge_spans, render_marked, segments, Segment};

use crate::types::{Document, Highlight, HighlightedText};

/// Build both highlights for a document.
///
/// The title is never windowed: it comes back whole, with its matches. The
/// content is cut to a `context_length` snippet around the first match.
///
/// Unlike the raw [`find_matches`] output, the spans here are merged: sorted,
/// non-overlapping and non-touching, ready to render as-is.
pub fn highlight_document(doc: &Document, query: &str, context_length: usize) -> Highlight {
    let mut content: HighlightedText = extract_context(&doc.content, query, context_length).into();
    content.matches = merge_spans(&content.matches);

    Highlight {
        title: HighlightedText {
            text: doc.title.clone(),
            matches: merge_spans(&find_matches(&doc.title, query)),
        },
        content,
    }
}
