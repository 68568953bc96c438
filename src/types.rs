// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search pipeline.
//!
//! Documents go in, search results come out. Everything in between (field
//! indexes, hits, spans) is defined close to where it's used, except for the
//! handful of types that cross module boundaries, which live here.
//!
//! # Invariants
//!
//! - **Span**: `start <= end`, both counted in chars (Unicode scalar values)
//!   of the text the span belongs to. Never byte offsets.
//!
//! - **HighlightedText**: every span in `matches` lies within `text`. For
//!   content this is the *windowed* snippet, not the full document body.
//!   In a `SearchResult` the spans are also sorted and merged: no two
//!   overlap or touch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// DOCUMENTS
// =============================================================================

/// One page of the documentation site, already stripped of markup.
///
/// Produced by an offline extraction step and loaded from a JSON list.
/// A sloppy export degrades to unsearchable fields instead of a failed load:
/// missing, `null`, or non-string text fields become empty strings (numbers
/// and booleans are kept as their JSON text), and an id that isn't a
/// non-negative integer becomes `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: usize,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(id.unwrap_or_default())
}

/// Which document attribute an index covers.
///
/// Each field gets its own independent index; the query engine searches
/// them separately and merges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Title,
    Content,
}

impl FieldType {
    /// Every indexed field, in merge order (title results come first).
    pub const ALL: [FieldType; 2] = [FieldType::Title, FieldType::Content];

    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Title => "title",
            FieldType::Content => "content",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SPANS
// =============================================================================

/// Half-open char range `[start, end)` marking a highlighted region.
///
/// Serializes as a two-element array, `[start, end]`, which is what the
/// rendering side expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shift both ends right by `offset` chars.
    #[inline]
    pub fn shifted(self, offset: usize) -> Self {
        Span::new(self.start + offset, self.end + offset)
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Span { start, end }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A piece of text paired with the spans to emphasize in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedText {
    pub text: String,
    pub matches: Vec<Span>,
}

/// Display-ready highlight data for both fields of a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// The full title, never windowed.
    pub title: HighlightedText,
    /// A bounded snippet of the content around the first match.
    pub content: HighlightedText,
}

/// What a query hands back to the UI.
///
/// `title`, `content` and `url` are the document's own values; `highlight`
/// carries the display versions. `score` is currently always `0.0`: the
/// engine sorts on it so a future ranking (field weight, recency) can slot in
/// without changing callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub content: String,
    pub url: String,
    pub score: f64,
    pub highlight: Highlight,
}
