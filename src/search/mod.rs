// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: where the index and the highlighter meet.
//!
//! A query runs as two independent lookups, one against the title index and
//! one against the content index, each capped at `limit` hits. The hits are
//! merged first-wins by document id (title hits first), every surviving
//! document gets its highlights, and the list is sorted by score.
//!
//! Scores are all zero for now, so the stable sort leaves merge order
//! untouched. Field weighting or recency would go in `score_result`.
//!
//! `search` never fails. A lookup that goes wrong (only possible with a
//! corrupted index loaded from disk) is logged and treated as "no results".

pub mod dedup;

pub use dedup::ResultMerger;

use crate::error::{Error, Result};
use crate::highlight::{highlight_document, DEFAULT_CONTEXT_LENGTH};
use crate::index::DocumentIndex;
use crate::types::{Document, FieldType, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Per-field hit cap used when the caller doesn't pick one.
pub const DEFAULT_LIMIT: usize = 5;

/// Query-time knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum hits taken from *each* field lookup (default: 5).
    pub limit: usize,
    /// Length of the content snippet, in chars (default: 100).
    pub context_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            context_length: DEFAULT_CONTEXT_LENGTH,
        }
    }
}

/// Owns a built index and answers queries against it.
///
/// The index is immutable, so a `SearchEngine` can be shared across threads
/// (e.g. behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: DocumentIndex,
    options: SearchOptions,
}

impl SearchEngine {
    pub fn new(index: DocumentIndex) -> Self {
        Self::with_options(index, SearchOptions::default())
    }

    pub fn with_options(index: DocumentIndex, options: SearchOptions) -> Self {
        Self { index, options }
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run a query. Never fails: errors are logged and yield no results.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        match self.try_search(query) {
            Ok(results) => results,
            Err(err) => {
                error!(query, error = %err, "search failed; returning no results");
                Vec::new()
            }
        }
    }

    /// Run a query, surfacing lookup failures instead of swallowing them.
    pub fn try_search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let capacity = self.options.limit.saturating_mul(2).min(self.index.len());
        let mut merger = ResultMerger::with_capacity(capacity);
        for field in FieldType::ALL {
            merger.merge_all(self.lookup(field, query)?);
        }

        let mut results: Vec<SearchResult> = merger
            .into_documents()
            .into_iter()
            .map(|doc| self.build_result(doc, query))
            .collect();

        // Stable: equal scores keep merge order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(query, results = results.len(), "search complete");
        Ok(results)
    }

    /// Resolve one field's hits to documents.
    fn lookup(&self, field: FieldType, query: &str) -> Result<Vec<&Document>> {
        self.index
            .field(field)
            .lookup(query, self.options.limit)
            .into_iter()
            .map(|hit| {
                self.index.document(hit.doc).ok_or(Error::DanglingPosting {
                    field,
                    doc: hit.doc,
                    len: self.index.len(),
                })
            })
            .collect()
    }

    fn build_result(&self, doc: &Document, query: &str) -> SearchResult {
        SearchResult {
            title: doc.title.clone(),
            content: doc.content.clone(),
            url: doc.url.clone(),
            score: score_result(doc),
            highlight: highlight_document(doc, query, self.options.context_length),
        }
    }
}

/// Relevance score for a matched document.
///
/// Always zero: results keep the order the field lookups produced them in.
fn score_result(_doc: &Document) -> f64 {
    0.0
}
