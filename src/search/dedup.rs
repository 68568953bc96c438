// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication across field lookups.
//!
//! A document should appear at most once in search results. The title and
//! content lookups routinely find the same page, so their hits are funneled
//! through `ResultMerger`, keyed on the document's own `id`.
//!
//! **Invariant**: each document id appears at most once in search results.
//!
//! Unlike a best-score merge, the first occurrence always wins and insertion
//! order is preserved. With title hits merged first, a page matched by both
//! fields keeps its title position.

use crate::types::Document;
use std::collections::HashSet;

/// Order-preserving, first-wins merger of matched documents.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// merger.merge_all(title_docs);
/// merger.merge_all(content_docs);
/// let docs = merger.into_documents();
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger<'a> {
    seen: HashSet<usize>,
    docs: Vec<&'a Document>,
}

impl<'a> ResultMerger<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger with room for `capacity` unique documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            docs: Vec::with_capacity(capacity),
        }
    }

    /// Add a document unless one with the same id is already present.
    ///
    /// Returns `true` if the document was added.
    pub fn merge(&mut self, doc: &'a Document) -> bool {
        let added = self.seen.insert(doc.id);
        if added {
            self.docs.push(doc);
        }
        added
    }

    pub fn merge_all(&mut self, docs: impl IntoIterator<Item = &'a Document>) {
        for doc in docs {
            self.merge(doc);
        }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.seen.contains(&id)
    }

    /// The merged documents, in first-seen order.
    pub fn into_documents(self) -> Vec<&'a Document> {
        self.docs
    }
}
