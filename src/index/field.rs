// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-field inverted index.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is strictly increasing by `doc`
//! 2. **ONE_POSTING_PER_DOC**: a document appears at most once per token,
//!    carrying the position of the first word that produced the token
//! 3. **NON_EMPTY**: every token has at least one posting
//!
//! A `FieldIndex` knows nothing about the other fields or the documents
//! themselves. It maps tokens to document positions, and that's all. The
//! engine composes several of them.

use super::tokenize::{forward_tokens, words};
use crate::types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A token occurrence in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Posting {
    /// Position of the document in the index's document list.
    pub doc: usize,
    /// Word position (0-based) of the first word carrying this token.
    pub position: u32,
}

/// A document matched by a field lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHit {
    /// Position of the document in the index's document list.
    pub doc: usize,
    /// Sum of the first word positions of every query term; lower is better.
    pub rank: u64,
}

/// Token → postings map for a single document field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIndex {
    field: FieldType,
    terms: BTreeMap<String, Vec<Posting>>,
}

impl FieldIndex {
    /// Index one field of every document, in document order.
    ///
    /// `texts` yields the field value of document 0, 1, 2, ...
    pub fn build<'a>(field: FieldType, texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();

        for (doc, text) in texts.into_iter().enumerate() {
            for (position, word) in words(text).iter().enumerate() {
                for token in forward_tokens(word) {
                    let postings = terms.entry(token.to_string()).or_default();
                    // Documents arrive in order, so this doc's posting (if any) is last.
                    if postings.last().map_or(true, |p| p.doc != doc) {
                        postings.push(Posting {
                            doc,
                            position: position as u32,
                        });
                    }
                }
            }
        }

        FieldIndex { field, terms }
    }

    pub fn field(&self) -> FieldType {
        self.field
    }

    /// Number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.terms.len()
    }

    /// Total postings across all tokens.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    pub fn postings(&self, token: &str) -> &[Posting] {
        self.terms.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(token, postings)` in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Posting])> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    /// Find documents whose field contains every query term as a forward token.
    ///
    /// Hits come back best-first (lowest rank), ties in document order, and at
    /// most `limit` of them. A query with no indexable terms matches nothing.
    pub fn lookup(&self, query: &str, limit: usize) -> Vec<FieldHit> {
        let mut terms = words(query);
        terms.sort();
        terms.dedup();

        let mut lists = terms.iter().map(|term| self.postings(term));
        let Some(first) = lists.next() else {
            return Vec::new();
        };

        let mut hits: Vec<FieldHit> = first
            .iter()
            .map(|p| FieldHit {
                doc: p.doc,
                rank: u64::from(p.position),
            })
            .collect();

        for postings in lists {
            if hits.is_empty() {
                break;
            }
            hits = intersect(&hits, postings);
        }

        // Stable sort: equal ranks stay in document order.
        hits.sort_by_key(|hit| hit.rank);
        hits.truncate(limit);
        hits
    }
}

/// Intersect doc-sorted hits with a doc-sorted posting list, summing ranks.
fn intersect(hits: &[FieldHit], postings: &[Posting]) -> Vec<FieldHit> {
    let mut out = Vec::with_capacity(hits.len().min(postings.len()));
    let (mut i, mut j) = (0, 0);

    while i < hits.len() && j < postings.len() {
        let (hit, posting) = (hits[i], postings[j]);
        match hit.doc.cmp(&posting.doc) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(FieldHit {
                    doc: hit.doc,
                    rank: hit.rank + u64::from(posting.position),
                });
                i += 1;
                j += 1;
            }
        }
    }

    out
}
