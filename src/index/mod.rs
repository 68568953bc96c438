// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: documents in, one inverted index per field out.
//!
//! The index is built once, at startup or at deploy time, and never mutated
//! afterwards. It is rebuilt wholesale when the document list changes.
//! `build_index` only returns once every field is fully indexed, so no
//! query can observe a half-built index.
//!
//! # INVARIANTS
//!
//! - **FIELDS_ALIGNED**: every field index was built from the same `docs`,
//!   in the same order, so a posting's `doc` is a position in `docs`
//! - **POSTINGS_IN_BOUNDS**: `posting.doc < docs.len()` for every posting
//! - **POSTINGS_SORTED**: each posting list is strictly increasing by `doc`
//!   (one posting per document). Lookup intersects lists with a merge walk
//!   and silently misses hits otherwise
//!
//! All of these hold by construction and are checked by
//! [`DocumentIndex::validate`] for indexes loaded from disk.

mod field;
mod tokenize;

pub use field::{FieldHit, FieldIndex, Posting};
pub use tokenize::{forward_tokens, words};

use crate::error::{Error, Result};
use crate::types::{Document, FieldType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serialized index format version. Bump when `DocumentIndex` changes shape.
pub const INDEX_VERSION: u32 = 1;

/// The complete searchable index: documents plus one index per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIndex {
    version: u32,
    docs: Vec<Document>,
    title: FieldIndex,
    content: FieldIndex,
}

impl DocumentIndex {
    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// The document at a posting's position, if there is one.
    pub fn document(&self, doc: usize) -> Option<&Document> {
        self.docs.get(doc)
    }

    /// The index for a single field.
    pub fn field(&self, field: FieldType) -> &FieldIndex {
        match field {
            FieldType::Title => &self.title,
            FieldType::Content => &self.content,
        }
    }

    /// Check the invariants a deserialized index can't be trusted to hold:
    /// format version, each field index in its own slot, and every posting
    /// list sorted and in bounds.
    pub fn validate(&self) -> Result<()> {
        if self.version != INDEX_VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: INDEX_VERSION,
            });
        }

        for field in FieldType::ALL {
            let index = self.field(field);
            if index.field() != field {
                return Err(Error::FieldMismatch {
                    slot: field,
                    found: index.field(),
                });
            }

            for (token, postings) in index.iter() {
                if let Some(p) = postings.iter().find(|p| p.doc >= self.docs.len()) {
                    return Err(Error::DanglingPosting {
                        field,
                        doc: p.doc,
                        len: self.docs.len(),
                    });
                }
                if postings.windows(2).any(|pair| pair[0].doc >= pair[1].doc) {
                    return Err(Error::UnsortedPostings {
                        field,
                        token: token.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Parse a serialized index and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let index: DocumentIndex = serde_json::from_str(json)?;
        index.validate()?;
        Ok(index)
    }

    /// Same as [`from_json`](Self::from_json), for an already-parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let index: DocumentIndex = serde_json::from_value(value)?;
        index.validate()?;
        Ok(index)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the index, indexing the title and content fields in parallel.
#[cfg(feature = "parallel")]
pub fn build_index(docs: Vec<Document>) -> DocumentIndex {
    let (title, content) = rayon::join(
        || FieldIndex::build(FieldType::Title, docs.iter().map(|d| d.title.as_str())),
        || FieldIndex::build(FieldType::Content, docs.iter().map(|d| d.content.as_str())),
    );
    finish(docs, title, content)
}

/// Build the index (sequential without the `parallel` feature).
#[cfg(not(feature = "parallel"))]
pub fn build_index(docs: Vec<Document>) -> DocumentIndex {
    build_index_sequential(docs)
}

/// Build the index on the calling thread only.
///
/// Produces exactly the same index as [`build_index`].
pub fn build_index_sequential(docs: Vec<Document>) -> DocumentIndex {
    let title = FieldIndex::build(FieldType::Title, docs.iter().map(|d| d.title.as_str()));
    let content = FieldIndex::build(FieldType::Content, docs.iter().map(|d| d.content.as_str()));
    finish(docs, title, content)
}

fn finish(docs: Vec<Document>, title: FieldIndex, content: FieldIndex) -> DocumentIndex {
    debug!(
        docs = docs.len(),
        title_tokens = title.token_count(),
        content_tokens = content.token_count(),
        "built document index"
    );
    DocumentIndex {
        version: INDEX_VERSION,
        docs,
        title,
        content,
    }
}
