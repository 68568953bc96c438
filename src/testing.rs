//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a test document. The URL is derived from the id.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: usize, title: &str, content: &str) -> Document {
    Document {
        id,
        title: title.to_string(),
        content: content.to_string(),
        url: format!("/doc/{}", id),
    }
}

/// Create documents with ids `0..n` from `(title, content)` pairs.
pub fn make_docs(pages: &[(&str, &str)]) -> Vec<Document> {
    pages
        .iter()
        .enumerate()
        .map(|(id, (title, content))| make_doc(id, title, content))
        .collect()
}
