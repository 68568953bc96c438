// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading documents and indexes from disk.
//!
//! Two input shapes are accepted:
//! - a JSON array of documents, `[{id, title, content, url}, ...]`, as
//!   produced by the site's markdown extraction step; and
//! - a serialized [`DocumentIndex`] (a JSON object), as written by
//!   `docsift index`.

use crate::error::{Error, Result};
use crate::index::{build_index, DocumentIndex};
use crate::types::Document;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a JSON document list.
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON document list.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    parse_documents(&read(path.as_ref())?)
}

/// Open either a document list (indexing it) or a prebuilt index.
pub fn open_index(path: impl AsRef<Path>) -> Result<DocumentIndex> {
    let path = path.as_ref();
    let value: serde_json::Value = serde_json::from_str(&read(path)?)?;

    if value.is_array() {
        let docs: Vec<Document> = serde_json::from_value(value)?;
        debug!(path = %path.display(), docs = docs.len(), "indexing document list");
        Ok(build_index(docs))
    } else {
        debug!(path = %path.display(), "loading prebuilt index");
        DocumentIndex::from_value(value)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
