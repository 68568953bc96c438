// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for loading indexes and running fallible searches.
//!
//! Building an index never fails and `SearchEngine::search` never fails;
//! these errors only surface from the loaders and `try_search`.

use crate::types::FieldType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} index refers to document {doc}, but the index holds {len} documents")]
    DanglingPosting {
        field: FieldType,
        doc: usize,
        len: usize,
    },

    #[error("{slot} slot holds the {found} field index")]
    FieldMismatch { slot: FieldType, found: FieldType },

    #[error("{field} postings for {token:?} are not strictly increasing by document")]
    UnsortedPostings { field: FieldType, token: String },

    #[error("unsupported index version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
