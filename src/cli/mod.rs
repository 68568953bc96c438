// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `index` to build an index from the site's document
//! list, `inspect` to look at what an index contains, and `search` to query
//! it from the terminal with the same highlighting the site shows.

pub mod display;

use clap::{Parser, Subcommand};
use docsift::{DEFAULT_CONTEXT_LENGTH, DEFAULT_LIMIT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Documentation search index builder and query tool",
    version
)]
pub struct Cli {
    /// Log index and query internals to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search index from a JSON document list
    Index {
        /// JSON array of {id, title, content, url} documents
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the index (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print the index JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show document and token statistics for a document list or index
    Inspect {
        /// Document list or prebuilt index
        file: PathBuf,
    },

    /// Search a document list or index and display results
    Search {
        /// Document list or prebuilt index
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum hits taken from each field (title, content)
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Length of the content snippet, in characters
        #[arg(long, default_value_t = DEFAULT_CONTEXT_LENGTH)]
        context_length: usize,

        /// Print results as JSON instead of highlighted text
        #[arg(long)]
        json: bool,
    },
}
