//! Client-side search for a documentation site.
//!
//! Documents are indexed once with forward (prefix) tokens per field. Queries
//! look up the title and content fields independently, merge the hits
//! first-wins by document id, and attach highlight data for display.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   index/     │────▶│   search/    │
//! │ (Document,  │     │ (build_index,│     │ (SearchEngine│
//! │  Span, ...) │     │  FieldIndex) │     │  ResultMerger│
//! └─────────────┘     └──────────────┘     └──────┬───────┘
//!                                                 │
//!                                                 ▼
//!                                          ┌──────────────┐
//!                                          │  highlight/  │
//!                                          │ (find_matches│
//!                                          │  extract_    │
//!                                          │  context)    │
//!                                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{build_index, Document, SearchEngine};
//!
//! let docs: Vec<Document> = docsift::load_documents("search-index.json")?;
//! let engine = SearchEngine::new(build_index(docs));
//!
//! for result in engine.search("install") {
//!     println!("{} {:?}", result.url, result.highlight.content.matches);
//! }
//! ```

pub mod error;
pub mod highlight;
pub mod index;
pub mod load;
pub mod search;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{Error, Result};
pub use highlight::{
    extract_context, find_matches, find_matches_at, highlight_document, merge_spans,
    render_marked, segments, Context, Segment, DEFAULT_CONTEXT_LENGTH, ELLIPSIS,
};
pub use index::{build_index, build_index_sequential, DocumentIndex, FieldHit, FieldIndex};
pub use load::{load_documents, open_index, parse_documents};
pub use search::{ResultMerger, SearchEngine, SearchOptions, DEFAULT_LIMIT};
pub use types::{Document, FieldType, Highlight, HighlightedText, SearchResult, Span};
pub use utils::normalize;
