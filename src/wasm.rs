//! WebAssembly bindings for the documentation search.
//!
//! The site builds the engine once from its document list and calls
//! `search` on every keystroke:
//!
//! ```js
//! const search = new DocSearch(documents, { limit: 5, contextLength: 100 });
//! const results = search.search("install");
//! ```
//!
//! Results are plain JS objects shaped like `SearchResult`, with spans as
//! `[start, end]` arrays.

use crate::index::build_index;
use crate::search::{SearchEngine, SearchOptions};
use crate::types::Document;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// WASM-accessible search engine over an in-memory document list.
#[wasm_bindgen]
pub struct DocSearch {
    engine: SearchEngine,
}

#[wasm_bindgen]
impl DocSearch {
    /// Index `documents` (an array of `{id, title, content, url}`).
    ///
    /// `options` may be `undefined`; missing keys fall back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(documents: JsValue, options: JsValue) -> Result<DocSearch, JsValue> {
        let docs: Vec<Document> = from_value(documents).map_err(|e| e.to_string())?;
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };

        Ok(DocSearch {
            engine: SearchEngine::with_options(build_index(docs), options),
        })
    }

    /// Run a query and return an array of results.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&self.engine.search(query)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of indexed documents.
    #[wasm_bindgen(getter, js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.engine.index().len()
    }
}
