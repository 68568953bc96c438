//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::{build_index, Document, SearchEngine, SearchOptions};

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_doc, make_docs};

/// A small documentation site, close to what the real extraction step emits.
pub fn site_docs() -> Vec<Document> {
    vec![
        make_doc(1, "Getting Started", "Install the tool and run init to create a config file."),
        make_doc(
            2,
            "Formatter",
            "The formatter rewrites TOML files in place. Run format on a directory to format every file in it.",
        ),
        make_doc(
            3,
            "Linter",
            "The linter checks TOML documents against a JSON schema and reports every violation it finds.",
        ),
        make_doc(
            4,
            "Schema Store",
            "Schemas are fetched from the schema store and cached. Associate a schema with a file pattern in the config.",
        ),
        make_doc(
            5,
            "Configuration",
            "All options live in the config file. The formatter and linter read the same configuration.",
        ),
        make_doc(6, "Editors", "Editor extensions start the language server and talk to it over stdio."),
    ]
}

/// Engine over [`site_docs`] with default options.
pub fn site_engine() -> SearchEngine {
    SearchEngine::new(build_index(site_docs()))
}

/// Engine over arbitrary docs with the given per-field limit.
pub fn engine_with_limit(docs: Vec<Document>, limit: usize) -> SearchEngine {
    SearchEngine::with_options(
        build_index(docs),
        SearchOptions {
            limit,
            ..SearchOptions::default()
        },
    )
}

/// Collect result URLs, in order.
pub fn urls(results: &[docsift::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.url.as_str()).collect()
}

/// Text covered by each span, for readable assertions.
pub fn matched_text(text: &str, spans: &[docsift::Span]) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    spans
        .iter()
        .map(|s| chars[s.start..s.end].iter().collect())
        .collect()
}
