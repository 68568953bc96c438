//! A document appears at most once per result list.

use super::common::{engine_with_limit, make_doc, site_engine, urls};
use docsift::{build_index, Document, SearchEngine};
use std::collections::HashSet;

#[test]
fn test_no_duplicate_documents() {
    let engine = site_engine();
    for query in ["the", "format", "formatter", "config", "schema", "t", "a", "linter toml"] {
        let results = engine.search(query);
        let unique: HashSet<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(unique.len(), results.len(), "duplicates for {query:?}: {:?}", urls(&results));
    }
}

#[test]
fn test_title_and_content_hit_merge_into_one() {
    let results = site_engine().search("formatter");
    assert_eq!(urls(&results), vec!["/doc/2", "/doc/5"]);
}

#[test]
fn test_duplicate_ids_keep_first_occurrence() {
    let docs = vec![
        make_doc(1, "Schema", "first copy"),
        Document {
            id: 1,
            title: "Other".to_string(),
            content: "schema second copy".to_string(),
            url: "/other".to_string(),
        },
    ];
    let results = SearchEngine::new(build_index(docs)).search("schema");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Schema");
    assert_eq!(results[0].url, "/doc/1");
}

#[test]
fn test_at_most_limit_per_field() {
    // Docs 0..15 match "schema" in the title, docs 15..30 in the content.
    let docs: Vec<Document> = (0..30)
        .map(|i| {
            if i < 15 {
                make_doc(i, "Schema", "nothing")
            } else {
                make_doc(i, "Nothing", "schema")
            }
        })
        .collect();

    let results = engine_with_limit(docs.clone(), 5).search("schema");
    assert_eq!(results.len(), 10);
    assert_eq!(
        urls(&results),
        vec![
            "/doc/0", "/doc/1", "/doc/2", "/doc/3", "/doc/4", "/doc/15", "/doc/16", "/doc/17",
            "/doc/18", "/doc/19"
        ]
    );

    assert_eq!(engine_with_limit(docs.clone(), 1).search("schema").len(), 2);
    assert!(engine_with_limit(docs, 0).search("schema").is_empty());
}
