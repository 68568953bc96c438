//! Which documents a query finds.

use super::common::{matched_text, site_engine, urls};
use docsift::{build_index, SearchEngine, Span};

#[test]
fn test_install_finds_getting_started() {
    let results = site_engine().search("install");
    assert_eq!(urls(&results), vec!["/doc/1"]);

    let content = &results[0].highlight.content;
    assert_eq!(matched_text(&content.text, &content.matches), vec!["Install"]);
}

#[test]
fn test_single_document_example() {
    let engine = SearchEngine::new(build_index(vec![docsift::Document {
        id: 1,
        title: "Getting Started".to_string(),
        content: "Install the tool and run init".to_string(),
        url: "/start".to_string(),
    }]));

    let results = engine.search("install");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "/start");
    assert_eq!(results[0].highlight.content.text, "Install the tool and run init");
    assert_eq!(results[0].highlight.content.matches, vec![Span::new(0, 7)]);
}

#[test]
fn test_partial_word_matches_by_prefix() {
    let results = site_engine().search("sche");
    assert_eq!(urls(&results), vec!["/doc/4", "/doc/3"]);
}

#[test]
fn test_prefix_does_not_match_mid_word() {
    // "figur" sits inside "configuration" but starts no word.
    assert!(site_engine().search("figur").is_empty());
}

#[test]
fn test_query_is_case_insensitive() {
    assert_eq!(urls(&site_engine().search("LINTER")), urls(&site_engine().search("linter")));
}

#[test]
fn test_all_terms_must_match_within_a_field() {
    assert_eq!(urls(&site_engine().search("toml schema")), vec!["/doc/3"]);
    assert!(site_engine().search("toml stdio").is_empty());
}

#[test]
fn test_matches_across_both_fields() {
    let results = site_engine().search("config");
    assert_eq!(urls(&results), vec!["/doc/5", "/doc/1", "/doc/4"]);
}

#[test]
fn test_result_carries_document_values() {
    let results = site_engine().search("editors");
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.title, "Editors");
    assert_eq!(result.url, "/doc/6");
    assert!(result.content.starts_with("Editor extensions"));
    assert_eq!(result.highlight.title.text, "Editors");
    assert_eq!(result.highlight.title.matches, vec![Span::new(0, 7)]);
}

#[test]
#[cfg(feature = "unicode-normalization")]
fn test_diacritics_fold_in_the_index() {
    use super::common::make_doc;

    let engine = SearchEngine::new(build_index(vec![make_doc(1, "Café setup", "Résumé of options")]));
    assert_eq!(urls(&engine.search("cafe")), vec!["/doc/1"]);
    assert_eq!(urls(&engine.search("resume")), vec!["/doc/1"]);
}

#[test]
#[cfg(feature = "unicode-normalization")]
fn test_decomposed_text_is_found() {
    use super::common::make_doc;

    let engine = SearchEngine::new(build_index(vec![make_doc(
        1,
        "Approaches",
        "A nai\u{0308}ve approach to formatting",
    )]));
    assert_eq!(urls(&engine.search("naive")), vec!["/doc/1"]);
    assert_eq!(urls(&engine.search("naïve")), vec!["/doc/1"]);
    assert_eq!(urls(&engine.search("nai\u{0308}ve approach")), vec!["/doc/1"]);
}

#[test]
fn test_documents_with_missing_fields_are_searchable() {
    let docs = docsift::parse_documents(r#"[{"id": 1, "title": "Only a title"}, {"id": 2}]"#).unwrap();
    let engine = SearchEngine::new(build_index(docs));

    let results = engine.search("only");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "");
    assert_eq!(results[0].highlight.content.text, "");
    assert!(results[0].highlight.content.matches.is_empty());
}
