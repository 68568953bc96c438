//! Result ordering: merge order, preserved by a stable sort on a zero score.

use super::common::{make_docs, site_engine, urls};
use docsift::{build_index, SearchEngine};

#[test]
fn test_scores_are_zero() {
    for result in site_engine().search("the") {
        assert_eq!(result.score, 0.0);
    }
}

#[test]
fn test_title_hits_precede_content_hits() {
    let engine = SearchEngine::new(build_index(make_docs(&[
        ("Overview", "The linter is described elsewhere"),
        ("Tools", "Nothing to see"),
        ("Linter", "Rules"),
    ])));
    assert_eq!(urls(&engine.search("linter")), vec!["/doc/2", "/doc/0"]);
}

#[test]
fn test_earlier_words_rank_first_within_a_field() {
    let engine = SearchEngine::new(build_index(make_docs(&[
        ("A", "one two three four schema"),
        ("B", "schema first"),
        ("C", "one schema"),
    ])));
    assert_eq!(urls(&engine.search("schema")), vec!["/doc/1", "/doc/2", "/doc/0"]);
}

#[test]
fn test_ties_keep_document_order() {
    let engine = SearchEngine::new(build_index(make_docs(&[
        ("x", "toml"),
        ("y", "toml"),
        ("z", "toml"),
    ])));
    assert_eq!(urls(&engine.search("toml")), vec!["/doc/0", "/doc/1", "/doc/2"]);
}

#[test]
fn test_search_is_deterministic() {
    let engine = site_engine();
    let first = engine.search("the");
    for _ in 0..10 {
        assert_eq!(engine.search("the"), first);
    }
}
