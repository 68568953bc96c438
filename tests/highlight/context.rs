//! Content snippets around the first match.

use super::common::{make_doc, matched_text, site_docs, site_engine};
use docsift::{extract_context, highlight_document, Span, DEFAULT_CONTEXT_LENGTH, ELLIPSIS};

fn schema_store_content() -> String {
    site_docs()[3].content.clone()
}

#[test]
fn test_short_content_is_returned_unchanged() {
    let text = "Install the tool and run init";
    let context = extract_context(text, "install", DEFAULT_CONTEXT_LENGTH);
    assert_eq!(context.content, text);
    assert_eq!(context.matches, vec![Span::new(0, 7)]);
}

#[test]
fn test_no_match_returns_leading_chars() {
    let text = schema_store_content();
    let context = extract_context(&text, "kubernetes", 20);
    assert_eq!(context.content, "Schemas are fetched ");
    assert!(context.matches.is_empty());
}

#[test]
fn test_match_at_start_cuts_only_the_end() {
    let context = extract_context(&schema_store_content(), "sche", DEFAULT_CONTEXT_LENGTH);
    assert_eq!(context.content, "Schemas are fetched from the schema store and cach...");
    assert_eq!(context.matches, vec![Span::new(0, 4), Span::new(29, 33)]);
}

#[test]
fn test_match_near_end_cuts_only_the_start() {
    let context = extract_context(&schema_store_content(), "pattern", DEFAULT_CONTEXT_LENGTH);
    assert!(context.content.starts_with(ELLIPSIS));
    assert!(context.content.ends_with("in the config."));
    assert_eq!(matched_text(&context.content, &context.matches), vec!["pattern"]);
}

#[test]
fn test_match_in_middle_cuts_both_sides() {
    let context = extract_context(&schema_store_content(), "pattern", 20);
    assert_eq!(context.content, "...th a file pattern in...");
    assert_eq!(context.matches, vec![Span::new(13, 20)]);
}

#[test]
fn test_spans_index_the_snippet() {
    for doc in site_docs() {
        for query in ["the", "file", "schema toml", "o"] {
            let context = extract_context(&doc.content, query, 30);
            let len = context.content.chars().count();
            assert!(context.matches.iter().all(|s| s.start < s.end && s.end <= len));
        }
    }
}

#[test]
fn test_title_is_never_windowed() {
    let title = "A ".repeat(80) + "schema";
    let doc = make_doc(1, &title, "schema");
    let highlight = highlight_document(&doc, "schema", 10);
    assert_eq!(highlight.title.text, title);
    assert_eq!(highlight.title.matches, vec![Span::new(160, 166)]);
}

#[test]
fn test_search_results_carry_windowed_content() {
    let results = site_engine().search("pattern");
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.content, schema_store_content());
    assert!(result.highlight.content.text.starts_with(ELLIPSIS));
    assert_eq!(
        matched_text(&result.highlight.content.text, &result.highlight.content.matches),
        vec!["pattern"]
    );
}
