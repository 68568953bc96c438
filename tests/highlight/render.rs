//! Merging spans and splitting text for display.

use super::common::site_engine;
use docsift::{merge_spans, render_marked, segments, Span};

#[test]
fn test_overlapping_matches_render_as_one_mark() {
    let text = "formatter";
    let spans = docsift::find_matches(text, "format matter");
    assert_eq!(merge_spans(&spans), vec![Span::new(0, 9)]);
    assert_eq!(render_marked(text, &spans, "<mark>", "</mark>"), "<mark>formatter</mark>");
}

#[test]
fn test_segments_alternate_and_reassemble() {
    let text = "run init to create";
    let parts = segments(text, &[Span::new(4, 8)]);
    let flags: Vec<bool> = parts.iter().map(|s| s.highlighted).collect();
    assert_eq!(flags, vec![false, true, false]);
    assert_eq!(parts.iter().map(|s| s.text).collect::<String>(), text);
}

#[test]
fn test_out_of_range_spans_are_clamped() {
    let text = "toml";
    let parts = segments(text, &[Span::new(2, 50), Span::new(90, 95)]);
    assert_eq!(parts.iter().map(|s| s.text).collect::<Vec<_>>(), vec!["to", "ml"]);
    assert!(parts[1].highlighted);
}

#[test]
fn test_multibyte_text_splits_on_char_boundaries() {
    let text = "設定ファイルを編集";
    assert_eq!(
        render_marked(text, &[Span::new(2, 6)], "[", "]"),
        "設定[ファイル]を編集"
    );
}

#[test]
fn test_rendered_results_reassemble_to_snippets() {
    for result in site_engine().search("the") {
        for text in [&result.highlight.title, &result.highlight.content] {
            let joined: String = segments(&text.text, &text.matches)
                .iter()
                .map(|s| s.text)
                .collect();
            assert_eq!(joined, text.text);
        }
    }
}

#[test]
fn test_result_highlights_arrive_merged() {
    let results = site_engine().search("format formatter");
    assert_eq!(results[0].url, "/doc/2");
    assert_eq!(results[0].highlight.title.matches, vec![Span::new(0, 9)]);

    for result in &results {
        for text in [&result.highlight.title, &result.highlight.content] {
            assert_eq!(merge_spans(&text.matches), text.matches);
            assert!(text.matches.windows(2).all(|w| w[0].end < w[1].start));
        }
    }
}
