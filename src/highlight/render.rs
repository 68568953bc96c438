// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Render-time span merging and text segmentation.
//!
//! The match finder hands back raw, possibly overlapping spans. Before
//! display they are merged into disjoint ranges and the text is split into
//! alternating plain/highlighted segments.
//!
//! **Invariant**: concatenating the segments of `text` yields `text` exactly,
//! for any span list.

use crate::types::Span;

/// One run of text, either plain or highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Sort spans by start and merge every span that starts at or before the
/// running end of the previous one. Touching spans (`[0,3)`, `[3,5)`) merge.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort_by_key(|span| span.start);

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Split `text` into plain and highlighted segments.
///
/// Spans are merged first, and clamped to the text, so any span list is
/// accepted. Empty segments are never emitted.
pub fn segments<'a>(text: &'a str, spans: &[Span]) -> Vec<Segment<'a>> {
    // Char offset → byte offset, with one extra entry for the end of text.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = bounds.len() - 1;
    let byte_at = |char_offset: usize| bounds[char_offset.min(char_len)];

    let mut out = Vec::new();
    let mut last = 0;

    for span in merge_spans(spans) {
        let start = span.start.min(char_len).max(last);
        let end = span.end.min(char_len);
        if start >= end {
            continue;
        }
        if start > last {
            out.push(Segment {
                text: &text[byte_at(last)..byte_at(start)],
                highlighted: false,
            });
        }
        out.push(Segment {
            text: &text[byte_at(start)..byte_at(end)],
            highlighted: true,
        });
        last = end;
    }

    if last < char_len {
        out.push(Segment {
            text: &text[byte_at(last)..],
            highlighted: false,
        });
    }

    out
}

/// Render `text` with each highlighted segment wrapped in `open`/`close`.
///
/// ```ignore
/// let html = render_marked("run init", &[Span::new(4, 8)], "<mark>", "</mark>");
/// assert_eq!(html, "run <mark>init</mark>");
/// ```
pub fn render_marked(text: &str, spans: &[Span], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in segments(text, spans) {
        if segment.highlighted {
            out.push_str(open);
            out.push_str(segment.text);
            out.push_str(close);
        } else {
            out.push_str(segment.text);
        }
    }
    out
}
