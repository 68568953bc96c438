// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward tokenization.
//!
//! Text is normalized, split into words at every char that is neither
//! alphanumeric nor a combining mark, and every non-empty prefix of each word
//! becomes a token. That's what lets "inst" find "install" while the user is
//! still typing.
//!
//! Normalizing before splitting matters for decomposed text: in
//! `"nai\u{0308}ve"` the diaeresis is its own char, and splitting first would
//! cut the word in two.
//!
//! Queries go through [`words`] too, so both sides agree on what a term is.

use crate::utils::{is_combining_mark, normalize};

/// Word boundary detection: checks if character is a word separator.
///
/// Combining marks only survive normalization without the
/// `unicode-normalization` feature; they stay attached to their word.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric() && !is_combining_mark(c)
}

/// Split text into normalized words, in order of appearance.
///
/// Empty words (runs of separators) are dropped.
pub fn words(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_word_boundary)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every non-empty char prefix of `word`, shortest first.
///
/// ```ignore
/// let tokens: Vec<_> = forward_tokens("run").collect();
/// assert_eq!(tokens, ["r", "ru", "run"]);
/// ```
pub fn forward_tokens(word: &str) -> impl Iterator<Item = &str> + '_ {
    word.char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .filter(|&end| end > 0)
        .map(move |end| &word[..end])
}
