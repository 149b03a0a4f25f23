//! Sentence and word segmentation.
//!
//! Both segmentations come from the same UAX #29 boundary rules
//! (`unicode-segmentation`), so a period that ends a sentence is also a
//! clean word-boundary token. [`words`] keeps punctuation tokens, matching
//! the word/punctuation stream of classic NLP word tokenizers; [`sentences`]
//! yields only segments that carry alphanumeric content, so runs of blank
//! lines do not count as sentences.

use unicode_segmentation::UnicodeSegmentation;

/// Splits `text` into sentence units.
///
/// # Example
///
/// ```rust
/// use textgauge_core::tokenize::sentences;
///
/// let s = sentences("The guest arrived. He sat down.");
/// assert_eq!(s.len(), 2);
/// ```
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences().collect()
}

/// Splits `text` into word and punctuation tokens.
///
/// Whitespace-only segments are dropped; everything else, including
/// standalone punctuation like `,` and `.`, is kept as a token.
///
/// # Example
///
/// ```rust
/// use textgauge_core::tokenize::words;
///
/// assert_eq!(words("Hello, world."), vec!["Hello", ",", "world", "."]);
/// ```
pub fn words(text: &str) -> Vec<&str> {
    text.split_word_bounds().filter(|segment| !segment.trim().is_empty()).collect()
}
