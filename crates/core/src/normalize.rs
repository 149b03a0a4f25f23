//! Stop-word stripping of raw article text.
//!
//! This feeds sentiment scoring and the `Word Count` column only. The
//! readability statistics (sentence length, fog index, pronoun count) are
//! computed from the unfiltered text on purpose.

use crate::StopWordSet;

/// Removes stop words from `text`, rejoining survivors with single spaces.
///
/// Words are split on whitespace (not full tokenization) and kept iff their
/// lowercased form is absent from the stop-word set. The operation is
/// idempotent.
///
/// # Example
///
/// ```rust
/// use textgauge_core::{StopWordSet, strip_stop_words};
///
/// let stop_words = StopWordSet::from_words(["the", "a"]);
/// assert_eq!(strip_stop_words("The quick brown fox", &stop_words), "quick brown fox");
/// ```
pub fn strip_stop_words(text: &str, stop_words: &StopWordSet) -> String {
    text.split_whitespace()
        .filter(|word| !stop_words.matches(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_case_insensitively() {
        let stop_words = StopWordSet::from_words(["the", "a"]);
        assert_eq!(strip_stop_words("The cat sat on a THE mat", &stop_words), "cat sat on mat");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let stop_words = StopWordSet::from_words(["the"]);
        assert_eq!(strip_stop_words("  keep \n these\t words  ", &stop_words), "keep these words");
    }

    #[test]
    fn test_punctuation_attached_words_survive() {
        // "the," is not "the" under whitespace splitting, so it stays.
        let stop_words = StopWordSet::from_words(["the"]);
        assert_eq!(strip_stop_words("the the, end", &stop_words), "the, end");
    }

    #[test]
    fn test_idempotent() {
        let stop_words = StopWordSet::from_words(["the", "a", "of"]);
        let once = strip_stop_words("The best of a bad day", &stop_words);
        let twice = strip_stop_words(&once, &stop_words);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        let stop_words = StopWordSet::from_words(["the"]);
        assert_eq!(strip_stop_words("", &stop_words), "");
        assert_eq!(strip_stop_words("the THE The", &stop_words), "");
    }
}
