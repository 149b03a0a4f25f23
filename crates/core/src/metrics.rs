//! Readability and sentiment metric computation.
//!
//! [`analyze_text`] turns one article's text into the fixed
//! [`ArticleMetrics`] record. Sentiment scores come from the
//! stop-word-filtered token stream; the readability statistics (sentence
//! length, fog index, pronouns, word lengths) come from the unfiltered
//! text. Ratio denominators that can reach zero carry a small epsilon, so
//! every field is finite for any input, including empty text.
//!
//! # Example
//!
//! ```rust
//! use textgauge_core::{SentimentLexicon, StopWordSet, analyze_text};
//!
//! let stop_words = StopWordSet::from_words(["the"]);
//! let lexicon = SentimentLexicon::from_words(["calm"], ["gloomy"]);
//! let metrics = analyze_text("The calm morning felt calm.", &lexicon, &stop_words);
//! assert_eq!(metrics.positive_score, 2);
//! ```

use regex::Regex;
use serde::Serialize;

use crate::lexicon::{SentimentLexicon, StopWordSet};
use crate::normalize::strip_stop_words;
use crate::syllable::{SyllableMap, is_complex, syllables_per_word};
use crate::tokenize;

/// Smoothing constant for denominators that may be zero.
pub const EPSILON: f64 = 1e-6;

/// The thirteen metric columns computed for one article.
///
/// Field order matches the output column order. `negative_score` holds the
/// negated count, and `avg_words_per_sentence` duplicates
/// `avg_sentence_length`; both quirks are part of the published record
/// shape and are kept.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleMetrics {
    /// Positive-lexicon hits in the stop-word-filtered token stream.
    #[serde(rename = "Positive Score")]
    pub positive_score: u64,

    /// Negative-lexicon hits, stored with a flipped sign.
    #[serde(rename = "Negative Score")]
    pub negative_score: i64,

    /// `(positive - negative) / (positive + negative + eps)`.
    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,

    /// `(positive + negative) / (filtered token count + eps)`.
    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,

    /// Unfiltered word tokens per sentence.
    #[serde(rename = "Avg Sentence Length")]
    pub avg_sentence_length: f64,

    /// Complex words as a percentage of unfiltered word tokens.
    #[serde(rename = "Percentage Complex Words")]
    pub percentage_complex_words: f64,

    /// `0.4 * (avg sentence length + percentage complex words)`.
    #[serde(rename = "Fog Index")]
    pub fog_index: f64,

    /// Identical to `avg_sentence_length`.
    #[serde(rename = "Avg Words Per Sentence")]
    pub avg_words_per_sentence: f64,

    /// Number of complex words in the unfiltered token stream.
    #[serde(rename = "Complex Word Count")]
    pub complex_word_count: u64,

    /// Whitespace-split token count of the stop-word-filtered text.
    #[serde(rename = "Word Count")]
    pub word_count: u64,

    /// Estimated syllables per distinct word of the original text.
    #[serde(rename = "Syllables Per Word")]
    pub syllables_per_word: SyllableMap,

    /// Whole-word matches of I/we/my/ours, case-insensitive.
    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: u64,

    /// Mean character length of non-punctuation word tokens.
    #[serde(rename = "Avg Word Length")]
    pub avg_word_length: f64,
}

/// One output row: URL identity plus the article's metrics.
///
/// Serializes to the exact output column order. Built once per successful
/// fetch and never mutated afterward.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRecord {
    /// Opaque row identifier from the input table, preserved verbatim.
    #[serde(rename = "URL_ID")]
    pub url_id: String,

    /// The fetched URL.
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Positive Score")]
    pub positive_score: u64,
    #[serde(rename = "Negative Score")]
    pub negative_score: i64,
    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,
    #[serde(rename = "Avg Sentence Length")]
    pub avg_sentence_length: f64,
    #[serde(rename = "Percentage Complex Words")]
    pub percentage_complex_words: f64,
    #[serde(rename = "Fog Index")]
    pub fog_index: f64,
    #[serde(rename = "Avg Words Per Sentence")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "Complex Word Count")]
    pub complex_word_count: u64,
    #[serde(rename = "Word Count")]
    pub word_count: u64,
    #[serde(rename = "Syllables Per Word")]
    pub syllables_per_word: SyllableMap,
    #[serde(rename = "Personal Pronouns")]
    pub personal_pronouns: u64,
    #[serde(rename = "Avg Word Length")]
    pub avg_word_length: f64,
}

impl MetricRecord {
    /// Prepends URL identity to a computed metrics record.
    pub fn new(url_id: String, url: String, metrics: ArticleMetrics) -> Self {
        Self {
            url_id,
            url,
            positive_score: metrics.positive_score,
            negative_score: metrics.negative_score,
            polarity_score: metrics.polarity_score,
            subjectivity_score: metrics.subjectivity_score,
            avg_sentence_length: metrics.avg_sentence_length,
            percentage_complex_words: metrics.percentage_complex_words,
            fog_index: metrics.fog_index,
            avg_words_per_sentence: metrics.avg_words_per_sentence,
            complex_word_count: metrics.complex_word_count,
            word_count: metrics.word_count,
            syllables_per_word: metrics.syllables_per_word,
            personal_pronouns: metrics.personal_pronouns,
            avg_word_length: metrics.avg_word_length,
        }
    }
}

/// Computes the full metric record for one article text.
///
/// `text` is the title and body joined with the standard separator; see
/// [`crate::extract::ArticleContent::combined`].
pub fn analyze_text(text: &str, lexicon: &SentimentLexicon, stop_words: &StopWordSet) -> ArticleMetrics {
    let filtered = strip_stop_words(text, stop_words);
    let tokens = tokenize::words(&filtered);

    let positive = tokens.iter().filter(|token| lexicon.is_positive(token)).count();
    let negative = tokens.iter().filter(|token| lexicon.is_negative(token)).count();

    let polarity_score = (positive as f64 - negative as f64) / (positive as f64 + negative as f64 + EPSILON);
    let subjectivity_score = (positive + negative) as f64 / (tokens.len() as f64 + EPSILON);

    let sentences = tokenize::sentences(text);
    let words = tokenize::words(text);

    let avg_sentence_length = words.len() as f64 / (sentences.len() as f64 + EPSILON);
    let complex_word_count = words.iter().filter(|word| is_complex(word)).count();
    let percentage_complex_words = complex_word_count as f64 / (words.len() as f64 + EPSILON) * 100.0;
    let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

    let word_count = filtered.split_whitespace().count();

    let counted_words: Vec<&str> =
        words.iter().copied().filter(|word| !is_single_punctuation(word)).collect();
    let total_characters: usize = counted_words.iter().map(|word| word.chars().count()).sum();
    let avg_word_length =
        if counted_words.is_empty() { 0.0 } else { total_characters as f64 / counted_words.len() as f64 };

    ArticleMetrics {
        positive_score: positive as u64,
        negative_score: -(negative as i64),
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count: complex_word_count as u64,
        word_count: word_count as u64,
        syllables_per_word: syllables_per_word(text),
        personal_pronouns: count_personal_pronouns(text) as u64,
        avg_word_length,
    }
}

/// Counts whole-word pronoun matches over the original text.
///
/// Matches `I`, `we`, `my`, `ours` and `us` case-insensitively, then drops
/// every literal `us` from the tally. The `us` exclusion is a stated rule
/// of the record format (it collides with the country abbreviation), not a
/// filtering bug.
fn count_personal_pronouns(text: &str) -> usize {
    let pronoun_regex = Regex::new(r"(?i)\b(I|we|my|ours|us)\b").unwrap();
    pronoun_regex
        .find_iter(text)
        .filter(|found| !found.as_str().eq_ignore_ascii_case("us"))
        .count()
}

fn is_single_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}
