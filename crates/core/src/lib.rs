pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod lexicon;
pub mod metrics;
pub mod normalize;
pub mod pipeline;
pub mod syllable;
pub mod tokenize;

pub use error::{Result, TextGaugeError};
pub use extract::{ArticleContent, SelectorConfig, TITLE_BODY_SEPARATOR, extract_article};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, HttpFetcher, fetch_html};
pub use lexicon::{SentimentLexicon, StopWordSet, stop_word_files};
pub use metrics::{ArticleMetrics, EPSILON, MetricRecord, analyze_text};
pub use normalize::strip_stop_words;
pub use pipeline::{FetchArticle, InputRow, RunOutcome, SkippedRow, read_input, run, write_output};
pub use syllable::{SyllableMap, count_syllables, is_complex, scan_syllables, syllables_per_word};
pub use tokenize::{sentences, words};
