//! The driver loop: tabular input, per-URL analysis, tabular output.
//!
//! [`run`] walks the input rows strictly in order, one fetch at a time. A
//! row whose fetch or extraction fails is recorded in
//! [`RunOutcome::skipped`] and the loop moves on; there are no retries and
//! partial results are acceptable. Pre-loop failures (unreadable input CSV,
//! missing lexicon files) are fatal and surface before any fetching starts.
//!
//! # Example
//!
//! ```rust,no_run
//! use textgauge_core::{FetchConfig, HttpFetcher, SentimentLexicon, StopWordSet, pipeline};
//! use textgauge_core::extract::SelectorConfig;
//!
//! # async fn example() -> textgauge_core::Result<()> {
//! let stop_words = StopWordSet::load(&["stopwords/generic.txt"])?;
//! let lexicon = SentimentLexicon::load("positive.txt", "negative.txt", &stop_words)?;
//! let rows = pipeline::read_input("input.csv")?;
//!
//! let fetcher = HttpFetcher::new(FetchConfig::default(), SelectorConfig::default())?;
//! let outcome = pipeline::run(&fetcher, &rows, &lexicon, &stop_words).await;
//! pipeline::write_output("output.csv", &outcome.records)?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::extract::ArticleContent;
use crate::lexicon::{SentimentLexicon, StopWordSet};
use crate::metrics::{MetricRecord, analyze_text};

/// Capability interface for fetching an article's title and body.
///
/// The HTTP implementation lives in [`crate::fetch::HttpFetcher`]; a
/// headless-browser implementation (or a test stub) slots in the same way.
/// Failing with any error marks the row as skipped.
pub trait FetchArticle {
    /// Fetches the page at `url` and extracts its title and body.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ArticleContent>> + Send;
}

/// One row of the input table.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRow {
    /// Opaque identifier, preserved verbatim in the output.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// URL to fetch, used as-is.
    #[serde(rename = "URL")]
    pub url: String,
}

/// A row that failed to fetch or extract.
#[derive(Debug, Clone)]
pub struct SkippedRow {
    pub url_id: String,
    pub url: String,
    /// Human-readable failure description for the per-row log line.
    pub reason: String,
}

/// Result of one driver-loop run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Successfully analyzed rows, in input order.
    pub records: Vec<MetricRecord>,
    /// Rows skipped after a fetch or extraction failure, in input order.
    pub skipped: Vec<SkippedRow>,
}

/// Reads the input CSV. Requires `URL_ID` and `URL` columns.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: InputRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

/// Writes metric records to the output CSV, headers first.
pub fn write_output<P: AsRef<Path>>(path: P, records: &[MetricRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Fetches and analyzes every input row sequentially.
///
/// Never fails as a whole: per-row errors land in the outcome's skip list
/// with the offending URL attached.
pub async fn run<F: FetchArticle>(
    fetcher: &F,
    rows: &[InputRow],
    lexicon: &SentimentLexicon,
    stop_words: &StopWordSet,
) -> RunOutcome {
    let mut outcome = RunOutcome::default();

    for row in rows {
        match fetcher.fetch(&row.url).await {
            Ok(article) => {
                let metrics = analyze_text(&article.combined(), lexicon, stop_words);
                outcome.records.push(MetricRecord::new(row.url_id.clone(), row.url.clone(), metrics));
            }
            Err(e) => {
                outcome.skipped.push(SkippedRow {
                    url_id: row.url_id.clone(),
                    url: row.url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextGaugeError;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    struct StubFetcher {
        pages: HashMap<String, ArticleContent>,
    }

    impl StubFetcher {
        fn with_page(url: &str, title: &str, body: &str) -> Self {
            let mut pages = HashMap::new();
            pages.insert(url.to_string(), ArticleContent { title: title.to_string(), body: body.to_string() });
            Self { pages }
        }
    }

    impl FetchArticle for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<ArticleContent> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| TextGaugeError::ElementNotFound { selector: "h1.entry-title".to_string() })
        }
    }

    fn fixtures() -> (SentimentLexicon, StopWordSet) {
        (SentimentLexicon::from_words(["good"], ["bad"]), StopWordSet::from_words(["the"]))
    }

    fn row(id: &str, url: &str) -> InputRow {
        InputRow { url_id: id.to_string(), url: url.to_string() }
    }

    #[tokio::test]
    async fn test_run_success() {
        let fetcher = StubFetcher::with_page("https://example.com/a", "A good day", "It was good, not bad.");
        let (lexicon, stop_words) = fixtures();
        let rows = vec![row("1", "https://example.com/a")];

        let outcome = run(&fetcher, &rows, &lexicon, &stop_words).await;
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.records[0].url_id, "1");
        assert_eq!(outcome.records[0].positive_score, 2);
        assert_eq!(outcome.records[0].negative_score, -1);
    }

    #[tokio::test]
    async fn test_failed_row_skipped_loop_continues() {
        let fetcher = StubFetcher::with_page("https://example.com/b", "Title", "Body text here.");
        let (lexicon, stop_words) = fixtures();
        let rows = vec![row("1", "https://example.com/missing"), row("2", "https://example.com/b")];

        let outcome = run(&fetcher, &rows, &lexicon, &stop_words).await;
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].url_id, "2");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].url_id, "1");
        assert!(outcome.skipped[0].reason.contains("h1.entry-title"));
    }

    #[test]
    fn test_read_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "URL_ID,URL").unwrap();
        writeln!(file, "blackassign0001,https://example.com/a").unwrap();
        writeln!(file, "blackassign0002,https://example.com/b").unwrap();

        let rows = read_input(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].url_id, "blackassign0001");
        assert_eq!(rows[1].url, "https://example.com/b");
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input("/nonexistent/input.csv").is_err());
    }

    #[tokio::test]
    async fn test_write_output_header_order() {
        let fetcher = StubFetcher::with_page("https://example.com/a", "Title", "Some body text.");
        let (lexicon, stop_words) = fixtures();
        let rows = vec![row("1", "https://example.com/a")];
        let outcome = run(&fetcher, &rows, &lexicon, &stop_words).await;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");
        write_output(&path, &outcome.records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "URL_ID,URL,Positive Score,Negative Score,Polarity Score,Subjectivity Score,\
             Avg Sentence Length,Percentage Complex Words,Fog Index,Avg Words Per Sentence,\
             Complex Word Count,Word Count,Syllables Per Word,Personal Pronouns,Avg Word Length"
        );
    }

    #[tokio::test]
    async fn test_syllable_cell_is_json() {
        let fetcher = StubFetcher::with_page("https://example.com/a", "Title", "Body");
        let (lexicon, stop_words) = fixtures();
        let rows = vec![row("1", "https://example.com/a")];
        let outcome = run(&fetcher, &rows, &lexicon, &stop_words).await;

        let json = outcome.records[0].syllables_per_word.to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        // "title" gains the -le correction, "body" has two vowel groups
        assert_eq!(parsed["Title"], 3);
        assert_eq!(parsed["Body"], 2);
    }
}
