//! Stop-word and sentiment word list loading.
//!
//! This module provides the two immutable lexicon values the metrics
//! pipeline depends on: [`StopWordSet`], a union of one or more stop-word
//! list files, and [`SentimentLexicon`], positive/negative word sets
//! filtered against the stop words.
//!
//! A missing or unreadable list file is fatal: the lexicons are a startup
//! precondition and there is no partial fallback.
//!
//! # Example
//!
//! ```rust,no_run
//! use textgauge_core::{SentimentLexicon, StopWordSet};
//!
//! # fn main() -> textgauge_core::Result<()> {
//! let stop_words = StopWordSet::load(&["stopwords/generic.txt", "stopwords/names.txt"])?;
//! let lexicon = SentimentLexicon::load("positive-words.txt", "negative-words.txt", &stop_words)?;
//! assert!(!lexicon.is_empty());
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, TextGaugeError};

/// Union of one or more stop-word list files.
///
/// Entries are stored verbatim as they appear in the source files (only
/// trailing whitespace trimmed). Two membership probes exist because the
/// pipeline needs both: [`StopWordSet::matches`] lowercases the probe word
/// before lookup (used when stripping stop words from article text), while
/// [`StopWordSet::contains`] compares verbatim (used when filtering the
/// sentiment lists). The asymmetry is deliberate: scoring depends on it.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Loads and merges stop-word lists, one word per line.
    ///
    /// Lines are trimmed of trailing whitespace and inserted verbatim.
    /// Any unreadable file aborts the load.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut words = HashSet::new();

        for path in paths {
            let path = path.as_ref();
            let content = fs::read_to_string(path)
                .map_err(|source| TextGaugeError::LexiconFile { path: path.to_path_buf(), source })?;

            for line in content.lines() {
                let word = line.trim_end();
                if !word.is_empty() {
                    words.insert(word.to_string());
                }
            }
        }

        Ok(Self { words })
    }

    /// Builds a set from in-memory words. Mostly useful for tests.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    /// Whether the lowercased form of `word` is a stop word.
    pub fn matches(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Whether `word` is in the set exactly as given.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Positive and negative sentiment word sets.
///
/// Words are whitespace-split from the source files and any word present
/// verbatim in the stop-word set is dropped. Lookups are verbatim
/// (case-sensitive): a capitalized article word does not match a lowercase
/// lexicon entry.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentLexicon {
    /// Loads the positive and negative word lists, filtering out stop words.
    pub fn load<P: AsRef<Path>>(positive_path: P, negative_path: P, stop_words: &StopWordSet) -> Result<Self> {
        let positive = Self::load_word_file(positive_path.as_ref(), stop_words)?;
        let negative = Self::load_word_file(negative_path.as_ref(), stop_words)?;

        Ok(Self { positive, negative })
    }

    /// Builds a lexicon from in-memory word lists. Mostly useful for tests.
    pub fn from_words<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    fn load_word_file(path: &Path, stop_words: &StopWordSet) -> Result<HashSet<String>> {
        let content = fs::read_to_string(path)
            .map_err(|source| TextGaugeError::LexiconFile { path: path.to_path_buf(), source })?;

        Ok(content
            .split_whitespace()
            .filter(|word| !stop_words.contains(word))
            .map(str::to_string)
            .collect())
    }

    /// Whether `word` is a positive sentiment word (verbatim comparison).
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Whether `word` is a negative sentiment word (verbatim comparison).
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Whether both word sets are empty.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Enumerates the `.txt` stop-word lists in a directory, sorted by name.
///
/// Accepting a directory keeps the list of stop-word files external
/// configuration instead of a hard-coded set of paths.
pub fn stop_word_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    files.sort();
    Ok(files)
}
