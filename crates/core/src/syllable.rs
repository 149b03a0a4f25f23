//! Heuristic syllable estimation.
//!
//! Two estimators coexist on purpose. [`scan_syllables`] is the quick
//! vowel-scan used to classify complex words for the fog index; its
//! trailing-`e` subtraction fires inside the scan loop, once per vowel
//! group, which is part of the heuristic and is kept as-is.
//! [`count_syllables`] is the vowel-group counter with suffix corrections
//! used to build the per-word syllable column. Both are pure functions of a
//! single word and floor their result at 1.

use regex::Regex;
use serde::{Serialize, Serializer};

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel-scan syllable estimate backing [`is_complex`].
///
/// Counts a syllable for each lowercase vowel whose predecessor is not a
/// vowel, plus one for a leading vowel. Every counted group subtracts one
/// again while the word ends in `e`. Uppercase vowels are not counted;
/// tokens are scanned exactly as they appear in the text.
pub fn scan_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return 1;
    }

    let mut count: usize = 0;
    if is_vowel(chars[0]) {
        count += 1;
    }

    let ends_in_e = chars[chars.len() - 1] == 'e';
    for i in 1..chars.len() {
        if is_vowel(chars[i]) && !is_vowel(chars[i - 1]) {
            count += 1;
            if ends_in_e {
                count -= 1;
            }
        }
    }

    if count == 0 { 1 } else { count }
}

/// A word is complex when the vowel-scan estimate reaches three syllables.
pub fn is_complex(word: &str) -> bool {
    scan_syllables(word) >= 3
}

/// `str::isupper` semantics: at least one cased character, none lowercase.
fn is_all_uppercase(word: &str) -> bool {
    let mut has_cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Vowel-group syllable count with suffix corrections.
///
/// Two-letter all-uppercase tokens short-circuit to 2 (acronym heuristic,
/// checked before any normalization). Otherwise the word is lowercased,
/// stripped of non-alphabetic characters, and scored as the number of
/// contiguous `aeiouy` runs, corrected for silent-`e`, `-le`, `-es` and
/// `-ed` endings. Never returns less than 1.
///
/// # Example
///
/// ```rust
/// use textgauge_core::syllable::count_syllables;
///
/// assert_eq!(count_syllables("beautiful"), 3);
/// assert_eq!(count_syllables("IT"), 2);
/// ```
pub fn count_syllables(word: &str) -> usize {
    if word.chars().count() == 2 && is_all_uppercase(word) {
        return 2;
    }

    let cleaned: String = word.to_lowercase().chars().filter(char::is_ascii_lowercase).collect();
    let chars: Vec<char> = cleaned.chars().collect();
    let n = chars.len();

    let mut syllables: usize = 0;
    let mut in_group = false;
    for &c in &chars {
        if is_vowel(c) {
            if !in_group {
                syllables += 1;
                in_group = true;
            }
        } else {
            in_group = false;
        }
    }

    if cleaned.ends_with('e') && n > 1 && !is_vowel(chars[n - 2]) && !cleaned.ends_with("le") {
        syllables -= 1;
    }
    if cleaned.ends_with("le") && n > 2 && !is_vowel(chars[n - 3]) {
        syllables += 1;
    }
    if cleaned.ends_with("es") && n > 2 && !is_vowel(chars[n - 3]) {
        syllables -= 1;
    } else if cleaned.ends_with("ed") && n > 2 && !is_vowel(chars[n - 3]) {
        syllables -= 1;
    }

    if syllables == 0 { 1 } else { syllables }
}

/// Per-word syllable counts keyed by distinct word.
///
/// Keys keep their first-appearance order; a repeated word overwrites the
/// stored count in place. Serializes as a JSON object so the whole mapping
/// fits in one tabular cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableMap {
    entries: Vec<(String, usize)>,
}

impl SyllableMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the count for `word`.
    pub fn insert(&mut self, word: &str, count: usize) {
        match self.entries.iter_mut().find(|(key, _)| key == word) {
            Some((_, value)) => *value = count,
            None => self.entries.push((word.to_string(), count)),
        }
    }

    /// Looks up the count for `word`.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.iter().find(|(key, _)| key == word).map(|(_, count)| *count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Renders the map as a JSON object string, preserving key order.
    pub fn to_json(&self) -> String {
        let mut out = String::from("{");
        for (i, (word, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            // serde_json handles the string escaping; encoding a string is infallible
            out.push_str(&serde_json::to_string(word).unwrap_or_else(|_| "\"\"".into()));
            out.push(':');
            out.push_str(&count.to_string());
        }
        out.push('}');
        out
    }
}

impl Serialize for SyllableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json())
    }
}

/// Runs [`count_syllables`] over every `\b\w+\b` match in `text`.
pub fn syllables_per_word(text: &str) -> SyllableMap {
    let word_regex = Regex::new(r"\b\w+\b").unwrap();
    let mut map = SyllableMap::new();
    for found in word_regex.find_iter(text) {
        let word = found.as_str();
        map.insert(word, count_syllables(word));
    }
    map
}
