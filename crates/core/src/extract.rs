//! Article title and body extraction from HTML.
//!
//! The content-fetch contract asks for a page's main heading element and
//! main content container; a page missing either cannot be scored. Lookup
//! uses CSS selectors via `scraper`, with defaults matching a common
//! WordPress newspaper theme.
//!
//! # Example
//!
//! ```rust
//! use textgauge_core::extract::{SelectorConfig, extract_article};
//!
//! let html = r#"
//!     <h1 class="entry-title">Quiet Markets</h1>
//!     <div class="td-post-content"><p>Nothing moved today.</p></div>
//! "#;
//! let article = extract_article(html, &SelectorConfig::default()).unwrap();
//! assert_eq!(article.title, "Quiet Markets");
//! ```

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::{Result, TextGaugeError};

/// Separator between title and body in the combined analysis text.
pub const TITLE_BODY_SEPARATOR: &str = "\n\n\n\n\n\n";

/// CSS selectors locating the heading and content elements of a page.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Selector for the main heading element.
    pub heading: String,
    /// Selector for the main content container.
    pub content: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { heading: "h1.entry-title".to_string(), content: "div.td-post-content".to_string() }
    }
}

/// Title and body text of one fetched article.
///
/// Ephemeral: produced per URL, discarded once metrics are computed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArticleContent {
    /// Text of the heading element.
    pub title: String,
    /// Text of the content container.
    pub body: String,
}

impl ArticleContent {
    /// Joins title and body with the standard six-newline separator.
    pub fn combined(&self) -> String {
        format!("{}{}{}", self.title, TITLE_BODY_SEPARATOR, self.body)
    }
}

/// Extracts the article title and body from an HTML page.
///
/// Fails with [`TextGaugeError::ElementNotFound`] when either selector
/// matches nothing, which the driver loop treats as a per-row skip.
pub fn extract_article(html: &str, config: &SelectorConfig) -> Result<ArticleContent> {
    let document = Html::parse_document(html);

    let title = select_text(&document, &config.heading)?;
    let body = select_text(&document, &config.content)?;

    Ok(ArticleContent { title, body })
}

fn select_text(document: &Html, selector: &str) -> Result<String> {
    let parsed = Selector::parse(selector).map_err(|e| TextGaugeError::InvalidSelector(e.to_string()))?;

    let element = document
        .select(&parsed)
        .next()
        .ok_or_else(|| TextGaugeError::ElementNotFound { selector: selector.to_string() })?;

    Ok(element_text(element))
}

/// Collects an element's text nodes, one trimmed line per node.
///
/// Approximates the rendered-text view a browser driver would return for
/// the same element: block children become separate lines.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <h1 class="entry-title">Rates Hold Steady</h1>
            <div class="td-post-content">
                <p>The committee left rates unchanged.</p>
                <p>Markets were unimpressed.</p>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_article() {
        let article = extract_article(PAGE, &SelectorConfig::default()).unwrap();
        assert_eq!(article.title, "Rates Hold Steady");
        assert!(article.body.contains("unchanged."));
        assert!(article.body.contains("unimpressed."));
    }

    #[test]
    fn test_body_paragraphs_become_lines() {
        let article = extract_article(PAGE, &SelectorConfig::default()).unwrap();
        assert_eq!(article.body, "The committee left rates unchanged.\nMarkets were unimpressed.");
    }

    #[test]
    fn test_missing_heading() {
        let html = r#"<div class="td-post-content">body only</div>"#;
        let result = extract_article(html, &SelectorConfig::default());
        assert!(matches!(result, Err(TextGaugeError::ElementNotFound { selector }) if selector.contains("entry-title")));
    }

    #[test]
    fn test_missing_content() {
        let html = r#"<h1 class="entry-title">title only</h1>"#;
        let result = extract_article(html, &SelectorConfig::default());
        assert!(matches!(result, Err(TextGaugeError::ElementNotFound { .. })));
    }

    #[test]
    fn test_custom_selectors() {
        let html = "<article><h2>Alt Title</h2><section>Alt body text.</section></article>";
        let config = SelectorConfig { heading: "h2".to_string(), content: "section".to_string() };
        let article = extract_article(html, &config).unwrap();
        assert_eq!(article.title, "Alt Title");
        assert_eq!(article.body, "Alt body text.");
    }

    #[test]
    fn test_invalid_selector() {
        let config = SelectorConfig { heading: "h1[".to_string(), ..Default::default() };
        assert!(matches!(
            extract_article(PAGE, &config),
            Err(TextGaugeError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_combined_uses_separator() {
        let article = ArticleContent { title: "T".to_string(), body: "B".to_string() };
        assert_eq!(article.combined(), "T\n\n\n\n\n\nB");
    }
}
