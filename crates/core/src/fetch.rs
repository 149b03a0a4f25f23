//! Article fetching over HTTP.
//!
//! [`HttpFetcher`] is the HTTP implementation of the
//! [`FetchArticle`](crate::pipeline::FetchArticle) capability: it downloads
//! a page and runs selector extraction on it. One `reqwest::Client` is
//! built up front and reused for every row of the run; dropping the fetcher
//! releases the connection pool.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::extract::{ArticleContent, SelectorConfig, extract_article};
use crate::pipeline::FetchArticle;
use crate::{Result, TextGaugeError};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Textgauge/0.1; +https://github.com/stormlightlabs/textgauge)"
                .to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and uses
/// a browser-like User-Agent for better compatibility.
pub async fn fetch_html(url: &str, config: &FetchConfig) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(TextGaugeError::HttpError)?;

    fetch_html_with(&client, url, config).await
}

async fn fetch_html_with(client: &Client, url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| TextGaugeError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(TextGaugeError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                TextGaugeError::Timeout { timeout: config.timeout }
            } else {
                TextGaugeError::HttpError(e)
            }
        })?;

    let content = response.text().await?;

    Ok(content)
}

/// HTTP-backed article fetcher.
///
/// Holds the selectors used for extraction and a single long-lived client
/// shared across all fetches of a run.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
    selectors: SelectorConfig,
}

impl HttpFetcher {
    /// Builds the fetcher and its underlying HTTP client.
    pub fn new(config: FetchConfig, selectors: SelectorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(TextGaugeError::HttpError)?;

        Ok(Self { client, config, selectors })
    }

    /// The selectors this fetcher extracts with.
    pub fn selectors(&self) -> &SelectorConfig {
        &self.selectors
    }
}

impl FetchArticle for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<ArticleContent> {
        let html = fetch_html_with(&self.client, url, &self.config).await?;
        extract_article(&html, &self.selectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Textgauge"));
    }

    #[test]
    fn test_fetch_invalid_url() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_html("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(TextGaugeError::InvalidUrl(_))));
    }

    #[test]
    fn test_http_fetcher_builds() {
        let fetcher = HttpFetcher::new(FetchConfig::default(), SelectorConfig::default()).unwrap();
        assert_eq!(fetcher.selectors().heading, "h1.entry-title");
    }

    #[test]
    fn test_url_validation() {
        assert!(Url::parse("http://example.com").is_ok());
        assert!(Url::parse("https://example.com").is_ok());
        assert!(Url::parse("example.com").is_err()); // Missing scheme
    }
}
