use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use textgauge_core::{
    FetchConfig, HttpFetcher, SelectorConfig, SentimentLexicon, StopWordSet, pipeline, stop_word_files,
};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fetch a list of article URLs and score each one on readability and sentiment
#[derive(Parser, Debug)]
#[command(name = "textgauge")]
#[command(author = "Textgauge Contributors")]
#[command(version = VERSION)]
#[command(about = "Score web articles on readability and sentiment", long_about = None)]
struct Args {
    /// Input CSV with URL_ID and URL columns
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "output.csv", value_name = "FILE")]
    output: PathBuf,

    /// Directory of stop-word lists (*.txt, one word per line)
    #[arg(long, value_name = "DIR")]
    stopwords: PathBuf,

    /// Positive sentiment word list (whitespace-separated words)
    #[arg(long, value_name = "FILE")]
    positive: PathBuf,

    /// Negative sentiment word list (whitespace-separated words)
    #[arg(long, value_name = "FILE")]
    negative: PathBuf,

    /// CSS selector for the article heading
    #[arg(long, default_value = "h1.entry-title", value_name = "SELECTOR")]
    heading_selector: String,

    /// CSS selector for the article content container
    #[arg(long, default_value = "div.td-post-content", value_name = "SELECTOR")]
    content_selector: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable step-by-step progress output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    if args.verbose {
        echo::print_step(1, 4, "Loading lexicons");
    }

    let stop_files = stop_word_files(&args.stopwords)
        .with_context(|| format!("Failed to read stop-word directory: {}", args.stopwords.display()))?;
    if stop_files.is_empty() {
        anyhow::bail!("No .txt stop-word lists found in {}", args.stopwords.display());
    }

    let stop_words = StopWordSet::load(&stop_files).context("Failed to load stop-word lists")?;
    let lexicon = SentimentLexicon::load(&args.positive, &args.negative, &stop_words)
        .context("Failed to load sentiment word lists")?;

    if args.verbose {
        echo::print_info(&format!(
            "{} stop words from {} files",
            stop_words.len(),
            stop_files.len()
        ));
    }

    if args.verbose {
        echo::print_step(2, 4, "Reading input rows");
    }

    let rows = pipeline::read_input(&args.input)
        .with_context(|| format!("Failed to read input CSV: {}", args.input.display()))?;

    if args.verbose {
        echo::print_info(&format!("{} URLs queued", rows.len()));
    }

    if args.verbose {
        echo::print_step(3, 4, "Fetching and analyzing");
    }

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
    };
    let selectors = SelectorConfig { heading: args.heading_selector, content: args.content_selector };

    // The fetcher (and its connection pool) lives for this block only and
    // is released when `run` returns, whatever happened inside the loop.
    let outcome = {
        let fetcher = HttpFetcher::new(fetch_config, selectors).context("Failed to build HTTP client")?;
        pipeline::run(&fetcher, &rows, &lexicon, &stop_words).await
    };

    for skip in &outcome.skipped {
        echo::print_warning(&format!(
            "Error processing URL {} ({}): {}",
            skip.url, skip.url_id, skip.reason
        ));
    }

    if args.verbose {
        echo::print_step(4, 4, "Writing output");
    }

    pipeline::write_output(&args.output, &outcome.records)
        .with_context(|| format!("Failed to write output CSV: {}", args.output.display()))?;

    echo::print_success(&format!(
        "Analysis complete. {} rows written to {} ({} skipped)",
        outcome.records.len(),
        args.output.display(),
        outcome.skipped.len()
    ));

    Ok(())
}
