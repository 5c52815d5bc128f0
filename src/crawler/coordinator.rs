//! Crawl orchestration
//!
//! One linear pass: fetch the root page, discover article links, then
//! fetch and process each article strictly in sequence. Any failure at any
//! step unwinds the whole run; nothing is retried and no partial export is
//! written.

use crate::config::Config;
use crate::crawler::discovery::discover_articles;
use crate::crawler::extractor::Extractor;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::output::{export_records, ArticleRecord};
use crate::text::{normalize, tokenize, WordTally};
use crate::url::{LinkFilter, SiteScope};
use crate::{ConfigError, SiftError};
use scraper::Html;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Characters of article text kept in an export record
const RECORD_CONTENT_LIMIT: usize = 500;

/// Which aggregation a crawl performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlMode {
    /// Tally word frequencies across all articles
    WordCounts,
    /// Collect records and write the export files
    Export,
}

/// What a crawl run produced
#[derive(Debug)]
pub enum CrawlReport {
    WordCounts {
        /// Number of articles fetched
        articles: usize,
        /// `(token, count)` pairs, most frequent first
        top: Vec<(String, usize)>,
    },
    Export {
        /// Number of records extracted
        articles: usize,
        /// Export files written (empty when nothing was discovered)
        files: Vec<PathBuf>,
    },
}

/// Runs a complete crawl
///
/// # Pipeline
///
/// 1. Derive the site scope and compile the link filter
/// 2. Build the HTTP client (scoped to this run)
/// 3. Fetch the root page and discover article links
/// 4. Fetch each article in sequence, extracting content (and title in
///    export mode)
/// 5. Aggregate: word tally, or record list handed to the exporters
///
/// # Arguments
///
/// * `config` - The validated configuration
/// * `mode` - Which aggregation to perform
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(SiftError)` - The first failure encountered; the run stops there
pub async fn run_crawl(config: &Config, mode: CrawlMode) -> Result<CrawlReport, SiftError> {
    let scope = SiteScope::from_root_url(&config.site.root_url)?;
    let filter = LinkFilter::new(&config.site.link_pattern)
        .map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;
    let extractor = Extractor::new(&config.site.content_selector, &config.site.title_selector)?;
    let client = build_http_client(&config.fetch)?;

    let started = Instant::now();

    tracing::info!("Fetching root page {}", scope.root_url());
    let root_html = fetch_page(&client, scope.root_url().as_str()).await?;

    let articles = {
        let document = Html::parse_document(&root_html);
        discover_articles(&document, &scope, &filter)
    };
    tracing::info!("Discovered {} article links", articles.len());

    let report = match mode {
        CrawlMode::WordCounts => {
            let mut tally = WordTally::new();

            for url in &articles {
                println!("post_url: {}", url);
                let html = fetch_page(&client, url).await?;
                let document = Html::parse_document(&html);
                let content = extractor.extract_content(&document, url)?;
                tally.add_tokens(tokenize(&normalize(&content)));
            }

            tracing::info!("Tallied {} distinct tokens", tally.len());
            CrawlReport::WordCounts {
                articles: articles.len(),
                top: tally.top(config.report.top_words),
            }
        }
        CrawlMode::Export => {
            let mut records = Vec::with_capacity(articles.len());

            for url in &articles {
                println!("post_url: {}", url);
                let html = fetch_page(&client, url).await?;
                let document = Html::parse_document(&html);
                let title = extractor.extract_title(&document, url)?;
                let content = extractor.extract_content(&document, url)?;
                records.push(ArticleRecord {
                    url: url.clone(),
                    title,
                    content: content.chars().take(RECORD_CONTENT_LIMIT).collect(),
                });
            }

            let files = export_records(&records, Path::new(&config.output.directory))?;
            CrawlReport::Export {
                articles: records.len(),
                files,
            }
        }
    };

    println!(
        "Entire run took {:.2} seconds",
        started.elapsed().as_secs_f64()
    );

    Ok(report)
}
