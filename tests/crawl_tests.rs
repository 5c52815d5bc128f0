//! End-to-end crawl tests
//!
//! These tests use wiremock to stand up a mock site and exercise the full
//! pipeline: discovery on the root page, sequential article fetches,
//! extraction, and aggregation or export.

use pagesift::config::{Config, FetchConfig, OutputConfig, ReportConfig, SiteConfig};
use pagesift::crawler::{run_crawl, CrawlMode, CrawlReport};
use pagesift::{ArticleRecord, SiftError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the mock server
fn create_test_config(base_url: &str, output_dir: &str) -> Config {
    Config {
        site: SiteConfig {
            root_url: base_url.to_string(),
            content_selector: "div.entry-content".to_string(),
            title_selector: "h1.entry-title".to_string(),
            link_pattern: r"^/(?P<year>\d{4})/(?P<month>\d{2})/(?P<day>\d{2})/(?P<slug>[\w-]+)/$"
                .to_string(),
        },
        fetch: FetchConfig {
            timeout_secs: 5,
            user_agent: "pagesift-test/0.1".to_string(),
        },
        report: ReportConfig { top_words: 10 },
        output: OutputConfig {
            directory: output_dir.to_string(),
        },
    }
}

/// Mounts an article page with the standard title/content containers
async fn mount_article(server: &MockServer, route: &str, title: &str, content: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <h1 class="entry-title">{}</h1>
                <div class="entry-content">{}</div>
            </body></html>"#,
            title, content
        )))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_word_count_crawl() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    // Root page: two articles (one linked twice), one offsite link, one
    // non-matching local link
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{base}/2020/05/11/first-post/">First</a>
                <a href="{base}/2020/05/11/first-post/">First again</a>
                <a href="{base}/2021/01/02/second-post/">Second</a>
                <a href="https://other.com/2020/05/11/elsewhere/">Offsite</a>
                <a href="{base}/about/">About</a>
            </body></html>"#,
            base = base_url
        )))
        .mount(&server)
        .await;

    mount_article(&server, "/2020/05/11/first-post/", "First", "alpha alpha beta.").await;
    mount_article(&server, "/2021/01/02/second-post/", "Second", "alpha beta, gamma").await;

    let config = create_test_config(&base_url, ".");
    let report = run_crawl(&config, CrawlMode::WordCounts)
        .await
        .expect("crawl failed");

    match report {
        CrawlReport::WordCounts { articles, top } => {
            // Duplicate and offsite/non-matching links are excluded
            assert_eq!(articles, 2);
            assert_eq!(
                top,
                vec![
                    ("alpha".to_string(), 3),
                    ("beta".to_string(), 2),
                    ("gamma".to_string(), 1)
                ]
            );
        }
        other => panic!("expected word counts, got {:?}", other),
    }
}

#[tokio::test]
async fn test_export_crawl_writes_all_formats() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{base}/2020/05/11/first-post/">First</a>
            </body></html>"#,
            base = base_url
        )))
        .mount(&server)
        .await;

    mount_article(&server, "/2020/05/11/first-post/", "First Post", "Body text").await;

    let config = create_test_config(&base_url, dir.path().to_str().unwrap());
    let report = run_crawl(&config, CrawlMode::Export)
        .await
        .expect("crawl failed");

    match report {
        CrawlReport::Export { articles, files } => {
            assert_eq!(articles, 1);
            assert_eq!(files.len(), 3);
        }
        other => panic!("expected export report, got {:?}", other),
    }

    // JSON round-trips to the extracted record
    let json = std::fs::read_to_string(dir.path().join("data.json")).unwrap();
    let records: Vec<ArticleRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].url,
        format!("{}/2020/05/11/first-post/", base_url)
    );
    assert_eq!(records[0].title, "First Post");
    assert!(records[0].content.contains("Body text"));

    // CSV carries the stable header and one data row
    let csv = std::fs::read_to_string(dir.path().join("data.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("url,title,content"));
    assert_eq!(lines.count(), 1);

    // Spreadsheet is a zip container
    let xlsx = std::fs::read(dir.path().join("data.xlsx")).unwrap();
    assert!(xlsx.starts_with(b"PK"));
}

#[tokio::test]
async fn test_export_truncates_content_to_500_chars() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><a href="{base}/2020/05/11/long-post/">Long</a></body></html>"#,
            base = base_url
        )))
        .mount(&server)
        .await;

    let long_body = "x".repeat(2000);
    mount_article(&server, "/2020/05/11/long-post/", "Long", &long_body).await;

    let config = create_test_config(&base_url, dir.path().to_str().unwrap());
    run_crawl(&config, CrawlMode::Export).await.expect("crawl failed");

    let json = std::fs::read_to_string(dir.path().join("data.json")).unwrap();
    let records: Vec<ArticleRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records[0].content.chars().count(), 500);
}

#[tokio::test]
async fn test_fail_fast_on_broken_article() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{base}/2020/05/11/good-post/">Good</a>
                <a href="{base}/2020/05/12/broken-post/">Broken</a>
            </body></html>"#,
            base = base_url
        )))
        .mount(&server)
        .await;

    mount_article(&server, "/2020/05/11/good-post/", "Good", "fine").await;

    Mock::given(method("GET"))
        .and(path("/2020/05/12/broken-post/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = create_test_config(&base_url, dir.path().to_str().unwrap());
    let result = run_crawl(&config, CrawlMode::Export).await;

    assert!(matches!(
        result,
        Err(SiftError::HttpStatus { status: 500, .. })
    ));

    // No partial export: nothing is written when any article fails
    assert!(!dir.path().join("data.json").exists());
    assert!(!dir.path().join("data.csv").exists());
    assert!(!dir.path().join("data.xlsx").exists());
}

#[tokio::test]
async fn test_fail_fast_on_missing_title() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><a href="{base}/2020/05/11/untitled/">Untitled</a></body></html>"#,
            base = base_url
        )))
        .mount(&server)
        .await;

    // Content present, title container absent
    Mock::given(method("GET"))
        .and(path("/2020/05/11/untitled/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><div class="entry-content">body</div></body></html>"#,
        ))
        .mount(&server)
        .await;

    let config = create_test_config(&base_url, dir.path().to_str().unwrap());
    let result = run_crawl(&config, CrawlMode::Export).await;

    assert!(matches!(result, Err(SiftError::MissingElement { .. })));
    assert!(!dir.path().join("data.json").exists());
}

#[tokio::test]
async fn test_fetch_timeout_aborts_run() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><a href="{base}/2020/05/11/slow-post/">Slow</a></body></html>"#,
            base = base_url
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/2020/05/11/slow-post/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html></html>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = create_test_config(&base_url, ".");
    config.fetch.timeout_secs = 1;

    let result = run_crawl(&config, CrawlMode::WordCounts).await;
    assert!(matches!(result, Err(SiftError::Timeout { .. })));
}

#[tokio::test]
async fn test_no_matching_links_exports_nothing() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{base}/about/">About</a>
                <a href="https://other.com/2020/05/11/elsewhere/">Offsite</a>
            </body></html>"#,
            base = base_url
        )))
        .mount(&server)
        .await;

    let config = create_test_config(&base_url, dir.path().to_str().unwrap());
    let report = run_crawl(&config, CrawlMode::Export)
        .await
        .expect("crawl failed");

    match report {
        CrawlReport::Export { articles, files } => {
            assert_eq!(articles, 0);
            assert!(files.is_empty());
        }
        other => panic!("expected export report, got {:?}", other),
    }

    assert!(!dir.path().join("data.json").exists());
    assert!(!dir.path().join("data.csv").exists());
    assert!(!dir.path().join("data.xlsx").exists());
}

#[tokio::test]
async fn test_root_fetch_failure_aborts_run() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = create_test_config(&base_url, ".");
    let result = run_crawl(&config, CrawlMode::WordCounts).await;

    assert!(matches!(
        result,
        Err(SiftError::HttpStatus { status: 404, .. })
    ));
}
