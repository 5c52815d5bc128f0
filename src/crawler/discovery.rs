//! Article link discovery
//!
//! Runs exactly once per crawl, on the root page. Links found on article
//! pages are never followed.

use crate::url::{LinkFilter, SiteScope};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Collects the href attribute of every anchor, in document order
pub fn extract_hrefs(document: &Html) -> Vec<String> {
    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}

/// Discovers article URLs on the root page
///
/// Each href must parse as an absolute URL, point at the root host, and
/// carry a path matching the article pattern. Matching paths are rebuilt as
/// `origin + path`, which drops any query string or fragment. The result is
/// deduplicated by exact URL equality, keeping first-seen document order.
///
/// Hrefs that fail to parse as absolute URLs (including site-relative
/// paths, which have no host) are skipped.
pub fn discover_articles(document: &Html, scope: &SiteScope, filter: &LinkFilter) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut articles = Vec::new();

    for href in extract_hrefs(document) {
        let Ok(parsed) = Url::parse(&href) else {
            continue;
        };

        if !scope.is_local(&parsed) {
            continue;
        }

        let path = parsed.path();
        if !filter.match_path(path).matched {
            continue;
        }

        let article = scope.absolute(path);
        if seen.insert(article.clone()) {
            articles.push(article);
        }
    }

    articles
}
