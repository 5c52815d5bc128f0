//! Article content extraction
//!
//! The two CSS selectors are injected from configuration, so pointing the
//! scraper at a different site is a config change rather than a code
//! change. The first element matching a selector wins; a page with no
//! match is a fatal error, not an empty string.

use crate::{ConfigError, SiftError};
use scraper::{Html, Selector};

/// Extracts article text and titles via configured CSS selectors
#[derive(Debug, Clone)]
pub struct Extractor {
    content_selector: Selector,
    content_selector_str: String,
    title_selector: Selector,
    title_selector_str: String,
}

impl Extractor {
    /// Parses both selectors once, up front
    ///
    /// # Arguments
    ///
    /// * `content_selector` - Selector for the article body container
    /// * `title_selector` - Selector for the article title container
    ///
    /// # Returns
    ///
    /// * `Ok(Extractor)` - Both selectors parsed
    /// * `Err(ConfigError)` - A selector failed to parse
    pub fn new(content_selector: &str, title_selector: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            content_selector: parse_selector(content_selector)?,
            content_selector_str: content_selector.to_string(),
            title_selector: parse_selector(title_selector)?,
            title_selector_str: title_selector.to_string(),
        })
    }

    /// Text of the first element matching the content selector
    ///
    /// Child element text is concatenated in document order, untrimmed.
    pub fn extract_content(&self, document: &Html, url: &str) -> Result<String, SiftError> {
        first_text(document, &self.content_selector).ok_or_else(|| SiftError::MissingElement {
            url: url.to_string(),
            selector: self.content_selector_str.clone(),
        })
    }

    /// Trimmed text of the first element matching the title selector
    pub fn extract_title(&self, document: &Html, url: &str) -> Result<String, SiftError> {
        first_text(document, &self.title_selector)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| SiftError::MissingElement {
                url: url.to_string(),
                selector: self.title_selector_str.clone(),
            })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", selector, e)))
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
