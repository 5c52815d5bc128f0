use serde::{Deserialize, Serialize};

/// One extracted article
///
/// Field declaration order is the export column order for every format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Absolute article URL
    pub url: String,

    /// Extracted title text
    pub title: String,

    /// First 500 characters of the extracted article body
    pub content: String,
}
