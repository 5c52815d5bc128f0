use serde::Deserialize;

/// Main configuration structure for pagesift
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Root page whose links are harvested
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// CSS selector for the article body container
    #[serde(rename = "content-selector", default = "default_content_selector")]
    pub content_selector: String,

    /// CSS selector for the article title container
    #[serde(rename = "title-selector", default = "default_title_selector")]
    pub title_selector: String,

    /// Regex matched against the path of each same-host link, anchored at
    /// the start of the path
    #[serde(rename = "link-pattern", default = "default_link_pattern")]
    pub link_pattern: String,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request total timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent on every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Word-frequency report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// How many entries the word-frequency report prints
    #[serde(rename = "top-words", default = "default_top_words")]
    pub top_words: usize,
}

/// Export output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the `data.*` export files are written into
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

fn default_content_selector() -> String {
    "div.entry-content".to_string()
}

fn default_title_selector() -> String {
    "h1.entry-title".to_string()
}

fn default_link_pattern() -> String {
    r"^/(?P<year>\d{4})/(?P<month>\d{2})/(?P<day>\d{2})/(?P<slug>[\w-]+)/$".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("pagesift/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_top_words() -> usize {
    10
}

fn default_output_directory() -> String {
    ".".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: default_top_words(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}
