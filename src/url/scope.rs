use crate::{UrlError, UrlResult};
use url::Url;

/// The crawl boundary, derived once from the configured root URL
///
/// The lowercased host is the sole same-site criterion: scheme and port are
/// ignored, and subdomains do not match. The origin string is used to
/// rebuild absolute article URLs from matched paths.
#[derive(Debug, Clone)]
pub struct SiteScope {
    root_url: Url,
    host: String,
    origin: String,
}

impl SiteScope {
    /// Parses the root URL and derives the host and origin
    ///
    /// # Arguments
    ///
    /// * `root` - The configured root page URL
    ///
    /// # Returns
    ///
    /// * `Ok(SiteScope)` - Successfully derived scope
    /// * `Err(UrlError)` - Unparseable URL, non-http(s) scheme, or no host
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesift::url::SiteScope;
    ///
    /// let scope = SiteScope::from_root_url("https://Example.COM/archive").unwrap();
    /// assert_eq!(scope.host(), "example.com");
    /// assert_eq!(scope.origin(), "https://example.com");
    /// ```
    pub fn from_root_url(root: &str) -> UrlResult<Self> {
        let parsed =
            Url::parse(root).map_err(|e| UrlError::Parse(format!("'{}': {}", root, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(UrlError::InvalidScheme(parsed.scheme().to_string()));
        }

        let host = parsed
            .host_str()
            .ok_or(UrlError::MissingHost)?
            .to_lowercase();

        // Explicit ports are kept so the origin round-trips; default ports
        // are elided by the parser
        let origin = match parsed.port() {
            Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
            None => format!("{}://{}", parsed.scheme(), host),
        };

        Ok(Self {
            root_url: parsed,
            host,
            origin,
        })
    }

    /// The full root page URL
    pub fn root_url(&self) -> &Url {
        &self.root_url
    }

    /// The lowercased root host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The root origin (`scheme://host[:port]`, no trailing slash)
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns true if `url` points at the root host
    ///
    /// Exact host match only: scheme and port differences are ignored, and
    /// subdomains are not local.
    pub fn is_local(&self, url: &Url) -> bool {
        url.host_str()
            .map(|h| h.eq_ignore_ascii_case(&self.host))
            .unwrap_or(false)
    }

    /// Rebuilds an absolute article URL from a matched path
    ///
    /// Always origin + path, never the original (possibly relative) href,
    /// so query strings and fragments are dropped.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}
