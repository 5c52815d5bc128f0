use regex::Regex;
use std::collections::HashMap;

/// Result of matching a candidate path against the article pattern
///
/// The named capture groups are surfaced for callers that want the date or
/// slug components; the crawler itself only consumes `matched`.
#[derive(Debug, Clone, Default)]
pub struct PathMatch {
    pub matched: bool,
    pub captures: Option<HashMap<String, String>>,
}

/// Tests discovered link paths against the configured article pattern
///
/// Matching is anchored at the start of the path and succeeds on a prefix:
/// the path may continue past the end of the match.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    pattern: Regex,
}

impl LinkFilter {
    /// Compiles the configured pattern
    ///
    /// The pattern is wrapped in an outer `^(?:...)` group so matching is
    /// anchored at the start of the path however the pattern is written; a
    /// leading `^` inside the pattern stays harmless.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The configured article path pattern
    ///
    /// # Returns
    ///
    /// * `Ok(LinkFilter)` - Pattern compiled
    /// * `Err(regex::Error)` - Pattern failed to compile
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{})", pattern);
        Ok(Self {
            pattern: Regex::new(&anchored)?,
        })
    }

    /// Matches a path against the pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use pagesift::url::LinkFilter;
    ///
    /// let filter =
    ///     LinkFilter::new(r"/(?P<year>\d{4})/(?P<month>\d{2})/(?P<day>\d{2})/(?P<slug>[\w-]+)/")
    ///         .unwrap();
    ///
    /// let result = filter.match_path("/2020/05/11/some-post/");
    /// assert!(result.matched);
    /// assert_eq!(result.captures.unwrap()["year"], "2020");
    ///
    /// assert!(!filter.match_path("/about/").matched);
    /// ```
    pub fn match_path(&self, path: &str) -> PathMatch {
        match self.pattern.captures(path) {
            Some(caps) => {
                let named: HashMap<String, String> = self
                    .pattern
                    .capture_names()
                    .flatten()
                    .filter_map(|name| {
                        caps.name(name)
                            .map(|m| (name.to_string(), m.as_str().to_string()))
                    })
                    .collect();
                PathMatch {
                    matched: true,
                    captures: Some(named),
                }
            }
            None => PathMatch {
                matched: false,
                captures: None,
            },
        }
    }

    /// Convenience boolean form of [`match_path`](Self::match_path)
    pub fn is_match(&self, path: &str) -> bool {
        self.match_path(path).matched
    }
}
