/// Substitution table applied in order before tokenization
///
/// Only these sequences are handled; the normalizer is deliberately narrow
/// and not locale-aware.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\n", " "),
    ("\u{a0}", " "),
    ("\u{2014}", ""), // em dash
    ("\u{2013}", ""), // en dash
    ("\u{201c}", ""), // left smart quote
    ("\u{201d}", ""), // right smart quote
    ("\"", ""),
    ("|", ""),
    (".", ""),
    ("?", ""),
    (",", ""),
    ("'ve", " have"),
];

/// Strips punctuation noise from extracted article text
///
/// Newlines and non-breaking spaces become spaces, dashes, quotes, pipes,
/// and sentence punctuation are removed, and the contraction suffix `'ve`
/// is expanded to ` have`. Leading and trailing whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use pagesift::text::normalize;
///
/// assert_eq!(normalize("Hello, world.\n"), "Hello world");
/// assert_eq!(normalize("we've arrived"), "we have arrived");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in SUBSTITUTIONS {
        out = out.replace(from, to);
    }
    out.trim().to_string()
}

/// Splits normalized text into tokens on whitespace, dropping empties
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
