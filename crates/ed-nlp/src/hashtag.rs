use once_cell::sync::Lazy;
use regex::Regex;

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

/// First `#token` in `text`, without the `#`.
///
/// Tokens are one or more word characters (unicode-aware, so Hangul counts).
/// The text is taken verbatim; nothing validates it against known categories.
pub fn first_hashtag(text: &str) -> Option<&str> {
    HASHTAG
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}
