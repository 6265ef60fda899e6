//! Hashtag normalization.

/// Normalize a comma-separated list of raw tags.
///
/// Each piece is trimmed, empty pieces are dropped, a `#` is prepended unless
/// already present, and the survivors are joined with single spaces.
///
/// ```
/// use gratitude_shared::format_hashtags;
///
/// assert_eq!(
///     format_hashtags("grateful, #husky ,  ,northeastern"),
///     "#grateful #husky #northeastern"
/// );
/// ```
pub fn format_hashtags(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| {
            if tag.starts_with('#') {
                tag.to_string()
            } else {
                format!("#{tag}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokens of an already formatted hashtag string.
pub fn hashtag_tokens(formatted: &str) -> impl Iterator<Item = &str> {
    formatted.split_whitespace()
}
