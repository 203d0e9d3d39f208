//! Token normalization: lowercase, then keep `a`-`z` only.

/// Normalize a raw whitespace-delimited token into a tag candidate.
///
/// Lowercases the token (Unicode case folding), then strips every character
/// outside `a`-`z`. Digits, punctuation, and non-ASCII content vanish:
/// `"don't"` becomes `"dont"`, `"123"` becomes `""`.
pub fn normalize_token(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}
