//! Slug derivation for post titles and category names.

/// Turns a display string into a URL-safe identifier.
///
/// Lowercases the input, drops every character that is not an ASCII word
/// character, whitespace or hyphen, then collapses each whitespace run into a
/// single hyphen. Leading and trailing whitespace never produces hyphens.
/// The function is pure; callers apply it whenever a title or name is set.
pub fn slugify(source: &str) -> String {
    let cleaned: String = source
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}
