//! URL-safe slugs for brand and model identifiers.
//!
//! Generated IDs are persisted by the app, so the output of [`slugify`] must
//! stay stable across releases and platforms.

use unicode_normalization::UnicodeNormalization;

/// Returned when nothing slug-worthy survives normalization.
pub const FALLBACK_SLUG: &str = "unknown";

/// Convert free text to a lowercase ASCII slug.
///
/// Lowercases and trims, decomposes with NFKD and drops every non-ASCII code
/// point (which strips diacritics), then turns each run of characters outside
/// `[a-z0-9]` into a single `-`. Leading and trailing separators are removed.
/// Never returns an empty string.
///
/// ```
/// use car_catalog::slug::slugify;
///
/// assert_eq!(slugify("Mercedes-Benz"), "mercedes-benz");
/// assert_eq!(slugify("Citroën"), "citroen");
/// assert_eq!(slugify("!!!"), "unknown");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();

    let mut result = String::with_capacity(trimmed.len());
    let mut last_was_separator = false;

    // Uppercase ASCII can reappear after NFKD (e.g. from letterlike symbols);
    // it counts as a separator, not as a letter.
    for c in trimmed.nfkd().filter(char::is_ascii) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            result.push(c);
            last_was_separator = false;
        } else if !last_was_separator && !result.is_empty() {
            result.push('-');
            last_was_separator = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        result
    }
}
