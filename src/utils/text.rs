use unicode_normalization::UnicodeNormalization;

/// Normalise a typed answer for comparison
///
/// Lowercases, strips diacritics (NFD decomposition without combining
/// marks) and trims surrounding whitespace, so `" Zürich "` and `"zurich"`
/// compare equal.
pub fn normalize(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare a typed answer against the expected one, ignoring case and accents
pub fn fuzzy_match(input: &str, expected: &str) -> bool {
    normalize(input) == normalize(expected)
}
