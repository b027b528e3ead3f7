//! String normalization applied before any comparison.

/// Lowercase `s` and drop every character that is not alphanumeric.
///
/// Punctuation and whitespace carry no weight when matching, so
/// `"New-York"` and `"new york"` both normalize to `"newyork"`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_space() {
        assert_eq!(normalize("New York!"), "newyork");
        assert_eq!(normalize("  a-b_c.d "), "abcd");
    }

    #[test]
    fn test_keeps_digits_and_non_ascii_letters() {
        assert_eq!(normalize("Route 66"), "route66");
        assert_eq!(normalize("Zürich"), "zürich");
    }

    #[test]
    fn test_punctuation_only_is_empty() {
        assert_eq!(normalize("?!-"), "");
    }
}
