//! Text normalization for the built-in PDF fonts.
//!
//! The standard Type1 fonts only cover a Latin-1 style encoding, so report
//! text is reduced to printable ASCII before layout. This is lossy: accents
//! are stripped via compatibility decomposition, and anything without an
//! ASCII base character (dashes, smart quotes, non-Latin scripts) is dropped.

use unicode_normalization::UnicodeNormalization;

/// Reduce text to printable ASCII plus `\n`.
///
/// `\r\n` and lone `\r` become `\n`; tabs become a single space.
pub fn normalize_to_ascii(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n").replace('\t', " ");

    unified
        .nfkd()
        .filter(|c| *c == '\n' || (' '..='~').contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let text = "Summary\n\nAll (3) walls: OK! [see #4] {a\\b} ~x";
        assert_eq!(normalize_to_ascii(text), text);
    }

    #[test]
    fn test_accents_are_stripped() {
        assert_eq!(normalize_to_ascii("café"), "cafe");
        assert_eq!(normalize_to_ascii("Ünïcödé"), "Unicode");
    }

    #[test]
    fn test_punctuation_without_ascii_base_is_dropped() {
        assert_eq!(normalize_to_ascii("a — b"), "a  b");
        assert_eq!(normalize_to_ascii("\u{201c}quoted\u{201d}"), "quoted");
        assert_eq!(normalize_to_ascii("東京 tower"), " tower");
    }

    #[test]
    fn test_compatibility_forms_are_expanded() {
        assert_eq!(normalize_to_ascii("\u{fb01}ne\u{2026}"), "fine...");
        assert_eq!(normalize_to_ascii("10\u{a0}m"), "10 m");
    }

    #[test]
    fn test_line_endings_and_tabs() {
        assert_eq!(normalize_to_ascii("a\r\nb\rc\td"), "a\nb\nc d");
    }
}
