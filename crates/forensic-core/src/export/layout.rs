//! Row layout for fixed-width text.

/// Split text into rows of at most `columns` characters.
///
/// Every `\n`-delimited line yields at least one row, so blank lines keep
/// their vertical space. Long lines wrap at the last space that fits; a
/// word longer than a whole row is broken mid-word.
pub fn layout_lines(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        let mut start = 0;

        while chars.len() - start > columns {
            let window = &chars[start..=start + columns];
            match window.iter().rposition(|c| *c == ' ') {
                Some(idx) if idx > 0 => {
                    let row: String = window[..idx].iter().collect();
                    rows.push(row.trim_end().to_string());
                    start += idx + 1;
                }
                _ => {
                    rows.push(window[..columns].iter().collect());
                    start += columns;
                }
            }
        }

        // Short lines, and the tail of wrapped ones. A wrapped line that
        // ended exactly on a row boundary adds nothing.
        if start == 0 || start < chars.len() {
            rows.push(chars[start..].iter().collect());
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_map_one_to_one() {
        let text = "Summary\n\nObservations\nDamage Assessment";
        let rows = layout_lines(text, 74);
        assert_eq!(rows, vec!["Summary", "", "Observations", "Damage Assessment"]);
    }

    #[test]
    fn test_trailing_newline_adds_blank_row() {
        assert_eq!(layout_lines("a\n", 10), vec!["a", ""]);
        assert_eq!(layout_lines("", 10), vec![""]);
    }

    #[test]
    fn test_long_line_wraps_at_spaces() {
        let rows = layout_lines("the quick brown fox jumps", 10);
        assert_eq!(rows, vec!["the quick", "brown fox", "jumps"]);
        assert!(rows.iter().all(|r| r.chars().count() <= 10));
    }

    #[test]
    fn test_space_exactly_at_boundary() {
        assert_eq!(layout_lines("abcde fghij", 5), vec!["abcde", "fghij"]);
    }

    #[test]
    fn test_overlong_word_is_hard_broken() {
        let rows = layout_lines("abcdefghijkl mn", 5);
        assert_eq!(rows, vec!["abcde", "fghij", "kl mn"]);
    }

    #[test]
    fn test_large_single_line_wraps_every_word() {
        let words = 200_000;
        let text = "word ".repeat(words);
        let rows = layout_lines(&text, 74);

        // Fifteen words fill exactly 74 columns.
        assert!(rows.iter().all(|r| r.chars().count() <= 74));
        assert_eq!(rows[0].chars().count(), 74);
        let total: usize = rows.iter().map(|r| r.split_whitespace().count()).sum();
        assert_eq!(total, words);
        assert_eq!(rows.len(), words.div_ceil(15));
    }

    #[test]
    fn test_hard_break_on_exact_boundary_adds_no_blank_row() {
        assert_eq!(layout_lines("abcdefghij", 5), vec!["abcde", "fghij"]);
    }

    #[test]
    fn test_zero_columns_is_clamped() {
        assert_eq!(layout_lines("ab", 0), vec!["a", "b"]);
    }
}
