//! Line normalization for the text layer.

/// Split text into trimmed, non-empty lines, preserving their order.
///
/// Handles `\n`, `\r\n` and bare `\r` terminators.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_drops_blank_lines_and_trims() {
        let text = "\n  Alice \n\n\t\nSmith\n   \n";
        assert_eq!(normalize_lines(text), vec!["Alice", "Smith"]);
    }

    #[test]
    fn test_mixed_terminators() {
        let text = "one\r\ntwo\rthree\nfour";
        assert_eq!(normalize_lines(text), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_preserves_order() {
        let text = "c\n\nb\n a \n";
        assert_eq!(normalize_lines(text), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines(" \n\r\n\t").is_empty());
    }

    #[test]
    fn test_no_empty_entries_survive() {
        let text = "Назарбаев Университеті\n \u{a0}\n01.09.2023\n";
        let lines = normalize_lines(text);
        assert!(lines.iter().all(|l| !l.trim().is_empty()));
        assert_eq!(lines, vec!["Назарбаев Университеті", "01.09.2023"]);
    }
}
