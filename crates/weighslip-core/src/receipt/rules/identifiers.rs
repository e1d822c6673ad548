//! Receipt identifier extraction.

use super::patterns::{ID_NO, WEIGH_COUNT};

/// Extract the receipt identifier after an "ID-NO" label (spacing and
/// case tolerant): an alphanumeric-plus-hyphen token.
pub fn extract_id_no(text: &str) -> Option<String> {
    ID_NO
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Extract the weighing counter (계량횟수): a run of at least three
/// digits, kept as a string to preserve leading zeros.
pub fn extract_weigh_count(text: &str) -> Option<String> {
    WEIGH_COUNT
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_id_no() {
        assert_eq!(
            extract_id_no("ID-NO:2026-0202-0016\n"),
            Some("2026-0202-0016".to_string())
        );
    }

    #[test]
    fn test_id_no_lowercase() {
        assert_eq!(
            extract_id_no("id-no:A-1201\n"),
            Some("A-1201".to_string())
        );
    }

    #[test]
    fn test_id_no_absent() {
        assert_eq!(extract_id_no("계량증명서\n"), None);
    }

    #[test]
    fn test_weigh_count_preserves_leading_zeros() {
        assert_eq!(
            extract_weigh_count("계량횟수:002961\n"),
            Some("002961".to_string())
        );
    }

    #[test]
    fn test_weigh_count_without_colon() {
        assert_eq!(
            extract_weigh_count("계량횟수031\n"),
            Some("031".to_string())
        );
    }

    #[test]
    fn test_weigh_count_requires_three_digits() {
        assert_eq!(extract_weigh_count("계량횟수:12\n"), None);
    }
}
