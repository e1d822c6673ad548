//! Text normalization applied before any extraction.

/// Canonicalize raw OCR text.
///
/// Line-ending variants collapse to `\n`, then every space and horizontal
/// tab is deleted outright. Removing the characters rather than squeezing
/// runs lets spaced-out labels like "총 중 량" match as "총중량". The
/// result is trimmed.
pub fn normalize(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let stripped: String = unified
        .chars()
        .filter(|c| *c != ' ' && *c != '\t')
        .collect();
    stripped.trim().to_string()
}

/// Reconstruct an integer kilogram value from a grouped digit token.
///
/// "14,080" -> 14080, "13 460" -> 13460. Digit groups are concatenated;
/// a token with no digits yields None.
pub fn normalize_kg_number(token: &str) -> Option<u64> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_unifies_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_normalize_deletes_all_spaces_and_tabs() {
        assert_eq!(normalize("총 중 량 :\t13,460 kg"), "총중량:13,460kg");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  \n계량증명서\n  "), "계량증명서");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_kg_number_comma_grouping() {
        assert_eq!(normalize_kg_number("14,080"), Some(14080));
    }

    #[test]
    fn test_kg_number_space_grouping() {
        assert_eq!(normalize_kg_number("13 460"), Some(13460));
    }

    #[test]
    fn test_kg_number_no_digits() {
        assert_eq!(normalize_kg_number("kg"), None);
        assert_eq!(normalize_kg_number(""), None);
    }
}
