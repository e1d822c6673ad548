//! Direction (입고/출고) extraction.

use crate::models::document::Direction;

use super::patterns::{DIRECTION_LABEL, INBOUND, INBOUND_BOUNDED, OUTBOUND, OUTBOUND_BOUNDED};

/// Extract the movement direction.
///
/// Priority: the labeled 구분 capture containing 입 or 출 beats any
/// unlabeled occurrence; after that, word-bounded 입고/출고 beats a bare
/// substring match. UNKNOWN when nothing matches.
pub fn extract_direction(text: &str) -> Direction {
    if let Some(caps) = DIRECTION_LABEL.captures(text) {
        let value = caps[1].trim();
        if value.contains('입') {
            return Direction::In;
        }
        if value.contains('출') {
            return Direction::Out;
        }
    }

    if INBOUND_BOUNDED.is_match(text) {
        return Direction::In;
    }
    if OUTBOUND_BOUNDED.is_match(text) {
        return Direction::Out;
    }
    if INBOUND.is_match(text) {
        return Direction::In;
    }
    if OUTBOUND.is_match(text) {
        return Direction::Out;
    }
    Direction::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_inbound() {
        assert_eq!(extract_direction("구분:입고\n"), Direction::In);
    }

    #[test]
    fn test_labeled_outbound() {
        assert_eq!(extract_direction("구분:출고\n"), Direction::Out);
    }

    #[test]
    fn test_label_beats_unlabeled_occurrence() {
        // Unlabeled 출고 elsewhere must not override the labeled capture
        assert_eq!(
            extract_direction("출고장비고\n구분:입고\n"),
            Direction::In
        );
    }

    #[test]
    fn test_unlabeled_bounded() {
        assert_eq!(extract_direction("계량전표\n입고\n"), Direction::In);
        assert_eq!(extract_direction("계량전표\n출고\n"), Direction::Out);
    }

    #[test]
    fn test_unlabeled_substring() {
        // 고 followed by a digit defeats the word boundary; the bare
        // substring rule still finds it
        assert_eq!(extract_direction("입고2026-12-01\n"), Direction::In);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(extract_direction("계량증명서\n"), Direction::Unknown);
    }
}
