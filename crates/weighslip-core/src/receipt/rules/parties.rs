//! Counterparty, issuer, and item name extraction.

use super::patterns::{
    ISSUER_LINE, ITEM_NAME, ITEM_NAME_BEFORE_CATEGORY, PARTNER, PARTNER_ALT, PARTNER_HONORIFIC,
};

/// Extract the counterparty name (거래처).
///
/// Tries the 거래처 label, then 상호; if neither matches, falls back to the
/// text immediately preceding the honorific 귀하 on the same line.
pub fn extract_partner(text: &str) -> Option<String> {
    for label in [&*PARTNER, &*PARTNER_ALT] {
        if let Some(caps) = label.captures(text) {
            let value = caps[1].trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    if let Some(caps) = PARTNER_HONORIFIC.captures(text) {
        let value = caps[1].trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}

/// Extract the issuer: a full line carrying the corporate marker "(주)" or
/// "주식회사", returned trimmed.
pub fn extract_issuer(text: &str) -> Option<String> {
    let caps = ISSUER_LINE.captures(text)?;
    let value = caps[1].trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

/// Extract the item name (품명): labeled content through end of line, or
/// the bare 품명 variant terminated by the 구분 label.
pub fn extract_item_name(text: &str) -> Option<String> {
    for pattern in [&*ITEM_NAME, &*ITEM_NAME_BEFORE_CATEGORY] {
        if let Some(caps) = pattern.captures(text) {
            let value = caps[1].trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partner_primary_label() {
        assert_eq!(
            extract_partner("거래처:대성산업\n"),
            Some("대성산업".to_string())
        );
    }

    #[test]
    fn test_partner_alt_label() {
        assert_eq!(
            extract_partner("상호:그린자원\n"),
            Some("그린자원".to_string())
        );
    }

    #[test]
    fn test_partner_honorific_fallback() {
        assert_eq!(
            extract_partner("한빛산업귀하\n"),
            Some("한빛산업".to_string())
        );
    }

    #[test]
    fn test_partner_absent() {
        assert_eq!(extract_partner("계량증명서\n"), None);
    }

    #[test]
    fn test_issuer_corporate_paren_marker() {
        assert_eq!(
            extract_issuer("계량전표\n(주)한결환경\n2026-02-02\n"),
            Some("(주)한결환경".to_string())
        );
    }

    #[test]
    fn test_issuer_corporate_word_marker() {
        assert_eq!(
            extract_issuer("계량전표\n주식회사대신스틸\n2026-02-02\n"),
            Some("주식회사대신스틸".to_string())
        );
    }

    #[test]
    fn test_issuer_absent() {
        assert_eq!(extract_issuer("계량전표\n대신스틸\n"), None);
    }

    #[test]
    fn test_item_labeled() {
        assert_eq!(extract_item_name("품명:고철\n"), Some("고철".to_string()));
    }

    #[test]
    fn test_item_before_category_label() {
        // "품 명  파지" then the 구분 label on the next line, post-normalization
        assert_eq!(
            extract_item_name("품명파지\n구분:입고\n"),
            Some("파지".to_string())
        );
    }

    #[test]
    fn test_item_absent() {
        assert_eq!(extract_item_name("계량증명서\n"), None);
    }
}
