//! Vehicle number extraction.

use regex::Regex;

use super::patterns::{
    ANY_DIGIT, TRAILING_NON_DIGITS, VEHICLE_NO, VEHICLE_NO_ALT, VEHICLE_NO_SHORT,
};

/// Extract the vehicle registration number (e.g. "80구8713").
///
/// Label patterns are tried in priority order; the first one that matches
/// wins outright, with no merging across labels. The captured token has
/// trailing non-digits stripped and is only accepted if a digit remains.
pub fn extract_vehicle_no(text: &str) -> Option<String> {
    let labels: [&Regex; 3] = [&VEHICLE_NO, &VEHICLE_NO_ALT, &VEHICLE_NO_SHORT];

    for label in labels {
        if let Some(caps) = label.captures(text) {
            let token = caps[1].replace(' ', "");
            let token = TRAILING_NON_DIGITS.replace(&token, "").into_owned();
            if ANY_DIGIT.is_match(&token) {
                return Some(token);
            }
            return None;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primary_label() {
        assert_eq!(
            extract_vehicle_no("차량번호:80구8713\n"),
            Some("80구8713".to_string())
        );
    }

    #[test]
    fn test_no_label() {
        assert_eq!(
            extract_vehicle_no("차량No:5405\n"),
            Some("5405".to_string())
        );
    }

    #[test]
    fn test_short_label() {
        assert_eq!(extract_vehicle_no("차번호:8713\n"), Some("8713".to_string()));
    }

    #[test]
    fn test_trailing_non_digits_stripped() {
        assert_eq!(
            extract_vehicle_no("차량번호:0580충남\n"),
            Some("0580".to_string())
        );
    }

    #[test]
    fn test_token_without_digit_rejected() {
        assert_eq!(extract_vehicle_no("차량번호:미상\n"), None);
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_vehicle_no("계량증명서\n"), None);
    }
}
