//! Gross/tare/net weight extraction.
//!
//! Each weight first tries its own label; when the label is absent or
//! yields no number, a shared fallback infers the values from unlabeled
//! "time ... kg" weighing lines. The fallback is a pure function of the
//! text, so the three extractors calling it independently always see the
//! same triple.

use regex::Regex;

use super::normalize::normalize_kg_number;
use super::patterns::{GROSS_LABEL, KG_BLOCK, NET_LABEL, TARE_LABEL, TIME_HMS_LOOSE, TIME_TOKEN};

/// Extract the gross weight (총중량) in kilograms.
pub fn extract_gross_kg(text: &str) -> Option<u64> {
    extract_weight_by_label(text, &GROSS_LABEL).or_else(|| fallback_from_weighings(text).0)
}

/// Extract the tare weight (차중량/공차중량) in kilograms.
pub fn extract_tare_kg(text: &str) -> Option<u64> {
    extract_weight_by_label(text, &TARE_LABEL).or_else(|| fallback_from_weighings(text).1)
}

/// Extract the net weight (실중량) in kilograms.
pub fn extract_net_kg(text: &str) -> Option<u64> {
    extract_weight_by_label(text, &NET_LABEL).or_else(|| fallback_from_weighings(text).2)
}

/// Labeled extraction: take the 80 characters after the label, strip
/// time-like tokens so a clock never gets absorbed into the number, then
/// reconstruct the first "<number> kg" block.
fn extract_weight_by_label(text: &str, label: &Regex) -> Option<u64> {
    let label_match = label.find(text)?;
    let tail: String = text[label_match.end()..].chars().take(80).collect();
    let tail = TIME_TOKEN.replace_all(&tail, " ");
    let caps = KG_BLOCK.captures(&tail)?;
    normalize_kg_number(&caps[1])
}

/// Collect weighing values from lines of the form "HH:MM(:SS) ... N kg",
/// in line order.
fn scan_timed_weighings(text: &str) -> Vec<u64> {
    let mut values = Vec::new();
    for line in text.lines() {
        if !TIME_HMS_LOOSE.is_match(line) {
            continue;
        }
        let line_without_time = TIME_HMS_LOOSE.replace_all(line, " ");
        if let Some(caps) = KG_BLOCK.captures(&line_without_time) {
            if let Some(value) = normalize_kg_number(&caps[1]) {
                values.push(value);
            }
        }
    }
    values
}

/// Infer (gross, tare, net) from unlabeled weighing lines.
///
/// Exactly two values: the larger is gross, the smaller is tare, net stays
/// absent. Exactly three: the largest is gross, the smallest is net, and
/// the remaining value is tare. Any other count yields nothing.
fn fallback_from_weighings(text: &str) -> (Option<u64>, Option<u64>, Option<u64>) {
    let values = scan_timed_weighings(text);
    match values[..] {
        [a, b, c] => {
            let mut sorted = [a, b, c];
            sorted.sort_unstable();
            let [net, tare, gross] = sorted;
            (Some(gross), Some(tare), Some(net))
        }
        [a, b] => (Some(a.max(b)), Some(a.min(b)), None),
        _ => (None, None, None),
    }
}
