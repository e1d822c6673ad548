//! Parsing pipeline: normalize, extract, validate, assemble.

use chrono::{FixedOffset, SecondsFormat, Utc};
use tracing::debug;

use crate::models::document::{Fields, ParsedDocument, SCHEMA_VERSION};

use super::rules::{
    extract_direction, extract_gross_kg, extract_id_no, extract_issuer, extract_item_name,
    extract_net_kg, extract_partner, extract_tare_kg, extract_vehicle_no, extract_weigh_count,
    normalize, pick_first_date, pick_first_time, pick_lat_lon,
};
use super::validate::validate;

/// Receipts are issued in Korea Standard Time (UTC+9).
const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Trait for receipt parsers.
pub trait ReceiptParser {
    /// Parse one receipt. Never fails: fields an extractor cannot locate
    /// stay absent and are surfaced through the validation warnings.
    fn parse(&self, source_file: &str, raw_text: &str) -> ParsedDocument;
}

/// Stateless rule-based parser. Every call is independent, so a single
/// instance is safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedParser;

impl RuleBasedParser {
    pub fn new() -> Self {
        Self
    }
}

impl ReceiptParser for RuleBasedParser {
    fn parse(&self, source_file: &str, raw_text: &str) -> ParsedDocument {
        let text = normalize(raw_text);
        debug!(
            "parsing {}: {} raw chars, {} normalized",
            source_file,
            raw_text.chars().count(),
            text.chars().count()
        );

        let (lat, lon) = pick_lat_lon(&text);

        let fields = Fields {
            date: pick_first_date(&text),
            time: pick_first_time(&text),
            vehicle_no: extract_vehicle_no(&text),
            partner_name: extract_partner(&text),
            issuer_name: extract_issuer(&text),
            item_name: extract_item_name(&text),
            direction: extract_direction(&text),
            gross_kg: extract_gross_kg(&text),
            tare_kg: extract_tare_kg(&text),
            net_kg: extract_net_kg(&text),
            lat,
            lon,
            id_no: extract_id_no(&text),
            weigh_count: extract_weigh_count(&text),
        };

        let validation = validate(&fields);
        if !validation.warnings.is_empty() {
            debug!(
                "{}: {} validation warning(s)",
                source_file,
                validation.warnings.len()
            );
        }

        ParsedDocument {
            schema_version: SCHEMA_VERSION.to_string(),
            source_file: source_file.to_string(),
            parsed_at: kst_timestamp(),
            fields,
            validation,
            raw_text: raw_text.to_string(),
        }
    }
}

/// Parse one receipt with the default rule-based parser. This is the sole
/// entry point the I/O layer calls.
pub fn parse(source_file: &str, raw_text: &str) -> ParsedDocument {
    RuleBasedParser::new().parse(source_file, raw_text)
}

/// Current time in KST, ISO-8601 at second precision.
fn kst_timestamp() -> String {
    let kst = FixedOffset::east_opt(KST_OFFSET_SECONDS).unwrap();
    Utc::now()
        .with_timezone(&kst)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}
