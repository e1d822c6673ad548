//! Parsed receipt document models.
//!
//! Every field that an extractor may fail to locate is an `Option`, and
//! absent values serialize as JSON `null` rather than being skipped: the
//! null-bearing shape of the output document is part of the contract.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Schema version tag stamped into every output document.
pub const SCHEMA_VERSION: &str = "1.0";

/// Movement direction of the weighed cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Incoming cargo (입고).
    In,
    /// Outgoing cargo (출고).
    Out,
    /// No directional cue found.
    Unknown,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Direction {
    /// Wire form of the direction, as it appears in the JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Fields extracted from one receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fields {
    /// Weighing date.
    pub date: Option<NaiveDate>,

    /// Weighing time.
    pub time: Option<NaiveTime>,

    /// Vehicle registration number (차량번호).
    pub vehicle_no: Option<String>,

    /// Counterparty name (거래처).
    pub partner_name: Option<String>,

    /// Issuer of the receipt (the weighbridge operator).
    pub issuer_name: Option<String>,

    /// Name of the weighed goods (품명).
    pub item_name: Option<String>,

    /// Incoming or outgoing movement (구분).
    #[serde(default)]
    pub direction: Direction,

    /// Gross weight in kilograms (총중량).
    pub gross_kg: Option<u64>,

    /// Tare weight in kilograms (차중량).
    pub tare_kg: Option<u64>,

    /// Net weight in kilograms (실중량).
    pub net_kg: Option<u64>,

    /// Latitude in degrees.
    pub lat: Option<f64>,

    /// Longitude in degrees.
    pub lon: Option<f64>,

    /// Receipt identifier (ID-NO).
    pub id_no: Option<String>,

    /// Weighing counter (계량횟수), kept as a digit string to preserve
    /// leading zeros.
    pub weigh_count: Option<String>,
}

/// Consistency report produced once the fields are fully populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `gross - tare == net`; None when any of the three is missing.
    pub net_equals_gross_minus_tare: Option<bool>,

    /// Ordered warnings for mismatches and missing required fields.
    pub warnings: Vec<String>,
}

/// The immutable output document for one parsed receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Output schema version.
    pub schema_version: String,

    /// Identifier of the source file.
    pub source_file: String,

    /// ISO-8601 timestamp of parse completion (UTC+9, second precision).
    pub parsed_at: String,

    /// Extracted fields.
    pub fields: Fields,

    /// Weight consistency report.
    pub validation: ValidationResult,

    /// Original input text, preserved verbatim for audit.
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_direction_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Direction::In).unwrap(), "\"IN\"");
        assert_eq!(serde_json::to_string(&Direction::Out).unwrap(), "\"OUT\"");
        assert_eq!(
            serde_json::to_string(&Direction::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let json = serde_json::to_value(Fields::default()).unwrap();
        assert_eq!(json["date"], serde_json::Value::Null);
        assert_eq!(json["gross_kg"], serde_json::Value::Null);
        assert_eq!(json["direction"], "UNKNOWN");
    }

    #[test]
    fn test_weights_serialize_as_integers() {
        let fields = Fields {
            gross_kg: Some(13460),
            ..Fields::default()
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["gross_kg"], serde_json::json!(13460));
    }
}
