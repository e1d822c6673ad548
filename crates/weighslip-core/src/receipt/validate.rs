//! Cross-validation of extracted fields.

use crate::models::document::{Fields, ValidationResult};

/// Validate the extracted fields.
///
/// When all three weights are present, checks `gross - tare == net` and
/// records a mismatch warning with the literal values. Then warns, in
/// fixed order, for each absent required field: date, vehicle_no,
/// gross_kg, net_kg. A missing tare alone is not warned. The warning
/// order is part of the output contract.
pub fn validate(fields: &Fields) -> ValidationResult {
    let mut result = ValidationResult::default();

    if let (Some(gross), Some(tare), Some(net)) =
        (fields.gross_kg, fields.tare_kg, fields.net_kg)
    {
        let consistent = gross as i128 - tare as i128 == net as i128;
        result.net_equals_gross_minus_tare = Some(consistent);
        if !consistent {
            result.warnings.push(format!(
                "net_kg mismatch: gross({gross}) - tare({tare}) != net({net})"
            ));
        }
    }

    if fields.date.is_none() {
        result.warnings.push("date not found".to_string());
    }
    if fields.vehicle_no.is_none() {
        result.warnings.push("vehicle_no not found".to_string());
    }
    if fields.gross_kg.is_none() {
        result.warnings.push("gross_kg not found".to_string());
    }
    if fields.net_kg.is_none() {
        result.warnings.push("net_kg not found".to_string());
    }

    result
}
