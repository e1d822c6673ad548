//! Input envelope handling.
//!
//! Receipts arrive as JSON objects with a required top-level `text` field
//! holding the OCR transcript. Anything else in the object is ignored.

use serde::Deserialize;
use thiserror::Error;

/// Errors related to loading the input envelope.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// The input is not valid JSON.
    #[error("malformed input JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("input JSON must be an object")]
    NotAnObject,

    /// The JSON object has no usable `text` field.
    #[error("input JSON does not contain top-level 'text' field")]
    MissingText,
}

/// JSON envelope carrying the OCR transcript of one receipt.
#[derive(Debug, Clone, Deserialize)]
pub struct InputEnvelope {
    /// The OCR transcript.
    pub text: Option<String>,
}

impl InputEnvelope {
    /// Parse an envelope from a JSON string and return the transcript.
    ///
    /// Top-level arrays and scalars are rejected; serde would otherwise
    /// deserialize the struct from a sequence positionally.
    pub fn load_text(json: &str) -> Result<String, EnvelopeError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(EnvelopeError::NotAnObject);
        }
        let envelope: InputEnvelope = serde_json::from_value(value)?;
        envelope.text.ok_or(EnvelopeError::MissingText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text() {
        let text = InputEnvelope::load_text(r#"{"text": "계량증명서"}"#).unwrap();
        assert_eq!(text, "계량증명서");
    }

    #[test]
    fn test_missing_text_field() {
        let err = InputEnvelope::load_text(r#"{"body": "x"}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::MissingText));
    }

    #[test]
    fn test_malformed_json() {
        let err = InputEnvelope::load_text("{not json").unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn test_non_object_input() {
        let err = InputEnvelope::load_text(r#"["text"]"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::NotAnObject));
        let err = InputEnvelope::load_text(r#""text""#).unwrap_err();
        assert!(matches!(err, EnvelopeError::NotAnObject));
        let err = InputEnvelope::load_text("42").unwrap_err();
        assert!(matches!(err, EnvelopeError::NotAnObject));
    }

    #[test]
    fn test_non_string_text_field() {
        let err = InputEnvelope::load_text(r#"{"text": 123}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }
}
