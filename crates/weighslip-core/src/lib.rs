//! Core library for Korean weighbridge receipt parsing.
//!
//! This crate provides:
//! - OCR text normalization (line endings, whitespace stripping)
//! - Rule-based field extraction (dates, times, vehicle number, parties,
//!   gross/tare/net weights, geolocation, identifiers)
//! - Cross-validation of the extracted weights
//! - An immutable output document suitable for direct JSON serialization

pub mod envelope;
pub mod models;
pub mod receipt;

pub use envelope::{EnvelopeError, InputEnvelope};
pub use models::document::{Direction, Fields, ParsedDocument, ValidationResult, SCHEMA_VERSION};
pub use receipt::{parse, ReceiptParser, RuleBasedParser};
