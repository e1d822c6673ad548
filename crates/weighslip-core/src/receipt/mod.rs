//! Receipt parsing module.

mod pipeline;
pub mod rules;
pub mod validate;

pub use pipeline::{parse, ReceiptParser, RuleBasedParser};
