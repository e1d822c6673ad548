//! Data models for parsed weighbridge receipts.

pub mod document;
