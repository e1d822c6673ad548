//! CLI commands and shared file helpers.

pub mod batch;
pub mod process;

use std::fs;
use std::path::Path;

use anyhow::Context;

use weighslip_core::{parse, InputEnvelope, ParsedDocument};

/// Load one input envelope and run it through the parsing pipeline.
pub(crate) fn parse_file(path: &Path) -> anyhow::Result<ParsedDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let text = InputEnvelope::load_text(&json)?;

    let source_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    Ok(parse(source_name, &text))
}

/// Write a parsed document as pretty-printed JSON.
pub(crate) fn write_document(doc: &ParsedDocument, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Output file name for an input: `<stem>.parsed.json`.
pub(crate) fn output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("receipt");
    format!("{stem}.parsed.json")
}
