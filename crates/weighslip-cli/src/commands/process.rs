//! Process command - parse a single receipt file.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use super::{output_name, parse_file, write_document};

/// Arguments for single-file mode.
pub struct ProcessArgs {
    /// Input JSON file.
    pub input: PathBuf,

    /// Output file path; defaults to `outputs/<stem>.parsed.json`.
    pub out: Option<PathBuf>,
}

pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let out_path = args
        .out
        .unwrap_or_else(|| PathBuf::from("outputs").join(output_name(&args.input)));

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    // Load errors are fatal in single-file mode
    let doc = parse_file(&args.input)?;
    debug!(
        "{}: {} warning(s)",
        doc.source_file,
        doc.validation.warnings.len()
    );

    write_document(&doc, &out_path)?;
    println!("OK: {} -> {}", args.input.display(), out_path.display());

    Ok(())
}
