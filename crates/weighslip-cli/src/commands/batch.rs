//! Batch command - parse every JSON receipt in a directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use weighslip_core::ParsedDocument;

use super::{output_name, parse_file, write_document};

/// Arguments for directory-batch mode.
pub struct BatchArgs {
    /// Input directory containing `*.json` receipt envelopes.
    pub input_dir: PathBuf,

    /// Output directory; defaults to `outputs`.
    pub out_dir: Option<PathBuf>,

    /// Also write a `summary.csv` into the output directory.
    pub summary: bool,
}

/// Result of processing a single file.
struct FileResult {
    name: String,
    document: Option<ParsedDocument>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let out_dir = args.out_dir.unwrap_or_else(|| PathBuf::from("outputs"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let files = list_json_files(&args.input_dir)?;
    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        // Per-file failures never abort the batch
        match process_one(path, &out_dir) {
            Ok(doc) => {
                println!("OK: {} -> {}", name, output_name(path));
                results.push(FileResult {
                    name,
                    document: Some(doc),
                    error: None,
                });
            }
            Err(e) => {
                warn!("failed to process {}: {e}", path.display());
                println!("FAIL: {name}: {e}");
                results.push(FileResult {
                    name,
                    document: None,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if args.summary {
        let summary_path = out_dir.join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let succeeded = results.iter().filter(|r| r.document.is_some()).count();
    let failed = results.len() - succeeded;
    println!(
        "{} Processed {} files in {:?}: {} succeeded, {} failed",
        style("✓").green(),
        results.len(),
        start.elapsed(),
        style(succeeded).green(),
        style(failed).red()
    );

    Ok(())
}

/// All `*.json` files in the directory, in sorted order.
fn list_json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn process_one(path: &Path, out_dir: &Path) -> anyhow::Result<ParsedDocument> {
    let doc = parse_file(path)?;
    let out_path = out_dir.join(output_name(path));
    write_document(&doc, &out_path)?;
    Ok(doc)
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "source_file",
        "status",
        "date",
        "vehicle_no",
        "direction",
        "gross_kg",
        "tare_kg",
        "net_kg",
        "warnings",
        "error",
    ])?;

    for result in results {
        if let Some(doc) = &result.document {
            let fields = &doc.fields;
            wtr.write_record([
                result.name.as_str(),
                "success",
                &fields.date.map(|d| d.to_string()).unwrap_or_default(),
                fields.vehicle_no.as_deref().unwrap_or_default(),
                fields.direction.as_str(),
                &fields.gross_kg.map(|v| v.to_string()).unwrap_or_default(),
                &fields.tare_kg.map(|v| v.to_string()).unwrap_or_default(),
                &fields.net_kg.map(|v| v.to_string()).unwrap_or_default(),
                &doc.validation.warnings.len().to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                result.name.as_str(),
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or("unknown error"),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
