//! CLI application for weighbridge receipt parsing.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, process};

/// Weighbridge receipt parser - extract structured fields from OCR transcripts
#[derive(Parser)]
#[command(name = "weighslip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input JSON file (single mode)
    #[arg(long, conflicts_with = "input_dir")]
    input: Option<PathBuf>,

    /// Output file path (single mode, default: outputs/<stem>.parsed.json)
    #[arg(long, requires = "input")]
    out: Option<PathBuf>,

    /// Input directory containing JSON files (batch mode)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Output directory (batch mode, default: outputs)
    #[arg(long, requires = "input_dir")]
    out_dir: Option<PathBuf>,

    /// Also generate a summary CSV in the output directory (batch mode)
    #[arg(long, requires = "input_dir")]
    summary: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(input) = cli.input {
        return process::run(process::ProcessArgs {
            input,
            out: cli.out,
        })
        .await;
    }

    if let Some(input_dir) = cli.input_dir {
        return batch::run(batch::BatchArgs {
            input_dir,
            out_dir: cli.out_dir,
            summary: cli.summary,
        })
        .await;
    }

    anyhow::bail!("provide --input or --input-dir")
}
