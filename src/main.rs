use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use dupe_report_rs::core::config::{DEFAULT_FIRST_LABEL, DEFAULT_OUTPUT, DEFAULT_SECOND_LABEL};
use dupe_report_rs::logging::init_logging;
use dupe_report_rs::prelude::*;

#[derive(Parser)]
#[command(name = "dupe_report_rs")]
#[command(about = "Compare two folders by content hash and write a styled Excel report", long_about = None)]
struct Cli {
    /// First folder to scan
    folder1: PathBuf,

    /// Second folder to scan
    folder2: PathBuf,

    /// Label for files from the first folder
    #[arg(long, default_value = DEFAULT_FIRST_LABEL)]
    label1: String,

    /// Label for files from the second folder
    #[arg(long, default_value = DEFAULT_SECOND_LABEL)]
    label2: String,

    /// Output report filename (.xlsx)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Content hash algorithm
    #[arg(long, value_enum, default_value_t = HashAlgorithm::Md5)]
    hash: HashAlgorithm,

    /// Run in batch mode (no progress bar)
    #[arg(long)]
    batch: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> ReportConfig {
        ReportConfig::new(
            FolderSpec::new(&self.folder1, &self.label1),
            FolderSpec::new(&self.folder2, &self.label2),
            &self.output,
        )
        .with_algorithm(self.hash)
    }
}

fn progress_bar(batch: bool) -> Result<ProgressBar> {
    if batch {
        return Ok(ProgressBar::hidden());
    }
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .context("Invalid progress bar template")?
        .progress_chars("#>-");
    Ok(ProgressBar::new(0).with_style(style))
}

fn print_duplicates(summary: &ReportSummary) {
    for (idx, dup) in summary.duplicates.iter().enumerate() {
        println!("  Group {} (Hash: {}, {} bytes):", idx + 1, dup.hash, dup.size);
        for file in &dup.files {
            println!("    [{}] {}", file.folder_label, file.name);
        }
    }
    println!();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config();
    println!("Duplicate File Report");
    for folder in &config.folders {
        println!("  {}: {}", folder.label, folder.root.display());
    }
    println!("Hash algorithm: {}", config.algorithm);
    println!();

    let progress = progress_bar(cli.batch)?;
    let summary = run(&config, &progress)
        .with_context(|| format!("Failed to generate report {}", config.output.display()))?;
    progress.finish_and_clear();

    println!("==================================================");
    println!("SCAN COMPLETE");
    println!("==================================================");
    println!("Files in {}: {}", config.folders[0].label, summary.folder_counts[0]);
    println!("Files in {}: {}", config.folders[1].label, summary.folder_counts[1]);
    println!("Found {} groups of duplicate files", summary.duplicates.len());
    println!("Redundant files: {}", summary.redundant_files());
    println!();

    if cli.verbose && !summary.duplicates.is_empty() {
        print_duplicates(&summary);
    }

    println!("Styled Excel report generated: {}", summary.output.display());
    Ok(())
}
