//! End-to-end report run
//!
//! Enumerate both roots, fingerprint every file, sort, count duplicates
//! and render. Strictly sequential; the first error aborts the run and no
//! report is written.

use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing::info;

use crate::core::config::{ensure_output_writable, ReportConfig};
use crate::core::error::Result;
use crate::core::record::{FileRecord, HashAlgorithm};
use crate::reporting::report_table::{FolderLabels, ReportTable};
use crate::reporting::report_writer::write_table;
use crate::scanner::duplicate_detector::{count_hashes, find_duplicates, DuplicateInfo};
use crate::scanner::file_scanner::{walk_labeled, LabeledPath};
use crate::scanner::fingerprint::fingerprint_file;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub output: PathBuf,
    /// Records in concatenation order (first folder, then second)
    pub records: Vec<FileRecord>,
    /// Files found under each root
    pub folder_counts: [usize; 2],
    pub duplicates: Vec<DuplicateInfo>,
}

impl ReportSummary {
    pub fn total_files(&self) -> usize {
        self.records.len()
    }

    /// Files beyond the first in every duplicate group
    pub fn redundant_files(&self) -> usize {
        self.duplicates.iter().map(|d| d.files.len() - 1).sum()
    }
}

/// Enumerate and fingerprint both folders
///
/// Both roots are validated before any file is hashed. `progress` gets its
/// length set to the number of files and is advanced once per file.
pub fn scan_folders(
    config: &ReportConfig,
    progress: &ProgressBar,
) -> Result<(Vec<FileRecord>, [usize; 2])> {
    let walks = config
        .folders
        .iter()
        .map(|folder| walk_labeled(&folder.root, &folder.label))
        .collect::<Result<Vec<_>>>()?;

    let mut entries: Vec<LabeledPath> = Vec::new();
    let mut folder_counts = [0usize; 2];
    let folders = config.folders.iter().zip(walks);
    for ((folder, walk), count) in folders.zip(folder_counts.iter_mut()) {
        let files = walk.collect::<Result<Vec<_>>>()?;
        info!(
            root = %folder.root.display(),
            label = %folder.label,
            files = files.len(),
            "enumerated folder"
        );
        *count = files.len();
        entries.extend(files);
    }

    progress.set_length(entries.len() as u64);
    let records = fingerprint_all(&entries, config.algorithm, progress)?;
    Ok((records, folder_counts))
}

fn fingerprint_all(
    entries: &[LabeledPath],
    algorithm: HashAlgorithm,
    progress: &ProgressBar,
) -> Result<Vec<FileRecord>> {
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        records.push(fingerprint_file(entry, algorithm)?);
        progress.inc(1);
    }
    Ok(records)
}

/// Run the whole pipeline described by `config`
pub fn run(config: &ReportConfig, progress: &ProgressBar) -> Result<ReportSummary> {
    ensure_output_writable(&config.output)?;

    let (records, folder_counts) = scan_folders(config, progress)?;

    let labels = FolderLabels::from_folders(&config.folders);
    {
        let counts = count_hashes(&records);
        let table = ReportTable::build_with_counts(&records, &counts, &labels);
        write_table(&config.output, &table)?;
        info!(output = %config.output.display(), rows = table.len(), "report saved");
    }

    let duplicates = find_duplicates(&records);
    Ok(ReportSummary {
        output: config.output.clone(),
        records,
        folder_counts,
        duplicates,
    })
}
