//! Parameters of a single report run

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ReportError, Result};
use super::record::HashAlgorithm;

pub const DEFAULT_FIRST_LABEL: &str = "Folder1";
pub const DEFAULT_SECOND_LABEL: &str = "Folder2";
pub const DEFAULT_OUTPUT: &str = "all_files_report.xlsx";

/// A folder root and the label its files are tagged with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSpec {
    pub root: PathBuf,
    pub label: String,
}

impl FolderSpec {
    pub fn new(root: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            label: label.into(),
        }
    }
}

/// Everything `pipeline::run` needs
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// The two roots, in concatenation order
    pub folders: [FolderSpec; 2],
    pub output: PathBuf,
    pub algorithm: HashAlgorithm,
}

impl ReportConfig {
    pub fn new(first: FolderSpec, second: FolderSpec, output: impl Into<PathBuf>) -> Self {
        Self {
            folders: [first, second],
            output: output.into(),
            algorithm: HashAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Reject output paths that can't possibly be saved to
///
/// Only checks what is knowable without creating the file: the path is not
/// a directory, its parent directory exists, and an existing file is not
/// read-only.
pub fn ensure_output_writable(path: &Path) -> Result<()> {
    let reject = |reason: &str| ReportError::OutputNotWritable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if path.is_dir() {
        return Err(reject("path is a directory"));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(reject("parent directory does not exist"));
    }

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.permissions().readonly() {
            return Err(reject("existing file is read-only"));
        }
    }

    Ok(())
}
