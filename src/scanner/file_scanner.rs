//! Recursive file enumeration for a labelled folder root

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{ReportError, Result};

/// A discovered file and the label of the root it was found under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledPath {
    pub path: PathBuf,
    pub folder_label: String,
}

/// Lazy walk over every regular file below a root
///
/// Created by [`walk_labeled`]. Yields entries in walk order; directories
/// are descended into but never yielded.
pub struct LabeledFiles {
    root: PathBuf,
    label: String,
    inner: walkdir::IntoIter,
}

impl Iterator for LabeledFiles {
    type Item = Result<LabeledPath>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.file_type().is_file() => {
                    return Some(Ok(LabeledPath {
                        path: entry.into_path(),
                        folder_label: self.label.clone(),
                    }));
                }
                Ok(_) => continue,
                Err(source) => {
                    return Some(Err(ReportError::Walk {
                        root: self.root.clone(),
                        source,
                    }));
                }
            }
        }
    }
}

/// Check that `root` is an existing directory and return its absolute form
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(root).map_err(|e| ReportError::root_io(root, e))?;
    if !metadata.is_dir() {
        return Err(ReportError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    fs::canonicalize(root).map_err(|e| ReportError::root_io(root, e))
}

/// Walk `root` recursively, tagging every file with `label`
///
/// The root is validated eagerly; the walk itself is lazy.
///
/// # Arguments
/// * `root` - Directory to scan
/// * `label` - Folder label copied onto every yielded entry
pub fn walk_labeled(root: &Path, label: &str) -> Result<LabeledFiles> {
    let root = validate_root(root)?;
    let inner = WalkDir::new(&root).follow_links(false).into_iter();
    Ok(LabeledFiles {
        root,
        label: label.to_string(),
        inner,
    })
}

/// Collect every file under `root` into a vector
pub fn collect_files(root: &Path, label: &str) -> Result<Vec<LabeledPath>> {
    walk_labeled(root, label)?.collect()
}
