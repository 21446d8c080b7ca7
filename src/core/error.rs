//! Error types for scanning and report generation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Folder root does not exist.
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// Folder root exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A file could not be opened or read because of permissions.
    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other read failure.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed somewhere below a root.
    #[error("Failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Output path rejected before any work was done.
    #[error("Cannot write report to {}: {reason}", path.display())]
    OutputNotWritable { path: PathBuf, reason: String },

    /// Workbook could not be built or saved.
    #[error("Failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl ReportError {
    /// Wrap an I/O error with the path it happened on.
    ///
    /// `NotFound` stays an `Io` error here; only folder roots are reported
    /// as [`PathNotFound`](Self::PathNotFound), see [`root_io`](Self::root_io).
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Wrap an I/O error raised while checking a folder root.
    pub fn root_io(root: impl AsRef<Path>, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound {
                path: root.as_ref().to_path_buf(),
            },
            _ => Self::io(root, source),
        }
    }
}
