//! Shared types: records, run configuration, errors

pub mod config;
pub mod error;
pub mod record;

pub use config::{ensure_output_writable, FolderSpec, ReportConfig};
pub use error::{ReportError, Result};
pub use record::{FileRecord, HashAlgorithm, FORM_HINT};
