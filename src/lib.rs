//! Duplicate File Report Library
//!
//! Walks two labelled folders, fingerprints every file by content hash and
//! writes a size-sorted spreadsheet with duplicate hashes highlighted.

pub mod core;
pub mod logging;
pub mod pipeline;
pub mod scanner;
pub mod reporting;

pub use crate::core::record;
pub use crate::scanner::file_scanner;
pub use crate::reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::config::{ensure_output_writable, FolderSpec, ReportConfig};
    pub use crate::core::error::{ReportError, Result};
    pub use crate::core::record::{
        content_type_hint, file_extension, FileRecord, HashAlgorithm, FORM_HINT,
    };
    pub use crate::pipeline::{run, scan_folders, ReportSummary};
    pub use crate::scanner::file_scanner::{collect_files, walk_labeled, LabeledPath};
    pub use crate::scanner::fingerprint::{compute_file_hash, fingerprint_file, CHUNK_SIZE};
    pub use crate::scanner::duplicate_detector::{count_hashes, find_duplicates, DuplicateInfo};
    pub use crate::reporting::report_table::{FolderLabels, FolderSlot, ReportTable, RowStyle};
    pub use crate::reporting::report_writer::{write_report, write_table, SHEET_NAME};
}
