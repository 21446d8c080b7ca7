//! Row ordering, per-row style descriptors and column sizing
//!
//! Everything here is pure: the table borrows the records, decides how
//! each row should look, and leaves the actual cell writes to
//! [`report_writer`](super::report_writer).

use std::collections::HashMap;

use crate::core::config::FolderSpec;
use crate::core::record::FileRecord;
use crate::scanner::duplicate_detector::count_hashes;

/// Header row, in column order
pub const HEADERS: [&str; 6] = [
    "File Name",
    "File Hash",
    "File Type",
    "File Size",
    "Folder",
    "Content Type",
];

pub const HASH_COLUMN: usize = 1;
pub const SIZE_COLUMN: usize = 3;
pub const FOLDER_COLUMN: usize = 4;

/// Extra character widths added to every column's longest value
pub const COLUMN_PADDING: usize = 2;

/// Which of the two known folders a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderSlot {
    First,
    Second,
}

/// The two labels that get a folder colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderLabels {
    first: String,
    second: String,
}

impl FolderLabels {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn from_folders(folders: &[FolderSpec; 2]) -> Self {
        Self::new(folders[0].label.clone(), folders[1].label.clone())
    }

    /// Slot for `label`; `None` for anything that is neither known label
    pub fn slot_for(&self, label: &str) -> Option<FolderSlot> {
        if label == self.first {
            Some(FolderSlot::First)
        } else if label == self.second {
            Some(FolderSlot::Second)
        } else {
            None
        }
    }
}

/// How one data row should be styled
///
/// Both fields apply independently. Every cell is centred regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowStyle {
    /// Fill for the Folder cell
    pub folder_fill: Option<FolderSlot>,
    /// Highlight the File Hash cell
    pub highlight_hash: bool,
}

#[derive(Debug, Clone)]
pub struct ReportRow<'a> {
    pub record: &'a FileRecord,
    pub style: RowStyle,
}

impl ReportRow<'_> {
    /// Rendered cell values, in column order
    pub fn cells(&self) -> [String; 6] {
        let record = self.record;
        [
            record.name.clone(),
            record.hash.clone(),
            record.extension.clone(),
            record.size.to_string(),
            record.folder_label.clone(),
            record.content_type_hint.clone(),
        ]
    }
}

/// Sorted, styled rows ready to be rendered
#[derive(Debug, Clone)]
pub struct ReportTable<'a> {
    rows: Vec<ReportRow<'a>>,
}

impl<'a> ReportTable<'a> {
    /// Sort `records` by size and attach a style to every row
    pub fn build(records: &'a [FileRecord], labels: &FolderLabels) -> Self {
        let counts = count_hashes(records);
        Self::build_with_counts(records, &counts, labels)
    }

    /// Same as [`build`](Self::build) with a precomputed hash→count map
    ///
    /// Ties on size keep input order (`sort_by_key` is stable).
    pub fn build_with_counts(
        records: &'a [FileRecord],
        counts: &HashMap<&str, usize>,
        labels: &FolderLabels,
    ) -> Self {
        let mut sorted: Vec<&'a FileRecord> = records.iter().collect();
        sorted.sort_by_key(|record| record.size);

        let rows = sorted
            .into_iter()
            .map(|record| ReportRow {
                record,
                style: RowStyle {
                    folder_fill: labels.slot_for(&record.folder_label),
                    highlight_hash: counts
                        .get(record.hash.as_str())
                        .is_some_and(|&count| count > 1),
                },
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow<'a>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Longest rendered value per column (header included) plus padding
    pub fn column_widths(&self) -> [usize; 6] {
        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &self.rows {
            for (width, value) in widths.iter_mut().zip(row.cells().iter()) {
                *width = (*width).max(value.chars().count());
            }
        }
        widths.map(|width| width + COLUMN_PADDING)
    }
}
