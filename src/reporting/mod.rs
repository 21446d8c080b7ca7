//! Report assembly and spreadsheet output

pub mod report_table;
pub mod report_writer;

pub use report_table::{FolderLabels, FolderSlot, ReportRow, ReportTable, RowStyle, HEADERS};
pub use report_writer::{write_report, write_table, SHEET_NAME};
