//! Styled workbook output

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet, XlsxError};
use std::path::Path;

use super::report_table::{
    FolderLabels, FolderSlot, ReportTable, RowStyle, FOLDER_COLUMN, HASH_COLUMN, HEADERS,
    SIZE_COLUMN,
};
use crate::core::error::{ReportError, Result};
use crate::core::record::FileRecord;

/// Name of the single worksheet
pub const SHEET_NAME: &str = "File List Report";

const HEADER_FILL: u32 = 0xFFD700;
const FIRST_FOLDER_FILL: u32 = 0xADD8E6;
const SECOND_FOLDER_FILL: u32 = 0xFFC0CB;
const DUPLICATE_HASH_FILL: u32 = 0xFFFF00;

/// Cell formats shared by the whole sheet
struct CellStyles {
    header: Format,
    plain: Format,
    first_folder: Format,
    second_folder: Format,
    duplicate_hash: Format,
}

impl CellStyles {
    fn new() -> Self {
        let plain = Format::new()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        let filled = |rgb: u32| plain.clone().set_background_color(Color::RGB(rgb));

        Self {
            header: filled(HEADER_FILL).set_bold(),
            first_folder: filled(FIRST_FOLDER_FILL),
            second_folder: filled(SECOND_FOLDER_FILL),
            duplicate_hash: filled(DUPLICATE_HASH_FILL),
            plain,
        }
    }

    fn for_cell(&self, column: usize, style: RowStyle) -> &Format {
        match column {
            HASH_COLUMN if style.highlight_hash => &self.duplicate_hash,
            FOLDER_COLUMN => match style.folder_fill {
                Some(FolderSlot::First) => &self.first_folder,
                Some(FolderSlot::Second) => &self.second_folder,
                None => &self.plain,
            },
            _ => &self.plain,
        }
    }
}

fn render(
    worksheet: &mut Worksheet,
    table: &ReportTable,
) -> std::result::Result<(), XlsxError> {
    let styles = CellStyles::new();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &styles.header)?;
    }

    for (idx, row) in table.rows().iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, value) in row.cells().iter().enumerate() {
            let format = styles.for_cell(col, row.style);
            if col == SIZE_COLUMN {
                let size = row.record.size as f64;
                worksheet.write_number_with_format(row_num, col as u16, size, format)?;
            } else {
                worksheet.write_string_with_format(row_num, col as u16, value.as_str(), format)?;
            }
        }
    }

    for (col, width) in table.column_widths().iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    Ok(())
}

/// Write an already built table to `output_path`
///
/// Any existing file at `output_path` is replaced.
pub fn write_table(output_path: &Path, table: &ReportTable) -> Result<()> {
    let mut workbook = Workbook::new();
    render(workbook.add_worksheet(), table)
        .and_then(|()| workbook.save(output_path))
        .map_err(|source| ReportError::Write {
            path: output_path.to_path_buf(),
            source,
        })
}

/// Build the report table for `records` and write it
///
/// # Arguments
/// * `output_path` - Path of the .xlsx file to create or overwrite
/// * `records` - Fingerprinted files from both folders, in concatenation order
/// * `labels` - The two folder labels that get a colour
pub fn write_report(
    output_path: &Path,
    records: &[FileRecord],
    labels: &FolderLabels,
) -> Result<()> {
    let table = ReportTable::build(records, labels);
    write_table(output_path, &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn is_zip(path: &Path) -> bool {
        std::fs::read(path)
            .map(|bytes| bytes.starts_with(b"PK\x03\x04"))
            .unwrap_or(false)
    }

    #[test]
    fn test_write_report() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.xlsx");

        let records = vec![
            FileRecord::new("x.txt", "5d41402abc4b2a76b9719d911017c592", 5, "Folder1"),
            FileRecord::new("y.txt", "5d41402abc4b2a76b9719d911017c592", 5, "Folder2"),
            FileRecord::new("(Z9)z.pdf", "d41d8cd98f00b204e9800998ecf8427e", 0, "Other"),
        ];

        write_report(&output, &records, &FolderLabels::new("Folder1", "Folder2")).unwrap();
        assert!(is_zip(&output));
    }

    #[test]
    fn test_write_empty_report() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("empty.xlsx");

        write_report(&output, &[], &FolderLabels::new("Folder1", "Folder2")).unwrap();
        assert!(is_zip(&output));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.xlsx");
        std::fs::write(&output, b"stale contents").unwrap();

        write_report(&output, &[], &FolderLabels::new("Folder1", "Folder2")).unwrap();
        assert!(is_zip(&output));
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("no_such_dir").join("report.xlsx");

        let labels = FolderLabels::new("Folder1", "Folder2");
        let err = write_report(&output, &[], &labels).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }

    #[test]
    fn test_cell_formats() {
        let styles = CellStyles::new();
        let style = RowStyle {
            folder_fill: None,
            highlight_hash: true,
        };
        assert!(std::ptr::eq(styles.for_cell(HASH_COLUMN, style), &styles.duplicate_hash));
        assert!(std::ptr::eq(styles.for_cell(FOLDER_COLUMN, style), &styles.plain));

        let style = RowStyle {
            folder_fill: Some(FolderSlot::Second),
            highlight_hash: false,
        };
        assert!(std::ptr::eq(styles.for_cell(HASH_COLUMN, style), &styles.plain));
        assert!(std::ptr::eq(styles.for_cell(FOLDER_COLUMN, style), &styles.second_folder));
    }
}
