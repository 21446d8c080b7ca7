//! Reads a written report back out of its .xlsx archive
//!
//! Only what the tests look at: cell values (shared strings resolved,
//! numbers parsed), the style index of every cell, and the row count.

#![allow(dead_code)]

use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetCell {
    pub style: u32,
    pub value: CellValue,
}

/// The first worksheet of a workbook
pub struct Sheet {
    cells: HashMap<String, SheetCell>,
    pub row_count: usize,
}

impl Sheet {
    pub fn cell(&self, reference: &str) -> &SheetCell {
        self.cells
            .get(reference)
            .unwrap_or_else(|| panic!("cell {} missing from sheet", reference))
    }

    pub fn text(&self, reference: &str) -> &str {
        match &self.cell(reference).value {
            CellValue::Text(text) => text,
            other => panic!("cell {} is not text: {:?}", reference, other),
        }
    }

    pub fn number(&self, reference: &str) -> f64 {
        match self.cell(reference).value {
            CellValue::Number(number) => number,
            ref other => panic!("cell {} is not a number: {:?}", reference, other),
        }
    }

    pub fn style(&self, reference: &str) -> u32 {
        self.cell(reference).style
    }

    /// Text of one column over the data rows (row 2 onward)
    pub fn column_text(&self, column: char) -> Vec<String> {
        (2..=self.row_count)
            .map(|row| self.text(&format!("{}{}", column, row)).to_string())
            .collect()
    }

    /// Style index of one column over the data rows
    pub fn column_styles(&self, column: char) -> Vec<u32> {
        (2..=self.row_count)
            .map(|row| self.style(&format!("{}{}", column, row)))
            .collect()
    }
}

fn read_entry(archive: &mut zip::ZipArchive<File>, name: &str) -> Option<String> {
    let mut entry = archive.by_name(name).ok()?;
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    Some(content)
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn joined_text(fragment: &str) -> String {
    let text_run = Regex::new(r"(?s)<t[^>]*>(.*?)</t>").unwrap();
    text_run
        .captures_iter(fragment)
        .map(|c| unescape(&c[1]))
        .collect()
}

/// Open `path` and parse `xl/worksheets/sheet1.xml`
pub fn read_sheet(path: &Path) -> Sheet {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();

    let shared: Vec<String> = read_entry(&mut archive, "xl/sharedStrings.xml")
        .map(|xml| {
            let item = Regex::new(r"(?s)<si>(.*?)</si>").unwrap();
            item.captures_iter(&xml).map(|c| joined_text(&c[1])).collect()
        })
        .unwrap_or_default();

    let xml = read_entry(&mut archive, "xl/worksheets/sheet1.xml").expect("sheet1.xml present");

    let row = Regex::new(r#"<row r="(\d+)""#).unwrap();
    let row_count = row.captures_iter(&xml).count();

    let cell = Regex::new(r#"(?s)<c r="([A-Z]+[0-9]+)"([^>]*?)(?:/>|>(.*?)</c>)"#).unwrap();
    let style_attr = Regex::new(r#"\ss="(\d+)""#).unwrap();
    let type_attr = Regex::new(r#"\st="(\w+)""#).unwrap();
    let value_tag = Regex::new(r"(?s)<v>(.*?)</v>").unwrap();

    let mut cells = HashMap::new();
    for caps in cell.captures_iter(&xml) {
        let attrs = &caps[2];
        let body = caps.get(3).map(|m| m.as_str()).unwrap_or("");
        let style = style_attr
            .captures(attrs)
            .map(|c| c[1].parse().unwrap())
            .unwrap_or(0);
        let raw = value_tag.captures(body).map(|c| c[1].to_string());

        let value = match (type_attr.captures(attrs).map(|c| c[1].to_string()), raw) {
            (Some(t), Some(raw)) if t == "s" => {
                CellValue::Text(shared[raw.parse::<usize>().unwrap()].clone())
            }
            (Some(t), Some(raw)) if t == "str" => CellValue::Text(unescape(&raw)),
            (Some(t), _) if t == "inlineStr" => CellValue::Text(joined_text(body)),
            (None, Some(raw)) => CellValue::Number(raw.parse().unwrap()),
            _ => CellValue::Blank,
        };

        cells.insert(caps[1].to_string(), SheetCell { style, value });
    }

    Sheet { cells, row_count }
}

/// Worksheet names listed in `xl/workbook.xml`
pub fn sheet_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let xml = read_entry(&mut archive, "xl/workbook.xml").expect("workbook.xml present");
    let sheet = Regex::new(r#"<sheet name="([^"]*)""#).unwrap();
    sheet.captures_iter(&xml).map(|c| unescape(&c[1])).collect()
}
