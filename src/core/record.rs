//! File records and the per-name heuristics that feed them

use regex::Regex;
use std::fmt;

/// Marker written to the Content Type column for names that look like scanned forms.
pub const FORM_HINT: &str = "Form(maybe)";

lazy_static::lazy_static! {
    static ref FORM_PREFIX: Regex = Regex::new(r"^\([A-Za-z0-9]+\)").unwrap();
}

/// Content hash algorithm used to fingerprint files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HashAlgorithm {
    /// 128-bit MD5, 32 hex characters
    #[default]
    Md5,
    /// 256-bit SHA-256, 64 hex characters
    Sha256,
}

impl HashAlgorithm {
    /// Length of the hex digest this algorithm produces
    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha256 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
        }
    }
}

/// One fingerprinted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub hash: String,
    pub extension: String,
    pub size: u64,
    pub folder_label: String,
    pub content_type_hint: String,
}

impl FileRecord {
    /// Build a record, deriving extension and content hint from `name`
    pub fn new(
        name: impl Into<String>,
        hash: impl Into<String>,
        size: u64,
        folder_label: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            extension: file_extension(&name),
            content_type_hint: content_type_hint(&name).to_string(),
            name,
            hash: hash.into(),
            size,
            folder_label: folder_label.into(),
        }
    }
}

/// Lowercased extension from the last `.` onward, or empty
///
/// A leading dot counts too: `.bashrc` yields `.bashrc`, unlike
/// `Path::extension` which treats it as a bare name.
pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx..].to_lowercase(),
        None => String::new(),
    }
}

/// `FORM_HINT` if the name starts with a parenthesised alphanumeric token
pub fn content_type_hint(name: &str) -> &'static str {
    if FORM_PREFIX.is_match(name) {
        FORM_HINT
    } else {
        ""
    }
}
