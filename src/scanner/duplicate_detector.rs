//! Duplicate detection over fingerprinted records

use std::collections::HashMap;

use crate::core::record::FileRecord;

/// Records sharing one content hash
#[derive(Debug, Clone)]
pub struct DuplicateInfo {
    pub hash: String,
    pub size: u64,
    pub files: Vec<FileRecord>,
}

/// Count how many records carry each hash
///
/// Independent of record order; a hash is duplicated iff its count is 2 or more.
pub fn count_hashes(records: &[FileRecord]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.hash.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Group records with identical hashes
///
/// # Returns
/// One `DuplicateInfo` per hash seen at least twice, in order of first
/// appearance. Files within a group keep their input order.
pub fn find_duplicates(records: &[FileRecord]) -> Vec<DuplicateInfo> {
    let mut groups: Vec<DuplicateInfo> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.hash.as_str()).copied() {
            Some(idx) => groups[idx].files.push(record.clone()),
            None => {
                index.insert(record.hash.as_str(), groups.len());
                groups.push(DuplicateInfo {
                    hash: record.hash.clone(),
                    size: record.size,
                    files: vec![record.clone()],
                });
            }
        }
    }

    groups.retain(|group| group.files.len() > 1);
    groups
}
