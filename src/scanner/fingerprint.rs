//! Content hashing and per-file metadata

use md5::Md5;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use super::file_scanner::LabeledPath;
use crate::core::error::{ReportError, Result};
use crate::core::record::{FileRecord, HashAlgorithm};

/// Read size for streaming hashes (1 MiB)
pub const CHUNK_SIZE: usize = 1024 * 1024;

fn digest_reader<D: Digest, R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect())
}

/// Hash everything `reader` yields
///
/// # Returns
/// Lowercase hex digest
pub fn hash_reader<R: Read>(reader: R, algorithm: HashAlgorithm) -> io::Result<String> {
    match algorithm {
        HashAlgorithm::Md5 => digest_reader::<Md5, _>(reader),
        HashAlgorithm::Sha256 => digest_reader::<Sha256, _>(reader),
    }
}

/// Compute the content hash of a file
pub fn compute_file_hash(path: &Path, algorithm: HashAlgorithm) -> Result<String> {
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    hash_reader(file, algorithm).map_err(|e| ReportError::io(path, e))
}

/// Fingerprint one file into a [`FileRecord`]
///
/// Size comes from the open handle's metadata; the handle is dropped
/// before returning, on success or error.
pub fn fingerprint_file(entry: &LabeledPath, algorithm: HashAlgorithm) -> Result<FileRecord> {
    let path = entry.path.as_path();
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    let size = file.metadata().map_err(|e| ReportError::io(path, e))?.len();
    let hash = hash_reader(file, algorithm).map_err(|e| ReportError::io(path, e))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(path = %path.display(), size, %hash, "fingerprinted");

    Ok(FileRecord::new(name, hash, size, entry.folder_label.clone()))
}
