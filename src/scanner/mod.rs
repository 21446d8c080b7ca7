//! File enumeration, fingerprinting and duplicate detection

pub mod file_scanner;
pub mod fingerprint;
pub mod duplicate_detector;

pub use file_scanner::{collect_files, walk_labeled, LabeledFiles, LabeledPath};
pub use fingerprint::{compute_file_hash, fingerprint_file, hash_reader, CHUNK_SIZE};
pub use duplicate_detector::{count_hashes, find_duplicates, DuplicateInfo};
