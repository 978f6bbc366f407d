//! Utility functions for bpdex.

use std::fs;
use std::path::Path;

use crate::error::{Result, TrackerError};

/// Maximum file size that can be read into memory (10 MB).
///
/// Datasets and status files are small; anything above this limit is
/// corrupt or not ours.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10 MB

/// Read a file into a string with size limit protection.
///
/// Returns an error if the file exceeds `MAX_FILE_SIZE` or cannot be read.
pub fn read_to_string_limited(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| TrackerError::storage(path, e))?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        return Err(TrackerError::dataset(format!(
            "File {} is too large ({} bytes, max {} bytes)",
            path.display(),
            size,
            MAX_FILE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| TrackerError::storage(path, e))
}
