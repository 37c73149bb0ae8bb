/*!
 * Utility functions for dir2md
 */

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use walkdir::WalkDir;

use crate::filter::{Check, RuleSet};

/// Size of the leading byte window inspected for binary detection
const BINARY_CHECK_BYTES: u64 = 1024;

/// Count the files that would be included, for progress tracking.
///
/// Applies the same pruning as the scanner; walk errors are skipped here
/// since the count only primes the progress bar length.
pub fn count_files(dir: &Path, rules: &RuleSet, recursive: bool) -> io::Result<u64> {
    let root = fs::canonicalize(dir)?;
    let mut count = 0;

    if recursive {
        let walker = WalkDir::new(&root).min_depth(1).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let rel = entry.path().strip_prefix(&root).unwrap_or_else(|_| entry.path());
            let check = if entry.file_type().is_dir() {
                Check::Directory
            } else {
                Check::File
            };
            rules.allows(rel, check)
        });

        for entry in walker.filter_map(std::result::Result::ok) {
            if entry.file_type().is_file() {
                count += 1;
            }
        }
    } else {
        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let rel = entry.path().strip_prefix(&root).unwrap_or_else(|_| entry.path());
            if entry.file_type().is_file() && rules.allows(rel, Check::File) {
                count += 1;
            }
        }
    }

    Ok(count)
}

/// Check whether a file holds non-text content.
///
/// Reads a fixed-size leading window and classifies the file as binary if
/// it fails to decode as UTF-8. A multi-byte sequence cut off at the
/// window edge still counts as text.
pub fn is_binary_file(path: &Path) -> io::Result<bool> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(BINARY_CHECK_BYTES as usize);
    file.take(BINARY_CHECK_BYTES).read_to_end(&mut buffer)?;

    match std::str::from_utf8(&buffer) {
        Ok(_) => Ok(false),
        Err(err) if err.error_len().is_none() => Ok(false),
        Err(_) => Ok(true),
    }
}
