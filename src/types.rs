/*!
 * Core types and data structures for the dir2md application
 */

use std::path::PathBuf;

/// A file selected for inclusion in the output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path, used for reading the file
    pub path: PathBuf,
    /// Path relative to the scan root, used for display, matching and
    /// ordering
    pub rel_path: PathBuf,
}

/// The resolved body of one content block in the output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Full literal UTF-8 text of the file
    Text(String),
    /// Non-text content, replaced by a fixed placeholder
    Binary,
    /// The file could not be read; the reason is emitted inline
    Unreadable(String),
}
