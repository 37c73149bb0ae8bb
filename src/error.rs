//! Global error handling for dir2md
//!
//! Only fatal conditions live here: an unusable input directory, a
//! directory that cannot be listed mid-walk, a pattern that fails to
//! compile, or an output I/O failure. Per-file read problems are not
//! errors at this level; they degrade to inline placeholders in the
//! output document (see `writer`).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Global error type for dir2md operations
#[derive(Error, Debug)]
pub enum Dir2MdError {
    /// Input path missing or not a directory
    #[error("Input directory not found or not a directory: {0}")]
    InvalidRoot(PathBuf),

    /// A directory could not be listed during traversal
    #[error("Failed to traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A regex pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for dir2md operations
pub type Result<T> = std::result::Result<T, Dir2MdError>;

impl From<walkdir::Error> for Dir2MdError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        Dir2MdError::Traversal {
            path,
            source: err.into(),
        }
    }
}
