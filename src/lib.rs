/*!
 * dir2md - Generate Markdown documentation of directory contents
 *
 * This library walks a directory tree and produces a single Markdown
 * document combining a visual tree of the directory structure with the
 * contents of every included file, fenced and labeled with its
 * root-relative path.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{Dir2MdError, Result};
pub use filter::{Check, RuleSet};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use tree::render_tree;
pub use types::{FileContent, FileRecord};
pub use utils::{count_files, is_binary_file};
pub use writer::{MarkdownWriter, WriterStatistics, BINARY_PLACEHOLDER};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
