/*!
 * Directory and file collection functionality
 */

use std::fs;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::filter::{Check, RuleSet};
use crate::types::FileRecord;

/// Scanner for directory contents
///
/// Walks the target directory and produces the ordered list of files that
/// belong in the output document. Directories the rule set excludes are
/// pruned without being descended into, which is what keeps exclude-only
/// rules like `.git` cheap on large trees.
pub struct Scanner {
    config: Config,
    rules: RuleSet,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, rules: RuleSet) -> Self {
        Self { config, rules }
    }

    /// Collect the files to process, sorted ascending by relative path
    /// string. That ordering is a contract: it determines the order of
    /// content blocks in the final document.
    ///
    /// Any directory that cannot be listed mid-walk aborts the whole
    /// collection; no partial result is returned.
    pub fn collect_files(&self) -> Result<Vec<FileRecord>> {
        let root = fs::canonicalize(&self.config.target_dir)?;
        let mut records = Vec::new();

        if self.config.recursive {
            let rules = &self.rules;
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

            for entry in walker {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let rel_path = entry
                    .path()
                    .strip_prefix(&root)
                    .unwrap_or_else(|_| entry.path())
                    .to_path_buf();
                records.push(FileRecord {
                    path: entry.into_path(),
                    rel_path,
                });
            }
        } else {
            // Only the immediate children of the root; subdirectories are
            // never descended
            for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let rel_path = entry
                    .path()
                    .strip_prefix(&root)
                    .unwrap_or_else(|_| entry.path())
                    .to_path_buf();
                if self.rules.allows(&rel_path, Check::File) {
                    records.push(FileRecord {
                        path: entry.into_path(),
                        rel_path,
                    });
                }
            }
        }

        records.sort_by(|a, b| {
            a.rel_path
                .to_string_lossy()
                .cmp(&b.rel_path.to_string_lossy())
        });

        Ok(records)
    }
}
