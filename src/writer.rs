/*!
 * Markdown document assembly for dir2md
 *
 * The writer owns the whole output pipeline: it renders the tree, collects
 * the file records, and emits the two-section document. File contents are
 * copied verbatim; binary files and unreadable files degrade to inline
 * placeholders so a single bad file never aborts the run.
 */

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::Result;
use crate::filter::RuleSet;
use crate::report::FileReportInfo;
use crate::scanner::Scanner;
use crate::tree::render_tree;
use crate::types::{FileContent, FileRecord};
use crate::utils::is_binary_file;

/// Placeholder emitted in place of non-text file content
pub const BINARY_PLACEHOLDER: &str = "/* Binary file not shown */";

/// Per-run statistics collected while the document is written
#[derive(Debug, Clone, Default)]
pub struct WriterStatistics {
    /// Number of files processed
    pub files_processed: usize,
    /// Number of files replaced by the binary placeholder
    pub binary_files: usize,
    /// Number of files replaced by a read-error placeholder
    pub read_errors: usize,
    /// Total number of lines across text files
    pub total_lines: usize,
    /// Total number of characters across text files
    pub total_chars: usize,
    /// Details for each file, keyed by relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Markdown writer for directory contents
pub struct MarkdownWriter {
    config: Config,
    rules: RuleSet,
    progress: Arc<ProgressBar>,
}

impl MarkdownWriter {
    /// Create a new Markdown writer
    pub fn new(config: Config, rules: RuleSet, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            rules,
            progress,
        }
    }

    /// Assemble and write the output document.
    ///
    /// Creates the output directory if absent and writes
    /// `<rootName>_content.md` inside it. Returns the output path and the
    /// statistics gathered along the way.
    pub fn write(&self) -> Result<(PathBuf, WriterStatistics)> {
        let tree = render_tree(&self.config.target_dir, &self.rules, self.config.recursive)?;
        let scanner = Scanner::new(self.config.clone(), self.rules.clone());
        let files = scanner.collect_files()?;

        fs::create_dir_all(&self.config.output_dir)?;
        let root = fs::canonicalize(&self.config.target_dir)?;
        let dir_name = root
            .file_name()
            .unwrap_or(root.as_os_str())
            .to_string_lossy()
            .to_string();
        let output_path = self.config.output_dir.join(format!("{}_content.md", dir_name));

        let file = File::create(&output_path)?;
        let mut out = BufWriter::new(file);
        let mut stats = WriterStatistics::default();

        writeln!(out, "# Directory Structure")?;
        writeln!(out)?;
        writeln!(out, "```")?;
        writeln!(out, "{}", tree)?;
        writeln!(out, "```")?;
        writeln!(out)?;
        writeln!(out, "# File Contents")?;
        writeln!(out)?;

        for record in &files {
            self.progress.inc(1);
            self.progress
                .set_message(record.rel_path.display().to_string());
            self.write_file_block(&mut out, record, &mut stats)?;
        }

        out.flush()?;

        Ok((output_path, stats))
    }

    /// Emit one labeled, fenced content block
    fn write_file_block<W: Write>(
        &self,
        out: &mut W,
        record: &FileRecord,
        stats: &mut WriterStatistics,
    ) -> Result<()> {
        let tag = record
            .rel_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();
        let rel = record.rel_path.display().to_string();

        writeln!(out, "`{}`", rel)?;
        writeln!(out, "```{}", tag)?;

        stats.files_processed += 1;
        match read_content(&record.path) {
            FileContent::Text(text) => {
                let info = FileReportInfo {
                    lines: text.lines().count(),
                    chars: text.chars().count(),
                };
                stats.total_lines += info.lines;
                stats.total_chars += info.chars;
                stats.file_details.insert(rel, info);
                write!(out, "{}", text)?;
            }
            FileContent::Binary => {
                stats.binary_files += 1;
                stats.file_details.insert(rel, FileReportInfo::default());
                write!(out, "{}", BINARY_PLACEHOLDER)?;
            }
            FileContent::Unreadable(reason) => {
                stats.read_errors += 1;
                stats.file_details.insert(rel, FileReportInfo::default());
                write!(out, "/* Error reading file: {} */", reason)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "```")?;
        writeln!(out)?;

        Ok(())
    }
}

/// Resolve the body of a file's content block.
///
/// Classification and reading are both recovered locally: any failure
/// becomes an `Unreadable` placeholder rather than an error.
pub fn read_content(path: &Path) -> FileContent {
    match is_binary_file(path) {
        Ok(true) => FileContent::Binary,
        Ok(false) => match fs::read_to_string(path) {
            Ok(text) => FileContent::Text(text),
            Err(err) => FileContent::Unreadable(err.to_string()),
        },
        Err(err) => FileContent::Unreadable(err.to_string()),
    }
}
