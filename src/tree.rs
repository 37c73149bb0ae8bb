/*!
 * Box-drawing tree rendering for dir2md
 *
 * Produces the human-readable directory listing that opens the output
 * document. The walk mirrors the scanner's selection exactly: both consult
 * the same `RuleSet`, so the displayed tree and the content dump cannot
 * drift apart. The one visible asymmetry is inherited from selection
 * itself: a non-excluded directory is shown even when no included file
 * lives inside it.
 */

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::filter::{Check, RuleSet};

/// Render the directory tree as display lines joined with newlines.
///
/// The first line is the root directory's own name, without a connector.
/// At each level, subdirectories sort before files and each group sorts
/// alphabetically. With `recursive` off, the root's immediate children are
/// still listed, but directories appear as bare leaf entries and are not
/// expanded.
pub fn render_tree(root: &Path, rules: &RuleSet, recursive: bool) -> Result<String> {
    let root = fs::canonicalize(root)?;
    let name = root
        .file_name()
        .unwrap_or(root.as_os_str())
        .to_string_lossy()
        .to_string();

    let mut lines = vec![name];
    render_level(&root, &root, rules, recursive, "", &mut lines)?;

    Ok(lines.join("\n"))
}

fn render_level(
    root: &Path,
    dir: &Path,
    rules: &RuleSet,
    recursive: bool,
    prefix: &str,
    lines: &mut Vec<String>,
) -> Result<()> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let is_dir = entry.file_type().is_dir();
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        let check = if is_dir { Check::Directory } else { Check::File };
        if rules.allows(&rel, check) {
            entries.push((entry, is_dir));
        }
    }

    // Directories before files, each group alphabetical
    entries.sort_by_key(|(entry, is_dir)| (!*is_dir, entry.file_name().to_os_string()));

    let count = entries.len();
    for (index, (entry, is_dir)) in entries.into_iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        lines.push(format!(
            "{}{}{}",
            prefix,
            connector,
            entry.file_name().to_string_lossy()
        ));

        if is_dir && recursive {
            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            render_level(root, entry.path(), rules, recursive, &child_prefix, lines)?;
        }
    }

    Ok(())
}
