/*!
 * End-to-end test for the exact shape of the generated document
 */

use std::fs::{self, File};
use std::io::Write;
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use dir2md::{Config, MarkdownWriter, RuleSet};

#[test]
fn generated_document_matches_expected_layout() {
    let temp_dir = tempdir().expect("create temp dir");
    let root = temp_dir.path().join("proj");
    fs::create_dir(&root).expect("create root");
    fs::create_dir(root.join("sub")).expect("create sub");

    let mut file = File::create(root.join("main.py")).expect("create main.py");
    write!(file, "print('hi')\n").expect("write main.py");

    let mut file = File::create(root.join("notes.txt")).expect("create notes.txt");
    write!(file, "notes\n").expect("write notes.txt");

    let mut file = File::create(root.join("sub").join("util.py")).expect("create util.py");
    write!(file, "x = 1\n").expect("write util.py");

    let config = Config {
        target_dir: root,
        output_dir: temp_dir.path().join("out"),
        include_patterns: vec![],
        include_regexes: vec![],
        exclude_patterns: vec![],
        exclude_regexes: vec![],
        recursive: true,
    };

    let rules = RuleSet::from_config(&config).expect("build rules");
    let writer = MarkdownWriter::new(config, rules, Arc::new(ProgressBar::hidden()));
    let (path, stats) = writer.write().expect("write document");

    let doc = fs::read_to_string(&path).expect("read document");
    let expected = "# Directory Structure\n\
                    \n\
                    ```\n\
                    proj\n\
                    ├── sub\n\
                    │   └── util.py\n\
                    ├── main.py\n\
                    └── notes.txt\n\
                    ```\n\
                    \n\
                    # File Contents\n\
                    \n\
                    `main.py`\n\
                    ```py\n\
                    print('hi')\n\
                    \n\
                    ```\n\
                    \n\
                    `notes.txt`\n\
                    ```txt\n\
                    notes\n\
                    \n\
                    ```\n\
                    \n\
                    `sub/util.py`\n\
                    ```py\n\
                    x = 1\n\
                    \n\
                    ```\n\
                    \n";

    assert_eq!(doc, expected);
    assert_eq!(stats.files_processed, 3);
    assert_eq!(stats.total_lines, 3);
    assert_eq!(stats.binary_files, 0);
    assert_eq!(stats.read_errors, 0);
}
