/*!
 * Configuration handling for dir2md
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{Dir2MdError, Result};

/// Command-line arguments for dir2md
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dir2md",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate Markdown documentation from directory structure and file contents",
    long_about = "Creates a Markdown document containing a visual tree of a directory \
                  structure followed by the contents of every included file, with \
                  wildcard and regex include/exclude filtering."
)]
pub struct Args {
    /// Input directory to process
    #[clap(default_value = ".")]
    pub input_dir: String,

    /// Output directory for the generated Markdown file (created if absent)
    #[clap(default_value = ".")]
    pub output_dir: String,

    /// Only include files matching this wildcard pattern (repeatable)
    #[clap(short = 'i', long = "include")]
    pub include: Vec<String>,

    /// Only include files matching this regex pattern (repeatable)
    #[clap(short = 'I', long = "include-regex")]
    pub include_regex: Vec<String>,

    /// Exclude files/directories matching this wildcard pattern (repeatable)
    #[clap(short = 'e', long = "exclude")]
    pub exclude: Vec<String>,

    /// Exclude files/directories matching this regex pattern (repeatable)
    #[clap(short = 'E', long = "exclude-regex")]
    pub exclude_regex: Vec<String>,

    /// Do not process subdirectories recursively
    #[clap(long = "no-recursive")]
    pub no_recursive: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to process
    pub target_dir: PathBuf,

    /// Directory the output document is written into
    pub output_dir: PathBuf,

    /// Wildcard patterns to include (if empty together with the regex
    /// includes, include all)
    pub include_patterns: Vec<String>,

    /// Regex patterns to include
    pub include_regexes: Vec<String>,

    /// Wildcard patterns to exclude
    pub exclude_patterns: Vec<String>,

    /// Regex patterns to exclude
    pub exclude_regexes: Vec<String>,

    /// Whether to descend into subdirectories
    pub recursive: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.input_dir),
            output_dir: PathBuf::from(args.output_dir),
            include_patterns: args.include,
            include_regexes: args.include_regex,
            exclude_patterns: args.exclude,
            exclude_regexes: args.exclude_regex,
            recursive: !args.no_recursive,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() || !self.target_dir.is_dir() {
            return Err(Dir2MdError::InvalidRoot(self.target_dir.clone()));
        }

        Ok(())
    }
}
