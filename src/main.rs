/*!
 * Command-line interface for dir2md
 */

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use dir2md::config::{Args, Config};
use dir2md::error::Result;
use dir2md::filter::RuleSet;
use dir2md::report::{ReportFormat, Reporter, ScanReport};
use dir2md::utils::count_files;
use dir2md::writer::MarkdownWriter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    // Compile the selection rules up front so pattern errors fail fast
    let rules = RuleSet::from_config(&config)?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("Processing");
    progress.set_message(format!("Scanning directory: {}", config.target_dir.display()));

    // Count files for progress tracking
    let total_files = match count_files(&config.target_dir, &rules, config.recursive) {
        Ok(count) => count,
        Err(e) => {
            progress.set_message(format!("Warning: failed to count files: {}", e));
            0
        }
    };
    progress.set_length(total_files);

    // Assemble and write the document
    let start_time = Instant::now();
    let writer = MarkdownWriter::new(config, rules, Arc::new(progress.clone()));
    let (output_path, stats) = writer.write()?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    // Prepare and print the run report
    let report = ScanReport {
        output_file: output_path.display().to_string(),
        duration,
        files_processed: stats.files_processed,
        binary_files: stats.binary_files,
        read_errors: stats.read_errors,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        file_details: stats.file_details,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    Ok(())
}
