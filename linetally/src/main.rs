//! # linetally
//!
//! A CLI tool that recursively scans a directory tree, counts newline bytes
//! in every matching file, and prints a summary grouped by file extension
//! or by containing directory.
//!
//! ## Overview
//!
//! linetally is built on top of linetallylib and provides the command-line
//! interface for the scan pipeline: glob-based file discovery, a
//! configurable worker pool, and a line-count table sorted by descending
//! line total.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize the current directory by extension
//! linetally
//!
//! # Scan a specific tree, excluding logs
//! linetally src/ --exclude "**/*.log"
//!
//! # Group by containing directory with 8 worker threads
//! linetally . --group-by directory --threads 8
//!
//! # Output as JSON
//! linetally . --output json
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use linetallylib::{discover_files, scan_files, FilterConfig, Grouping, ScanOptions};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linetally")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Counts newline bytes per file and summarizes by extension or directory")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("pattern")
                .short('p')
                .long("pattern")
                .default_value("**")
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern (can be specified multiple times)"),
        )
        .arg(
            Arg::new("group-by")
                .short('g')
                .long("group-by")
                .value_parser(["extension", "directory"])
                .default_value("extension")
                .help("Group totals by file extension or by containing directory"),
        )
        .arg(
            Arg::new("buffer-length")
                .short('b')
                .long("buffer-length")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("4096")
                .help("Read buffer size in bytes"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("1")
                .help("Number of worker threads"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let pattern = matches
        .get_one::<String>("pattern")
        .map(|s| s.as_str())
        .unwrap_or("**");

    let mut filter = FilterConfig::new().include(pattern)?;

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let pattern = matches
        .get_one::<String>("pattern")
        .map(|s| s.as_str())
        .unwrap_or("**");
    let grouping: Grouping = matches
        .get_one::<String>("group-by")
        .map(|s| s.as_str())
        .unwrap_or("extension")
        .parse()?;
    let buffer_size = matches
        .get_one::<u64>("buffer-length")
        .copied()
        .unwrap_or(4096) as usize;
    let threads = matches.get_one::<u64>("threads").copied().unwrap_or(1) as usize;

    let filter = build_filter(matches)?;

    let root = std::fs::canonicalize(path)
        .with_context(|| format!("cannot resolve path '{path}'"))?;

    let discovery = discover_files(&root, &filter)?;

    println!("Scanning: {}", root.display());
    println!("Pattern: {pattern}");
    println!("Files found: {}", discovery.files.len());
    println!();

    for err in &discovery.errors {
        eprintln!("warning: {err}");
    }

    let options = ScanOptions::new()
        .grouping(grouping)
        .buffer_size(buffer_size)
        .threads(threads);
    let outcome = scan_files(discovery.files, &options)?;

    // Per-file failures are diagnostics, never a failed exit
    for err in &outcome.errors {
        eprintln!("warning: {err}");
    }

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");
    if output == "json" {
        println!("{}", render::render_json(&outcome.rows)?);
    } else {
        print!("{}", render::render_table(&outcome.rows, grouping));
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
