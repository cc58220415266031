//! CLI argument parsing for amdnamer.

use std::path::PathBuf;

use clap::Parser;

/// amdnamer - names anonymous AMD/RequireJS modules for bundling
///
/// Scans a directory tree for JavaScript files containing an anonymous
/// `define([...], ...)` call and rewrites each one to
/// `define("<name>", [...], ...)` so that concatenated bundles stay
/// addressable by module loaders.
#[derive(Parser, Debug)]
#[command(name = "amdnamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for source files
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// File extension the transform applies to
    #[arg(long, default_value = "js")]
    pub ext: String,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Number of files rewritten concurrently (default: CPU count * 2)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Namespace prefix prepended to resolved module names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Write a JSON summary of the run to this path
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}
