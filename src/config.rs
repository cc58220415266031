//! Configuration for a transform run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Configuration for a transform run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extension the transform applies to, without the dot
    pub ext: String,

    /// Number of files rewritten concurrently
    pub concurrency: usize,

    /// Classify and plan only; never write to disk
    pub dry_run: bool,

    /// Namespace prefix prepended to resolved module names
    pub prefix: Option<String>,

    /// Progress bar enabled
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ext: "js".to_string(),
            concurrency: num_cpus::get() * 2,
            dry_run: false,
            prefix: None,
            progress: true,
        }
    }
}

impl Config {
    /// Build a config from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Config::default();

        Self {
            ext: cli.ext.trim_start_matches('.').to_string(),
            concurrency: cli.concurrency.unwrap_or(defaults.concurrency),
            dry_run: cli.dry_run,
            prefix: cli.prefix.clone(),
            progress: !cli.no_progress,
        }
    }

    /// Whether a path carries the configured extension tag.
    pub fn matches_tag(&self, path: &Path) -> bool {
        path.extension()
            .map_or(false, |ext| ext.to_string_lossy().eq_ignore_ascii_case(&self.ext))
    }
}
