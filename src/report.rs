//! JSON summaries of a pipeline run, for consumption by build tooling.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::pipeline::Outcome;

/// Summary of one pipeline run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Total assets that entered the pipeline
    pub scanned: usize,
    /// Assets rewritten with an injected module name
    pub renamed: usize,
    /// Assets that passed through untouched
    pub unchanged: usize,
    /// Source paths of the rewritten assets
    pub renamed_files: Vec<PathBuf>,
}

impl RunReport {
    /// Summarize a run from its per-asset outcomes.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let renamed_files: Vec<PathBuf> = outcomes
            .iter()
            .filter(|outcome| outcome.is_replaced())
            .map(|outcome| outcome.asset().source_path.clone())
            .collect();

        Self {
            scanned: outcomes.len(),
            renamed: renamed_files.len(),
            unchanged: outcomes.len() - renamed_files.len(),
            renamed_files,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
