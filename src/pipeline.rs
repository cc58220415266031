//! Batch orchestration: partition, rewrite, persist, merge.

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::asset::Asset;
use crate::detector;
use crate::error::Result;
use crate::resolver::{self, ModuleNameResolver};
use crate::rewriter::{self, Rewrite};

/// Per-asset outcome of a pipeline run.
#[derive(Debug)]
pub enum Outcome {
    /// The asset passed through untouched.
    Unchanged(Asset),
    /// The asset was rewritten, persisted, and re-loaded from storage.
    Replaced(Asset),
}

impl Outcome {
    /// The asset carried by this outcome.
    pub fn asset(&self) -> &Asset {
        match self {
            Outcome::Unchanged(asset) | Outcome::Replaced(asset) => asset,
        }
    }

    /// Unwrap into the carried asset.
    pub fn into_asset(self) -> Asset {
        match self {
            Outcome::Unchanged(asset) | Outcome::Replaced(asset) => asset,
        }
    }

    /// Whether the asset was rewritten and re-loaded.
    pub fn is_replaced(&self) -> bool {
        matches!(self, Outcome::Replaced(_))
    }
}

/// A rewrite the pipeline would perform, as reported by
/// [`NamedModules::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRewrite {
    /// Diagnostic name of the asset.
    pub display_name: String,
    /// Module name that would be injected.
    pub module_name: String,
}

/// The named-modules transform.
///
/// Partitions a batch of assets into anonymous modules and everything
/// else, injects a resolved name into each anonymous definition, and
/// merges both halves back into one batch. Every input asset appears
/// exactly once in the output; output order is unrelated to input
/// order.
pub struct NamedModules {
    resolver: ModuleNameResolver,
    concurrency: usize,
    show_progress: bool,
}

impl NamedModules {
    /// Create a transform with the default naming policy.
    pub fn new() -> Self {
        Self {
            resolver: resolver::default_resolver(),
            concurrency: num_cpus::get() * 2,
            show_progress: false,
        }
    }

    /// Replace the naming policy with a caller-supplied resolver.
    pub fn with_resolver(mut self, resolver: ModuleNameResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set how many assets are persisted concurrently.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Show a progress bar while rewriting.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the transform over a batch.
    ///
    /// Assets are independent of each other, so rewritten files are
    /// persisted concurrently; each write goes to a distinct source
    /// path. Any storage failure aborts the whole batch — a build
    /// step is re-run wholesale on failure, so there is no per-asset
    /// recovery.
    pub async fn run(&self, batch: Vec<Asset>) -> Result<Vec<Outcome>> {
        let (anonymous, rest): (Vec<Asset>, Vec<Asset>) = batch
            .into_iter()
            .partition(|asset| detector::is_anonymous_module(&asset.content));

        info!(
            "Found {} anonymous modules among {} assets",
            anonymous.len(),
            anonymous.len() + rest.len()
        );

        let progress = if self.show_progress && !anonymous.is_empty() {
            let pb = ProgressBar::new(anonymous.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let rewritten: Vec<Result<Outcome>> = stream::iter(anonymous)
            .map(|asset| {
                let resolver = self.resolver.clone();
                let progress = progress.clone();

                async move {
                    let outcome = name_one(asset, &resolver).await;
                    if let Some(pb) = &progress {
                        pb.inc(1);
                    }
                    outcome
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        let mut outcomes: Vec<Outcome> = rest.into_iter().map(Outcome::Unchanged).collect();
        for result in rewritten {
            outcomes.push(result?);
        }

        Ok(outcomes)
    }

    /// Report the rewrites a run would perform, without touching
    /// storage.
    pub fn plan(&self, batch: &[Asset]) -> Vec<PlannedRewrite> {
        batch
            .iter()
            .filter(|asset| detector::is_anonymous_module(&asset.content))
            .filter_map(|asset| {
                let module_name = (self.resolver)(asset);
                match rewriter::name_module(&asset.content, &module_name) {
                    Rewrite::Changed(_) => Some(PlannedRewrite {
                        display_name: asset.display_name.clone(),
                        module_name,
                    }),
                    Rewrite::Unchanged => None,
                }
            })
            .collect()
    }
}

impl Default for NamedModules {
    fn default() -> Self {
        Self::new()
    }
}

async fn name_one(asset: Asset, resolver: &ModuleNameResolver) -> Result<Outcome> {
    let module_name = resolver(&asset);

    match rewriter::name_module(&asset.content, &module_name) {
        Rewrite::Unchanged => {
            // Detector and rewriter scan differently; an asset that
            // matches one but not the other passes through untouched.
            debug!(
                "{}: pattern absent on rewrite, passing through",
                asset.display_name
            );
            Ok(Outcome::Unchanged(asset))
        }
        Rewrite::Changed(new_content) => {
            debug!("{}: naming module \"{}\"", asset.display_name, module_name);
            let fresh = asset.replace(new_content).await?;
            Ok(Outcome::Replaced(fresh))
        }
    }
}
