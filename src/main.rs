//! amdnamer - names anonymous AMD/RequireJS modules for bundling.
//!
//! This is the main entry point for the amdnamer binary. It plays the
//! host-pipeline role: collecting matching files from a directory
//! tree, feeding them through the transform, and reporting a summary.

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkdir::WalkDir;

use amdnamer::asset::Asset;
use amdnamer::cli::Cli;
use amdnamer::config::Config;
use amdnamer::error::Result;
use amdnamer::pipeline::NamedModules;
use amdnamer::report::RunReport;
use amdnamer::resolver;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    // Collect the batch. The transform only applies to the configured
    // extension tag, so filter before the core ever sees a file.
    let mut batch = Vec::new();
    for entry in WalkDir::new(&cli.dir) {
        let entry = entry?;
        if entry.file_type().is_file() && config.matches_tag(entry.path()) {
            batch.push(Asset::read(entry.path()).await?);
        }
    }

    if batch.is_empty() {
        if !cli.quiet {
            println!(
                "{} under {}",
                "No matching files found".yellow(),
                cli.dir.display()
            );
        }
        return Ok(());
    }

    let mut transform = NamedModules::new()
        .with_concurrency(config.concurrency)
        .with_progress(config.progress && !cli.quiet);

    if let Some(prefix) = &config.prefix {
        transform = transform.with_resolver(resolver::prefixed_resolver(prefix.clone()));
    }

    if config.dry_run {
        let planned = transform.plan(&batch);
        for change in &planned {
            println!(
                "{} {} {} {}",
                "would name".dimmed(),
                change.display_name.cyan(),
                "as".dimmed(),
                change.module_name.green()
            );
        }
        if !cli.quiet {
            println!(
                "{} of {} files would be rewritten",
                planned.len().to_string().green(),
                batch.len()
            );
        }
        return Ok(());
    }

    let outcomes = transform.run(batch).await?;
    let report = RunReport::from_outcomes(&outcomes);

    if !cli.quiet {
        println!(
            "{} named, {} unchanged ({} scanned)",
            report.renamed.to_string().green().bold(),
            report.unchanged.to_string().dimmed(),
            report.scanned
        );
    }

    if cli.verbose {
        for path in &report.renamed_files {
            println!("  {} {}", "named".green(), path.display());
        }
    }

    if let Some(path) = &cli.report {
        report.write(path)?;
        if !cli.quiet {
            println!("Report written to {}", path.display().cyan());
        }
    }

    Ok(())
}
