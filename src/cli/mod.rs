//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::defaults::ENV_ROOT_DIR;
use crate::core::edition::EditionSelector;
use crate::core::orchestrator::{self, BatchSummary, ProjectSelector};
use crate::core::paths::DownloadPaths;
use output::ConsoleReporter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nbuilt:  ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\ntarget: ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    "\nrustc:  ",
    env!("VERGEN_RUSTC_SEMVER"),
);

/// Demopack - standalone downloads for dock manager demo projects
///
/// Packages every project under `projects/` (or a single named one) into
/// `downloads/<project>-<edition>.zip`.
#[derive(Parser, Debug)]
#[command(name = "demopack")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Project directory name, or `all`
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// Edition to build: premium, community or both
    #[arg(value_name = "EDITION")]
    pub edition: Option<EditionSelector>,

    /// Project to package (overrides the positional argument)
    #[arg(long = "project", env = "npm_config_project", value_name = "NAME")]
    pub project_flag: Option<String>,

    /// Edition to build (overrides the positional argument)
    #[arg(long, env = "npm_config_variant", value_name = "EDITION")]
    pub variant: Option<EditionSelector>,

    /// Repository root containing `projects/` and `downloads/`
    #[arg(long, env = ENV_ROOT_DIR, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Projects selected by flag, environment or positional argument
    pub fn project_selector(&self) -> ProjectSelector {
        ProjectSelector::parse(self.project_flag.as_deref().or(self.project.as_deref()))
    }

    /// Editions selected by flag, environment or positional argument
    pub fn edition_selector(&self) -> EditionSelector {
        self.variant.or(self.edition).unwrap_or_default()
    }

    /// Package the selected projects
    pub async fn run(self) -> Result<BatchSummary> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        let paths = DownloadPaths::from_root(&root);
        let projects = self.project_selector();
        let editions = self.edition_selector();
        tracing::debug!(
            root = %root.display(),
            %projects,
            %editions,
            "Starting packaging run"
        );

        let reporter = ConsoleReporter::new(self.quiet);
        let summary = orchestrator::run(&paths, &projects, editions, &reporter).await?;
        Ok(summary)
    }
}
