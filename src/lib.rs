//! Demopack - standalone zip downloads for dock manager demo projects
//!
//! Each project under `projects/` is packaged twice: a premium edition that
//! depends on the scoped dock manager package, and a community edition whose
//! manifest and imports point at the public package. The monorepo build
//! config is replaced by a standalone one and a readme is generated.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line parsing and console output
//! - [`core`] - The packaging pipeline
//! - [`infra`] - Filesystem and zip writing
//! - [`config`] - Constants
//! - [`error`] - Error types
//!
//! # Examples
//!
//! ```no_run
//! use demopack::core::edition::EditionSelector;
//! use demopack::core::orchestrator::{run, ProjectSelector};
//! use demopack::core::paths::DownloadPaths;
//! use demopack::core::report::MemoryReporter;
//!
//! # async fn example() -> Result<(), demopack::error::DemopackError> {
//! let paths = DownloadPaths::from_root("/path/to/repo");
//! let reporter = MemoryReporter::new();
//! let summary = run(&paths, &ProjectSelector::All, EditionSelector::Both, &reporter).await?;
//! println!("{} archives built", summary.built.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
