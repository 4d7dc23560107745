//! Demopack CLI - standalone zip downloads for dock manager demo projects
//!
//! Entry point for the demopack command-line application.

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use demopack::cli::output::display_error;
use demopack::cli::Cli;
use demopack::error::DemopackError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    // Failed builds are reported per archive and do not change the exit code
    match cli.run().await {
        Ok(summary) => {
            tracing::info!(
                built = summary.built.len(),
                failed = summary.failed.len(),
                "Packaging run complete"
            );
            Ok(())
        }
        Err(e) => {
            // Already reported by the pipeline
            if !matches!(
                e.downcast_ref::<DemopackError>(),
                Some(DemopackError::NoProjects { .. })
            ) {
                display_error(&e);
            }
            std::process::exit(1);
        }
    }
}
