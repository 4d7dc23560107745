//! Batch orchestration
//!
//! Expands a (project selector, edition selector) request into individual
//! archive builds and runs them one after another. A failed build is
//! reported and skipped; only an empty project list aborts the run.

use std::fmt;
use std::path::Path;

use crate::core::builder::{build_archive, ArchiveReport};
use crate::core::edition::{Edition, EditionSelector};
use crate::core::paths::DownloadPaths;
use crate::core::report::{timed, Reporter};
use crate::error::DemopackError;
use crate::infra::filesystem;

/// Which projects a run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSelector {
    /// Every project under the projects directory
    All,
    /// A single project by directory name
    Named(String),
}

impl ProjectSelector {
    /// `None`, an empty string and `all` select every project
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("" | "all") => Self::All,
            Some(name) => Self::Named(name.to_string()),
        }
    }
}

impl fmt::Display for ProjectSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// A build that did not produce an archive
#[derive(Debug, Clone)]
pub struct FailedBuild {
    pub project: String,
    pub edition: Edition,
    pub error: String,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub built: Vec<ArchiveReport>,
    pub failed: Vec<FailedBuild>,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Project directory names under `projects_dir`, sorted.
///
/// Hidden entries, zip files and plain files are ignored. A missing
/// directory yields no projects.
pub async fn discover_projects(projects_dir: &Path) -> Result<Vec<String>, DemopackError> {
    if !filesystem::is_dir(projects_dir).await {
        tracing::debug!("Projects directory {} does not exist", projects_dir.display());
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();
    for name in filesystem::list_dir(projects_dir).await? {
        if name.starts_with('.') || name.ends_with(".zip") {
            continue;
        }
        if filesystem::is_dir(&projects_dir.join(&name)).await {
            projects.push(name);
        }
    }
    Ok(projects)
}

/// Build every requested (project, edition) archive.
///
/// Editions of one project run strictly in order, premium first.
pub async fn run(
    paths: &DownloadPaths,
    projects: &ProjectSelector,
    editions: EditionSelector,
    reporter: &dyn Reporter,
) -> Result<BatchSummary, DemopackError> {
    filesystem::create_dir_all(&paths.downloads_dir).await?;

    let targets = match projects {
        ProjectSelector::All => discover_projects(&paths.projects_dir).await?,
        ProjectSelector::Named(name) => vec![name.clone()],
    };

    if targets.is_empty() {
        reporter.error(&format!(
            "No projects found in: {}",
            paths.projects_dir.display()
        ));
        return Err(DemopackError::NoProjects {
            path: paths.projects_dir.clone(),
        });
    }

    reporter.header(&format!(
        "Preparing downloads to: {}",
        paths.downloads_dir.display()
    ));
    tracing::info!(
        "Packaging {} project(s) as {editions}",
        targets.len()
    );

    let mut summary = BatchSummary::default();
    for project in &targets {
        for &edition in editions.editions() {
            let label = format!("{project} ({edition})");
            match timed(reporter, &label, build_archive(paths, project, edition, reporter)).await {
                Ok(report) => summary.built.push(report),
                Err(e) => {
                    reporter.error(&format!(
                        "Failed to create zip for \"{project}\" ({edition}): {e}"
                    ));
                    summary.failed.push(FailedBuild {
                        project: project.clone(),
                        edition,
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    if summary.is_clean() {
        reporter.final_success(&format!(
            "Downloads preparation finished: {} archive(s) built.",
            summary.built.len()
        ));
    } else {
        reporter.final_error(&format!(
            "Downloads preparation finished: {} archive(s) built, {} failed.",
            summary.built.len(),
            summary.failed.len()
        ));
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::{MemoryReporter, ReportLevel};
    use tempfile::TempDir;

    #[test]
    fn test_project_selector_parse() {
        assert_eq!(ProjectSelector::parse(None), ProjectSelector::All);
        assert_eq!(ProjectSelector::parse(Some("all")), ProjectSelector::All);
        assert_eq!(ProjectSelector::parse(Some("")), ProjectSelector::All);
        assert_eq!(
            ProjectSelector::parse(Some("stream-manager")),
            ProjectSelector::Named("stream-manager".to_string())
        );
    }

    #[tokio::test]
    async fn test_discover_skips_hidden_zip_and_files() {
        let dir = TempDir::new().unwrap();
        for name in ["b-project", "a-project", ".cache", "old.zip"] {
            std::fs::create_dir_all(dir.path().join(name)).unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let projects = discover_projects(dir.path()).await.unwrap();

        assert_eq!(projects, vec!["a-project", "b-project"]);
    }

    #[tokio::test]
    async fn test_discover_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let projects = discover_projects(&dir.path().join("projects")).await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_run_without_projects_fails() {
        let root = TempDir::new().unwrap();
        let paths = DownloadPaths::from_root(root.path());
        let reporter = MemoryReporter::new();

        let err = run(&paths, &ProjectSelector::All, EditionSelector::Both, &reporter)
            .await
            .unwrap_err();

        assert!(matches!(err, DemopackError::NoProjects { .. }));
        assert!(reporter.contains(ReportLevel::Error, "No projects found in"));
        assert!(paths.downloads_dir.is_dir());
    }

    #[tokio::test]
    async fn test_run_continues_after_failed_build() {
        let root = TempDir::new().unwrap();
        let paths = DownloadPaths::from_root(root.path());
        let reporter = MemoryReporter::new();

        let summary = run(
            &paths,
            &ProjectSelector::Named("missing".to_string()),
            EditionSelector::Both,
            &reporter,
        )
        .await
        .unwrap();

        assert!(summary.built.is_empty());
        let failed: Vec<_> = summary.failed.iter().map(|f| f.edition).collect();
        assert_eq!(failed, vec![Edition::Premium, Edition::Community]);
        assert!(reporter.contains(
            ReportLevel::Error,
            "Failed to create zip for \"missing\" (community)"
        ));
        assert!(reporter.contains(ReportLevel::Error, "0 archive(s) built, 2 failed"));
    }
}
