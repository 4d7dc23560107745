//! Archive building
//!
//! Produces `<downloads>/<project>-<edition>.zip` for one (project, edition)
//! pair. Every call is a full rebuild: an existing archive is deleted before
//! the new one is written.

use std::path::{Path, PathBuf};

use crate::config::defaults::{MANIFEST_FILE, README_FILE, ZIP_COMPRESSION_LEVEL};
use crate::core::edition::Edition;
use crate::core::entry::ArchiveEntry;
use crate::core::manifest::PackageManifest;
use crate::core::paths::DownloadPaths;
use crate::core::report::Reporter;
use crate::core::templates::readme;
use crate::core::versions::DependencyVersionPair;
use crate::core::walker::{should_skip_name, TreeWalker};
use crate::error::BuildError;
use crate::infra::{archive, filesystem};

/// Summary of a finished archive
#[derive(Debug, Clone)]
pub struct ArchiveReport {
    pub project: String,
    pub edition: Edition,
    /// Location of the written archive
    pub path: PathBuf,
    /// Compressed size in bytes
    pub bytes: u64,
    /// Number of entries in the archive
    pub entries: usize,
    /// Files rewritten for the community edition
    pub modified_files: Vec<String>,
}

/// Build one archive, reporting failures before returning them
pub async fn build_archive(
    paths: &DownloadPaths,
    project: &str,
    edition: Edition,
    reporter: &dyn Reporter,
) -> Result<ArchiveReport, BuildError> {
    let icon = match edition {
        Edition::Premium => "💎",
        Edition::Community => "🌟",
    };
    reporter.header(&format!("{icon} Building {edition} version..."));

    let result = build(paths, project, edition, reporter).await;
    if let Err(e) = &result {
        tracing::error!(project, %edition, "Archive build failed: {e}");
        reporter.error(&format!("Failed to build {project} ({edition}): {e}"));
    }
    result
}

async fn build(
    paths: &DownloadPaths,
    project: &str,
    edition: Edition,
    reporter: &dyn Reporter,
) -> Result<ArchiveReport, BuildError> {
    let project_dir = paths.project_dir(project);
    if !filesystem::is_dir(&project_dir).await {
        return Err(BuildError::ProjectNotFound { path: project_dir });
    }

    // Both are resolved: the readme mentions the pair
    let versions = DependencyVersionPair::resolve(&project_dir, reporter);

    let file_name = edition.archive_name(project);
    let output = paths.archive_path(&file_name);
    if filesystem::remove_file_if_exists(&output).await? {
        tracing::debug!("Removed previous archive {}", output.display());
    }

    let mut walker = TreeWalker::new(&project_dir, edition, reporter);
    for name in filesystem::list_dir(&project_dir).await? {
        if should_skip_name(&name) || name.ends_with(".zip") {
            continue;
        }
        let path = project_dir.join(&name);

        if filesystem::is_dir(&path).await {
            walker.walk(&path)?;
        } else if name == MANIFEST_FILE {
            let manifest = standalone_manifest(&path, edition, &versions, project, reporter).await?;
            walker.push(ArchiveEntry::text(MANIFEST_FILE, manifest));
        } else {
            walker.add_file(&path);
        }
    }

    let modified = walker.modified_files();
    if edition == Edition::Community && !modified.is_empty() {
        reporter.info(
            &format!("Modified {} files for community version:", modified.len()),
            2,
        );
        for file in modified {
            reporter.info(file, 4);
        }
    }

    walker.push(ArchiveEntry::text(
        README_FILE,
        readme(project, edition, &versions.community, &versions.premium),
    ));

    let (plan, modified_files) = walker.finish();
    let entries = plan.len();
    tracing::info!("Writing {entries} entries to {}", output.display());

    let bytes = archive::finalize(plan.into_entries(), output.clone(), ZIP_COMPRESSION_LEVEL).await?;
    reporter.size(&file_name, bytes);

    Ok(ArchiveReport {
        project: project.to_string(),
        edition,
        path: output,
        bytes,
        entries,
        modified_files,
    })
}

/// Read the project manifest and render its standalone form for `edition`
async fn standalone_manifest(
    path: &Path,
    edition: Edition,
    versions: &DependencyVersionPair,
    project: &str,
    reporter: &dyn Reporter,
) -> Result<String, BuildError> {
    let manifest_err = |error: String| BuildError::Manifest {
        path: path.to_path_buf(),
        error,
    };

    let raw = filesystem::read_file(path).await?;
    let manifest = PackageManifest::from_json(&raw).map_err(|e| manifest_err(e.to_string()))?;
    let next = manifest.for_edition(edition, versions, project);

    reporter.version(
        edition,
        edition.dock_manager_package(),
        versions.for_edition(edition),
    );

    next.to_json_pretty().map_err(|e| manifest_err(e.to_string()))
}
