//! Repository layout
//!
//! Source projects live under `<root>/projects`, produced archives under
//! `<root>/public/downloads`. Resolution is pure path arithmetic and never
//! touches the filesystem.

use std::path::{Path, PathBuf};

/// Absolute locations used by a packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPaths {
    /// Repository root
    pub repo_root: PathBuf,
    /// Directory holding one sub-directory per source project
    pub projects_dir: PathBuf,
    /// Directory receiving the produced archives
    pub downloads_dir: PathBuf,
}

impl DownloadPaths {
    /// Derive all paths from the repository root
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let repo_root = root.into();
        Self {
            projects_dir: repo_root.join("projects"),
            downloads_dir: repo_root.join("public").join("downloads"),
            repo_root,
        }
    }

    /// Source directory of a single project
    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.projects_dir.join(project)
    }

    /// Output path of an archive
    pub fn archive_path(&self, file_name: &str) -> PathBuf {
        self.downloads_dir.join(file_name)
    }

    /// Root the paths were derived from
    pub fn root(&self) -> &Path {
        &self.repo_root
    }
}
